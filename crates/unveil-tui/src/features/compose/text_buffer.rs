//! Editable multi-line buffer for the compose screen.
//!
//! Supports what pasting and light touch-ups need: insertion, deletion
//! and cursor movement. The cursor column is counted in chars.

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }
}

impl TextBuffer {
    /// Creates a buffer holding `text` with the cursor at the end.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.insert_str(text);
        buffer
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, col) in char units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// Buffer content with rows joined by `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// True if the buffer holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Inserts text at the cursor. `\r\n` and lone `\r` become row breaks.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

        let row = self.cursor_row;
        let current = std::mem::take(&mut self.lines[row]);
        let byte_idx = char_to_byte_index(&current, self.cursor_col);
        let (prefix, suffix) = current.split_at(byte_idx);

        let parts: Vec<&str> = normalized.split('\n').collect();
        let last = parts.len() - 1;

        let mut new_lines = Vec::with_capacity(parts.len());
        for (idx, part) in parts.iter().enumerate() {
            let mut line = String::new();
            if idx == 0 {
                line.push_str(prefix);
            }
            line.push_str(part);
            if idx == last {
                line.push_str(suffix);
            }
            new_lines.push(line);
        }

        self.lines.splice(row..=row, new_lines);
        self.cursor_row = row + last;
        self.cursor_col = if last == 0 {
            self.cursor_col + parts[0].chars().count()
        } else {
            parts[last].chars().count()
        };
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Delete key semantics: removes the char under the cursor or joins
    /// the next row.
    pub fn delete_next_char(&mut self) {
        let row = self.cursor_row;
        let col = self.cursor_col;

        if col >= line_char_len(&self.lines[row]) {
            if row + 1 < self.lines.len() {
                let next = self.lines.remove(row + 1);
                self.lines[row].push_str(&next);
            }
            return;
        }

        let line = &mut self.lines[row];
        let start = char_to_byte_index(line, col);
        let end = char_to_byte_index(line, col + 1);
        line.replace_range(start..end, "");
    }

    /// Backspace semantics: removes the char before the cursor or joins
    /// with the previous row.
    pub fn delete_prev_char(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col - 1;
            let line = &mut self.lines[self.cursor_row];
            let start = char_to_byte_index(line, col);
            let end = char_to_byte_index(line, col + 1);
            line.replace_range(start..end, "");
            self.cursor_col = col;
            return;
        }

        if self.cursor_row == 0 {
            return;
        }

        let row = self.cursor_row;
        let prev_len = line_char_len(&self.lines[row - 1]);
        let current = self.lines.remove(row);
        self.lines[row - 1].push_str(&current);
        self.cursor_row -= 1;
        self.cursor_col = prev_len;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Up => {
                if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.clamp_col();
                }
            }
            CursorMove::Down => {
                if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.clamp_col();
                }
            }
            CursorMove::Forward => {
                if self.cursor_col < line_char_len(&self.lines[self.cursor_row]) {
                    self.cursor_col += 1;
                } else if self.cursor_row + 1 < self.lines.len() {
                    self.cursor_row += 1;
                    self.cursor_col = 0;
                }
            }
            CursorMove::Back => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_row > 0 {
                    self.cursor_row -= 1;
                    self.cursor_col = line_char_len(&self.lines[self.cursor_row]);
                }
            }
            CursorMove::Head => self.cursor_col = 0,
            CursorMove::End => self.cursor_col = line_char_len(&self.lines[self.cursor_row]),
            CursorMove::Top => {
                self.cursor_row = 0;
                self.clamp_col();
            }
            CursorMove::Bottom => {
                self.cursor_row = self.lines.len() - 1;
                self.clamp_col();
            }
        }
    }

    fn clamp_col(&mut self) {
        self.cursor_col = self
            .cursor_col
            .min(line_char_len(&self.lines[self.cursor_row]));
    }
}

fn line_char_len(line: &str) -> usize {
    line.chars().count()
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(idx, _)| idx)
}
