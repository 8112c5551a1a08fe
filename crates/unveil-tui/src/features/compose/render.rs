//! Compose screen view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthChar;

use super::{ComposeState, TextBuffer};
use crate::markup::TAB_WIDTH;

const PLACEHOLDER: &str = "Paste or type the text to reveal…";

/// Buffer rows wrapped to the panel width, with the cursor's visual position.
struct WrappedBuffer {
    lines: Vec<Line<'static>>,
    cursor_row: usize,
    cursor_col: usize,
}

/// Wraps by display width so wide characters keep the cursor aligned.
fn wrap_buffer(buffer: &TextBuffer, width: usize) -> WrappedBuffer {
    let width = width.max(1);
    let (cursor_line, cursor_char) = buffer.cursor();
    let mut lines = Vec::new();
    let mut cursor = (0, 0);

    for (row, text) in buffer.lines().iter().enumerate() {
        let mut current = String::new();
        let mut current_width = 0;
        let mut char_count = 0;

        for (col, ch) in text.chars().enumerate() {
            let ch_width = if ch == '\t' {
                TAB_WIDTH
            } else {
                ch.width().unwrap_or(0)
            };
            if current_width + ch_width > width && !current.is_empty() {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }
            if row == cursor_line && col == cursor_char {
                cursor = (lines.len(), current_width);
            }
            if ch == '\t' {
                current.push_str(&" ".repeat(TAB_WIDTH));
            } else {
                current.push(ch);
            }
            current_width += ch_width;
            char_count += 1;
        }

        if row == cursor_line && cursor_char >= char_count {
            if current_width >= width {
                lines.push(Line::from(std::mem::take(&mut current)));
                current_width = 0;
            }
            cursor = (lines.len(), current_width);
        }
        lines.push(Line::from(current));
    }

    WrappedBuffer {
        lines,
        cursor_row: cursor.0,
        cursor_col: cursor.1,
    }
}

pub fn render_compose(compose: &ComposeState, frame: &mut Frame, area: Rect) {
    let line_count = compose.line_count();
    let count_label = match line_count {
        1 => " 1 line ".to_string(),
        n => format!(" {n} lines "),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            " Compose ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .title(Line::from(count_label).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if compose.buffer.text().is_empty() {
        let placeholder = Paragraph::new(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(placeholder, inner);
        frame.set_cursor_position(Position::new(inner.x, inner.y));
        return;
    }

    let wrapped = wrap_buffer(&compose.buffer, inner.width as usize);
    let height = inner.height as usize;
    let scroll = wrapped.cursor_row.saturating_sub(height - 1);

    let paragraph = Paragraph::new(wrapped.lines).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, inner);

    let x = inner.x + (wrapped.cursor_col as u16).min(inner.width.saturating_sub(1));
    let y = inner.y + (wrapped.cursor_row - scroll) as u16;
    frame.set_cursor_position(Position::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(wrapped: &WrappedBuffer) -> Vec<String> {
        wrapped.lines.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn test_wrap_tracks_cursor_at_end() {
        let buffer = TextBuffer::from_text("abcdef");
        let wrapped = wrap_buffer(&buffer, 4);
        assert_eq!(texts(&wrapped), vec!["abcd", "ef"]);
        assert_eq!((wrapped.cursor_row, wrapped.cursor_col), (1, 2));
    }

    #[test]
    fn test_wrap_cursor_after_full_row_moves_down() {
        let buffer = TextBuffer::from_text("abcd");
        let wrapped = wrap_buffer(&buffer, 4);
        assert_eq!(texts(&wrapped), vec!["abcd", ""]);
        assert_eq!((wrapped.cursor_row, wrapped.cursor_col), (1, 0));
    }

    #[test]
    fn test_wrap_expands_tabs_for_display() {
        let buffer = TextBuffer::from_text("a\tb");
        let wrapped = wrap_buffer(&buffer, 20);
        assert_eq!(texts(&wrapped), vec!["a    b"]);
        assert_eq!((wrapped.cursor_row, wrapped.cursor_col), (0, 6));
        assert_eq!(buffer.text(), "a\tb");
    }

    #[test]
    fn test_wrap_wide_chars() {
        let buffer = TextBuffer::from_text("中文字");
        let wrapped = wrap_buffer(&buffer, 5);
        assert_eq!(texts(&wrapped), vec!["中文", "字"]);
        assert_eq!((wrapped.cursor_row, wrapped.cursor_col), (1, 2));
    }
}
