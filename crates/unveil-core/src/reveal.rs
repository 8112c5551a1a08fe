//! Line tokenizer and reveal state machine.
//!
//! Raw text is split into trimmed, non-empty [`Line`]s by [`tokenize`]. A
//! [`RevealController`] walks that sequence one line per reveal event,
//! keeping the committed text and the highlighted next line in sync.
//!
//! ```text
//! tokenize("a\n\n b ")  ->  [a, b]
//!
//! initialize   position 0   revealed ""      current Some(a)
//! advance      position 1   revealed "a"     current Some(b)
//! advance      position 2   revealed "a\nb"  current None
//! advance      (no-op)
//! ```

use std::fmt;
use std::ops::Deref;

/// Separator used when committing lines to the revealed text.
pub const LINE_SEPARATOR: &str = "\n";

/// One trimmed, non-empty unit of text.
///
/// Only [`tokenize`] constructs lines, so the non-empty invariant holds for
/// every value in circulation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line(String);

impl Line {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Line {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Line {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Line {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered sequence of lines produced by one tokenize pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence(Vec<Line>);

impl LineSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Line] {
        &self.0
    }

    /// Joins every line with [`LINE_SEPARATOR`].
    pub fn join(&self) -> String {
        join_lines(&self.0)
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_lines(lines: &[Line]) -> String {
    lines
        .iter()
        .map(Line::as_str)
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Splits raw text into trimmed, non-empty lines.
///
/// Blank and whitespace-only segments are dropped; order is preserved and
/// duplicates are kept. Empty or all-blank input gives an empty sequence,
/// which callers must treat as "nothing to reveal".
pub fn tokenize(raw: &str) -> LineSequence {
    LineSequence(
        raw.split(is_line_break)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| Line(segment.to_string()))
            .collect(),
    )
}

/// Reveal progress as exposed to the host: `(position, total)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    /// True once every line has been committed.
    pub fn is_finished(&self) -> bool {
        self.total > 0 && self.position >= self.total
    }

    /// Whole-number percentage, 0 for an empty sequence.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.position * 100) / self.total).min(100) as u8
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.position, self.total)
    }
}

/// Owns the line sequence and the reveal cursor.
///
/// `revealed` is a cache of `lines[..position]` joined by
/// [`LINE_SEPARATOR`]; only `initialize`, `advance` and `reset` touch
/// `position`, and each of them keeps the cache exact.
#[derive(Debug, Clone, Default)]
pub struct RevealController {
    lines: LineSequence,
    position: usize,
    revealed: String,
}

impl RevealController {
    pub fn new(lines: LineSequence) -> Self {
        let mut controller = Self::default();
        controller.initialize(lines);
        controller
    }

    /// Replaces the sequence and rewinds to the first line.
    pub fn initialize(&mut self, lines: LineSequence) {
        self.lines = lines;
        self.position = 0;
        self.revealed.clear();
    }

    /// Commits the current line.
    ///
    /// Returns `false` (and changes nothing) once the sequence is exhausted.
    pub fn advance(&mut self) -> bool {
        let Some(line) = self.lines.get(self.position) else {
            return false;
        };
        if !self.revealed.is_empty() {
            self.revealed.push_str(LINE_SEPARATOR);
        }
        self.revealed.push_str(line.as_str());
        self.position += 1;
        true
    }

    /// Rewinds to the first line without re-tokenizing.
    pub fn reset(&mut self) {
        self.position = 0;
        self.revealed.clear();
    }

    pub fn revealed_text(&self) -> &str {
        &self.revealed
    }

    /// The highlighted, not yet committed line.
    pub fn current_line(&self) -> Option<&Line> {
        self.lines.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total(&self) -> usize {
        self.lines.len()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            position: self.position,
            total: self.total(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress().is_finished()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> &LineSequence {
        &self.lines
    }

    /// Committed lines, in order.
    pub fn revealed_lines(&self) -> &[Line] {
        &self.lines.as_slice()[..self.position]
    }
}
