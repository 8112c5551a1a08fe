//! Markdown and plain-text line rendering.
//!
//! - `render_markup()`: markdown text into wrapped styled lines
//! - `render_plain()`: plain text into wrapped styled lines
//! - `wrap_spans()`: word wrapping with hanging indents
//!
//! Output is terminal-agnostic (`StyledLine`); the reader converts it to
//! ratatui lines with its own tone (revealed, current, dimmed).

use std::borrow::Cow;

mod parse;
mod style;
mod wrap;

pub use parse::render_markup;
pub use style::{Style, StyledLine, StyledSpan};
pub use wrap::{WrapOptions, wrap_spans};

/// Columns a tab occupies on screen.
pub const TAB_WIDTH: usize = 4;

/// Replaces tabs with spaces for display. Line values keep their tabs.
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', &" ".repeat(TAB_WIDTH)))
    } else {
        Cow::Borrowed(text)
    }
}

/// Renders text without markdown interpretation, one source line per row
/// before wrapping.
pub fn render_plain(text: &str, width: usize) -> Vec<StyledLine> {
    if text.is_empty() {
        return Vec::new();
    }
    let span = StyledSpan::new(text, Style::Body);
    wrap_spans(std::slice::from_ref(&span), &WrapOptions::new(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_keeps_markdown_literal() {
        let lines = render_plain("# not a heading\n**x**", 40);
        let texts: Vec<String> = lines.iter().map(StyledLine::text).collect();
        assert_eq!(texts, vec!["# not a heading", "**x**"]);
        assert!(lines.iter().flat_map(|l| &l.spans).all(|s| s.style == Style::Body));
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("a\tb"), "a    b");
        assert!(matches!(expand_tabs("no tabs"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_render_plain_empty() {
        assert!(render_plain("", 40).is_empty());
    }
}
