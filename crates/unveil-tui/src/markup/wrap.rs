use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::style::{Style, StyledLine, StyledSpan};

/// Options for wrapping styled spans with hanging indents.
#[derive(Debug, Clone, Default)]
pub struct WrapOptions {
    /// Maximum display width for lines, prefixes included.
    pub width: usize,
    /// Prefix spans for the first line (e.g. a list bullet).
    pub first_prefix: Vec<StyledSpan>,
    /// Prefix spans for continuation lines.
    pub rest_prefix: Vec<StyledSpan>,
}

impl WrapOptions {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            first_prefix: vec![],
            rest_prefix: vec![],
        }
    }

    #[must_use]
    pub fn with_prefixes(mut self, first: Vec<StyledSpan>, rest: Vec<StyledSpan>) -> Self {
        self.first_prefix = first;
        self.rest_prefix = rest;
        self
    }
}

/// Unit of wrapping work.
enum Atom {
    Word(StyledSpan),
    Space(Style),
    Break,
}

fn atoms(spans: &[StyledSpan]) -> Vec<Atom> {
    let mut out = Vec::new();
    for span in spans {
        for (i, part) in span.text.split('\n').enumerate() {
            if i > 0 {
                out.push(Atom::Break);
            }
            if part.is_empty() {
                continue;
            }
            if span.style.preserves_whitespace() {
                out.push(Atom::Word(StyledSpan::new(part, span.style)));
                continue;
            }
            if part.starts_with(char::is_whitespace) {
                out.push(Atom::Space(span.style));
            }
            let mut words = part.split_whitespace().peekable();
            while let Some(word) = words.next() {
                out.push(Atom::Word(StyledSpan::new(word, span.style)));
                if words.peek().is_some() {
                    out.push(Atom::Space(span.style));
                }
            }
            if part.ends_with(char::is_whitespace) && !part.trim().is_empty() {
                out.push(Atom::Space(span.style));
            }
        }
    }
    out
}

/// Splits a span into fragments no wider than `max_width` columns.
fn split_by_width(span: &StyledSpan, max_width: usize) -> Vec<StyledSpan> {
    let max_width = max_width.max(1);
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in span.text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > max_width && !current.is_empty() {
            parts.push(StyledSpan::new(std::mem::take(&mut current), span.style));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    if !current.is_empty() {
        parts.push(StyledSpan::new(current, span.style));
    }
    parts
}

fn prefix_width(prefix: &[StyledSpan]) -> usize {
    prefix.iter().map(|s| s.text.width()).sum()
}

struct LineBuilder<'a> {
    opts: &'a WrapOptions,
    lines: Vec<StyledLine>,
    spans: Vec<StyledSpan>,
    width: usize,
    pending_space: Option<Style>,
}

impl<'a> LineBuilder<'a> {
    fn new(opts: &'a WrapOptions) -> Self {
        Self {
            opts,
            lines: Vec::new(),
            spans: Vec::new(),
            width: 0,
            pending_space: None,
        }
    }

    fn available(&self) -> usize {
        let prefix = if self.lines.is_empty() {
            &self.opts.first_prefix
        } else {
            &self.opts.rest_prefix
        };
        self.opts.width.saturating_sub(prefix_width(prefix)).max(1)
    }

    fn flush(&mut self) {
        let mut spans = if self.lines.is_empty() {
            self.opts.first_prefix.clone()
        } else {
            self.opts.rest_prefix.clone()
        };
        spans.append(&mut self.spans);
        self.lines.push(StyledLine { spans });
        self.width = 0;
        self.pending_space = None;
    }

    fn push(&mut self, span: StyledSpan, span_width: usize) {
        if let Some(style) = self.pending_space.take() {
            self.spans.push(StyledSpan::new(" ", style));
            self.width += 1;
        }
        self.spans.push(span);
        self.width += span_width;
    }

    fn word(&mut self, word: StyledSpan) {
        let word_width = word.text.width();
        let space = usize::from(self.pending_space.is_some());

        if self.width + space + word_width <= self.available() {
            self.push(word, word_width);
            return;
        }

        if self.width > 0 {
            self.flush();
        }
        self.pending_space = None;

        if word_width <= self.available() {
            self.push(word, word_width);
            return;
        }

        for fragment in split_by_width(&word, self.available()) {
            let fragment_width = fragment.text.width();
            if self.width > 0 && self.width + fragment_width > self.available() {
                self.flush();
            }
            self.push(fragment, fragment_width);
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        if !self.spans.is_empty() || self.lines.is_empty() {
            self.flush();
        }
        self.lines
    }
}

/// Wraps styled spans to `opts.width`, keeping styles across line breaks.
///
/// Ordinary text breaks at word boundaries and collapses whitespace runs;
/// code keeps its spacing and is broken by column when too wide. `\n`
/// inside a span forces a new line.
pub fn wrap_spans(spans: &[StyledSpan], opts: &WrapOptions) -> Vec<StyledLine> {
    if opts.width == 0 {
        let mut all = opts.first_prefix.clone();
        all.extend(spans.iter().cloned());
        return vec![StyledLine { spans: all }];
    }

    let mut builder = LineBuilder::new(opts);
    for atom in atoms(spans) {
        match atom {
            Atom::Word(word) => builder.word(word),
            Atom::Space(style) => {
                if builder.width > 0 {
                    builder.pending_space = Some(style);
                }
            }
            Atom::Break => builder.flush(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str) -> StyledSpan {
        StyledSpan::new(text, Style::Body)
    }

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_fits_on_one_line() {
        let lines = wrap_spans(&[body("hello world")], &WrapOptions::new(20));
        assert_eq!(texts(&lines), vec!["hello world"]);
        assert!(lines[0].spans.iter().all(|s| s.style == Style::Body));
    }

    #[test]
    fn test_breaks_at_word_boundary() {
        let lines = wrap_spans(&[body("hello world")], &WrapOptions::new(8));
        assert_eq!(texts(&lines), vec!["hello", "world"]);
    }

    #[test]
    fn test_style_survives_break() {
        let spans = vec![body("hello "), StyledSpan::new("world", Style::Strong)];
        let lines = wrap_spans(&spans, &WrapOptions::new(8));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].spans[0].style, Style::Strong);
    }

    #[test]
    fn test_adjacent_spans_join_without_space() {
        let spans = vec![StyledSpan::new("bold", Style::Strong), body(", then")];
        let lines = wrap_spans(&spans, &WrapOptions::new(40));
        assert_eq!(texts(&lines), vec!["bold, then"]);
    }

    #[test]
    fn test_code_keeps_inner_spaces() {
        let spans = vec![StyledSpan::new("foo  bar", Style::CodeInline)];
        let lines = wrap_spans(&spans, &WrapOptions::new(20));
        assert_eq!(lines[0].spans[0].text, "foo  bar");
    }

    #[test]
    fn test_long_word_is_split_by_columns() {
        let lines = wrap_spans(&[body("abcdefghij")], &WrapOptions::new(4));
        assert_eq!(texts(&lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wide_characters_count_two_columns() {
        let lines = wrap_spans(&[body("日本語テキスト")], &WrapOptions::new(6));
        assert_eq!(texts(&lines), vec!["日本語", "テキス", "ト"]);
    }

    #[test]
    fn test_newline_forces_break() {
        let lines = wrap_spans(&[body("one\ntwo")], &WrapOptions::new(20));
        assert_eq!(texts(&lines), vec!["one", "two"]);
    }

    #[test]
    fn test_hanging_indent() {
        let opts = WrapOptions::new(12).with_prefixes(
            vec![StyledSpan::new("• ", Style::ListMarker)],
            vec![StyledSpan::new("  ", Style::Plain)],
        );
        let lines = wrap_spans(&[body("alpha beta gamma delta")], &opts);
        assert_eq!(lines[0].spans[0].text, "• ");
        assert!(lines.len() > 1);
        assert!(lines[1..].iter().all(|l| l.spans[0].text == "  "));
        assert!(lines.iter().all(|l| l.text().width() <= 12));
    }

    #[test]
    fn test_empty_input_yields_prefix_line() {
        let opts = WrapOptions::new(10).with_prefixes(vec![body("> ")], vec![]);
        let lines = wrap_spans(&[], &opts);
        assert_eq!(texts(&lines), vec!["> "]);
    }
}
