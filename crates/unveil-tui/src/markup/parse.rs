use comfy_table::{ContentArrangement, Table};
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use unicode_width::UnicodeWidthStr;

use super::style::{Style, StyledLine, StyledSpan};
use super::wrap::{WrapOptions, wrap_spans};

/// Renders markdown into wrapped, styled lines.
///
/// Soft breaks are kept as line breaks: every source line the reader
/// reveals stays on its own row. Raw HTML is dropped.
pub fn render_markup(text: &str, width: usize) -> Vec<StyledLine> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut writer = MarkupWriter::new(width);
    for event in Parser::new_ext(text, options) {
        writer.event(event);
    }
    writer.finish()
}

#[derive(Debug, Default)]
struct TableBuffer {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: String,
    in_head: bool,
}

impl TableBuffer {
    fn end_cell(&mut self) {
        let cell = std::mem::take(&mut self.cell);
        self.row.push(cell.trim().to_string());
    }

    fn end_row(&mut self) {
        let row = std::mem::take(&mut self.row);
        if self.in_head {
            self.header = row;
        } else {
            self.rows.push(row);
        }
    }

    fn render(&self, width: usize) -> Vec<String> {
        let mut table = Table::new();
        table.set_width(width.min(usize::from(u16::MAX)) as u16);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        if !self.header.is_empty() {
            table.set_header(&self.header);
        }
        for row in &self.rows {
            table.add_row(row);
        }
        table.to_string().lines().map(String::from).collect()
    }
}

#[derive(Debug)]
struct CodeBuffer {
    lang: Option<String>,
    text: String,
}

#[derive(Debug, Clone, Copy)]
struct ListFrame {
    /// Next number for ordered lists, `None` for bullets.
    next: Option<u64>,
}

struct MarkupWriter {
    width: usize,
    lines: Vec<StyledLine>,
    pending: Vec<StyledSpan>,
    styles: Vec<Style>,
    lists: Vec<ListFrame>,
    /// Marker waiting for the first block of the current list item.
    item_marker: Option<StyledSpan>,
    quote_depth: usize,
    code: Option<CodeBuffer>,
    table: Option<TableBuffer>,
}

impl MarkupWriter {
    fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            pending: Vec::new(),
            styles: vec![Style::Body],
            lists: Vec::new(),
            item_marker: None,
            quote_depth: 0,
            code: None,
            table: None,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or(Style::Body)
    }

    fn push_style(&mut self, style: Style) {
        self.styles.push(style);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak | Event::HardBreak => self.line_break(),
            Event::Rule => {
                self.flush_block();
                self.lines.push(StyledLine {
                    spans: vec![StyledSpan::new("─".repeat(self.width.clamp(1, 40)), Style::Rule)],
                });
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.pending.push(StyledSpan::new(marker, Style::ListMarker));
            }
            Event::InlineMath(math) | Event::DisplayMath(math) => self.text(&math),
            // HTML is never forwarded to the terminal.
            Event::Html(_) | Event::InlineHtml(_) | Event::FootnoteReference(_) => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => {
                self.flush_block();
                self.push_style(match level {
                    HeadingLevel::H1 => Style::H1,
                    HeadingLevel::H2 => Style::H2,
                    _ => Style::H3,
                });
            }
            Tag::CodeBlock(kind) => {
                self.flush_block();
                let lang = match kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                self.code = Some(CodeBuffer {
                    lang,
                    text: String::new(),
                });
            }
            Tag::List(start) => {
                self.flush_block();
                self.lists.push(ListFrame { next: start });
            }
            Tag::Item => {
                self.flush_block();
                let marker = match self.lists.last_mut() {
                    Some(ListFrame { next: Some(n) }) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.item_marker = Some(StyledSpan::new(marker, Style::ListMarker));
            }
            Tag::BlockQuote(_) => {
                self.flush_block();
                self.quote_depth += 1;
                self.push_style(Style::BlockQuote);
            }
            Tag::Emphasis => self.push_style(Style::Emphasis),
            Tag::Strong => self.push_style(Style::Strong),
            Tag::Strikethrough => self.push_style(Style::Strikethrough),
            Tag::Link { .. } | Tag::Image { .. } => self.push_style(Style::Link),
            Tag::Table(_) => {
                self.flush_block();
                self.table = Some(TableBuffer::default());
            }
            Tag::TableHead => {
                if let Some(table) = &mut self.table {
                    table.in_head = true;
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => self.flush_block(),
            TagEnd::Heading(_) => {
                self.flush_block();
                self.pop_style();
            }
            TagEnd::CodeBlock => self.flush_code(),
            TagEnd::List(_) => {
                self.flush_block();
                self.lists.pop();
            }
            TagEnd::Item => {
                self.flush_block();
                self.item_marker = None;
            }
            TagEnd::BlockQuote(_) => {
                self.flush_block();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.pop_style();
            }
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::Link
            | TagEnd::Image => self.pop_style(),
            TagEnd::TableCell => {
                if let Some(table) = &mut self.table {
                    table.end_cell();
                }
            }
            TagEnd::TableHead => {
                if let Some(table) = &mut self.table {
                    table.end_row();
                    table.in_head = false;
                }
            }
            TagEnd::TableRow => {
                if let Some(table) = &mut self.table {
                    table.end_row();
                }
            }
            TagEnd::Table => self.flush_table(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(code) = &mut self.code {
            code.text.push_str(text);
        } else if let Some(table) = &mut self.table {
            table.cell.push_str(&text.replace('\n', " "));
        } else {
            self.pending.push(StyledSpan::new(text, self.style()));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if let Some(table) = &mut self.table {
            table.cell.push('`');
            table.cell.push_str(code);
            table.cell.push('`');
        } else {
            self.pending.push(StyledSpan::new(code, Style::CodeInline));
        }
    }

    fn line_break(&mut self) {
        if let Some(table) = &mut self.table {
            table.cell.push(' ');
        } else {
            self.pending.push(StyledSpan::new("\n", self.style()));
        }
    }

    /// Prefixes for the current nesting: quote bars, list indent, marker.
    fn prefixes(&mut self) -> (Vec<StyledSpan>, Vec<StyledSpan>) {
        let mut first = Vec::new();
        if self.quote_depth > 0 {
            first.push(StyledSpan::new("│ ".repeat(self.quote_depth), Style::BlockQuote));
        }
        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        if !indent.is_empty() {
            first.push(StyledSpan::new(indent, Style::Plain));
        }
        let mut rest = first.clone();

        if self.lists.is_empty() {
            return (first, rest);
        }
        match self.item_marker.take() {
            Some(marker) => {
                rest.push(StyledSpan::new(" ".repeat(marker.text.width()), Style::Plain));
                first.push(marker);
            }
            None => {
                first.push(StyledSpan::new("  ", Style::Plain));
                rest.push(StyledSpan::new("  ", Style::Plain));
            }
        }
        (first, rest)
    }

    fn flush_block(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.pending);
        let (first, rest) = self.prefixes();
        let opts = WrapOptions::new(self.width).with_prefixes(first, rest);
        self.lines.extend(wrap_spans(&spans, &opts));
    }

    fn flush_code(&mut self) {
        let Some(code) = self.code.take() else {
            return;
        };
        let fence = match &code.lang {
            Some(lang) => format!("```{lang}"),
            None => "```".to_string(),
        };
        self.lines.push(StyledLine {
            spans: vec![StyledSpan::new(fence, Style::CodeFence)],
        });
        let body = code.text.trim_end_matches('\n');
        if !body.is_empty() {
            for line in body.split('\n') {
                self.lines.push(StyledLine {
                    spans: vec![
                        StyledSpan::new("  ", Style::Plain),
                        StyledSpan::new(line, Style::CodeBlock),
                    ],
                });
            }
        }
        self.lines.push(StyledLine {
            spans: vec![StyledSpan::new("```", Style::CodeFence)],
        });
    }

    fn flush_table(&mut self) {
        let Some(table) = self.table.take() else {
            return;
        };
        for line in table.render(self.width) {
            self.lines.push(StyledLine {
                spans: vec![StyledSpan::new(line, Style::Table)],
            });
        }
    }

    fn finish(mut self) -> Vec<StyledLine> {
        // Unterminated fences still show their content.
        if self.code.is_some() {
            self.flush_code();
        }
        self.flush_block();
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_style(lines: &[StyledLine], style: Style) -> bool {
        lines.iter().any(|l| l.spans.iter().any(|s| s.style == style))
    }

    fn texts(lines: &[StyledLine]) -> Vec<String> {
        lines.iter().map(StyledLine::text).collect()
    }

    #[test]
    fn test_plain_text_is_body() {
        let lines = render_markup("Just plain text", 80);
        assert_eq!(texts(&lines), vec!["Just plain text"]);
        assert!(has_style(&lines, Style::Body));
    }

    #[test]
    fn test_blank_input_renders_nothing() {
        assert!(render_markup("", 80).is_empty());
        assert!(render_markup("  ", 80).is_empty());
    }

    #[test]
    fn test_soft_breaks_keep_source_lines() {
        let lines = render_markup("first line\nsecond line", 80);
        assert_eq!(texts(&lines), vec!["first line", "second line"]);
    }

    #[test]
    fn test_inline_styles() {
        let lines = render_markup("**bold**, *italic* and `code`", 80);
        assert!(has_style(&lines, Style::Strong));
        assert!(has_style(&lines, Style::Emphasis));
        assert!(has_style(&lines, Style::CodeInline));
        assert_eq!(texts(&lines), vec!["bold, italic and code"]);
    }

    #[test]
    fn test_headings() {
        let lines = render_markup("# One\n## Two\n### Three", 80);
        assert_eq!(texts(&lines), vec!["One", "Two", "Three"]);
        assert!(has_style(&lines, Style::H1));
        assert!(has_style(&lines, Style::H2));
        assert!(has_style(&lines, Style::H3));
    }

    #[test]
    fn test_lists() {
        let lines = render_markup("- apple\n- pear", 80);
        assert_eq!(texts(&lines), vec!["• apple", "• pear"]);

        let lines = render_markup("3. three\n4. four", 80);
        assert_eq!(texts(&lines), vec!["3. three", "4. four"]);
        assert!(has_style(&lines, Style::ListMarker));
    }

    #[test]
    fn test_task_list() {
        let lines = render_markup("- [x] done\n- [ ] todo", 80);
        assert_eq!(texts(&lines), vec!["• [x] done", "• [ ] todo"]);
    }

    #[test]
    fn test_blockquote_bar() {
        let lines = render_markup("> quoted", 80);
        assert_eq!(texts(&lines), vec!["│ quoted"]);
        assert!(has_style(&lines, Style::BlockQuote));
    }

    #[test]
    fn test_code_block_keeps_indentation() {
        let lines = render_markup("```rust\nfn main() {\n    run();\n}\n```", 20);
        assert_eq!(lines[0].text(), "```rust");
        assert!(texts(&lines).contains(&"      run();".to_string()));
        assert!(has_style(&lines, Style::CodeBlock));
        assert_eq!(lines.last().unwrap().text(), "```");
    }

    #[test]
    fn test_lone_fence_line() {
        let lines = render_markup("```", 40);
        assert_eq!(texts(&lines), vec!["```", "```"]);
    }

    #[test]
    fn test_html_is_dropped() {
        let lines = render_markup("<script>alert(1)</script>", 80);
        assert!(lines.iter().all(|l| !l.text().contains("script")));
    }

    #[test]
    fn test_rule() {
        let lines = render_markup("above\n\n---", 10);
        assert_eq!(lines.last().unwrap().text(), "─".repeat(10));
        assert!(has_style(&lines, Style::Rule));
    }

    #[test]
    fn test_table() {
        let lines = render_markup("| A | B |\n|---|---|\n| 1 | 2 |", 40);
        assert!(lines.len() >= 3);
        let joined = texts(&lines).join("\n");
        for cell in ["A", "B", "1", "2"] {
            assert!(joined.contains(cell), "missing {cell} in {joined}");
        }
        assert!(has_style(&lines, Style::Table));
    }

    #[test]
    fn test_wraps_to_width() {
        let lines = render_markup("the quick brown fox jumps over the lazy dog", 12);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.text().width() <= 12));
    }
}
