/// A styled span of text (terminal-agnostic).
///
/// Converted to ratatui `Span`s at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: Style,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// A line of styled spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyledLine {
    pub spans: Vec<StyledSpan>,
}

impl StyledLine {
    /// Concatenated text of every span.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Semantic style identifiers.
///
/// The reader decides the final colors, so the same markup can be drawn
/// revealed, highlighted or dimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Decoration without emphasis (indents, padding).
    Plain,
    /// Ordinary line text.
    Body,
    /// Inline code (`code`).
    CodeInline,
    /// Fenced code block content.
    CodeBlock,
    /// Code fence markers.
    CodeFence,
    /// *italic*
    Emphasis,
    /// **bold**
    Strong,
    /// ~~struck~~
    Strikethrough,
    /// `# Heading`
    H1,
    /// `## Heading`
    H2,
    /// `### Heading` and deeper.
    H3,
    /// Link or image text.
    Link,
    /// Blockquote bar and content.
    BlockQuote,
    /// List bullet, number or task marker.
    ListMarker,
    /// Horizontal rule.
    Rule,
    /// Table borders and cells.
    Table,
}

impl Style {
    /// Code keeps its whitespace when wrapped.
    pub fn preserves_whitespace(self) -> bool {
        matches!(self, Style::CodeInline | Style::CodeBlock)
    }
}
