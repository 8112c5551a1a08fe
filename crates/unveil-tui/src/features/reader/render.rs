//! Reader surfaces.
//!
//! Inline and fullscreen surfaces share `surface_lines()`; they differ only
//! in framing. Each render records its layout in the surface's `Viewport`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unveil_core::{Direction, RevealController, ViewOptions};

use super::viewport::{RowSpan, SurfaceLayout, Viewport};
use crate::common::Scrollbar;
use crate::markup::{self, Style as MarkupStyle, StyledLine};
use crate::state::TuiState;
use crate::statusline::progress_label;

/// Columns reserved for the current-line marker.
pub const GUTTER_WIDTH: usize = 2;

/// Widest text column in the fullscreen surface.
const FULLSCREEN_MAX_WIDTH: u16 = 100;

const END_MARKER: &str = "· end ·";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Revealed,
    Current,
    Dimmed,
}

/// Rendered rows of a surface plus the rows to keep in view.
pub struct SurfaceLines {
    pub lines: Vec<Line<'static>>,
    pub anchor: Option<RowSpan>,
}

fn base_style(style: MarkupStyle) -> Style {
    let plain = Style::default();
    match style {
        MarkupStyle::Plain | MarkupStyle::Body | MarkupStyle::Table => plain,
        MarkupStyle::CodeInline | MarkupStyle::CodeBlock => plain.fg(Color::Cyan),
        MarkupStyle::CodeFence | MarkupStyle::Rule => plain.fg(Color::DarkGray),
        MarkupStyle::Emphasis => plain.add_modifier(Modifier::ITALIC),
        MarkupStyle::Strong => plain.add_modifier(Modifier::BOLD),
        MarkupStyle::Strikethrough => plain.add_modifier(Modifier::CROSSED_OUT),
        MarkupStyle::H1 => plain
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        MarkupStyle::H2 => plain.fg(Color::Magenta).add_modifier(Modifier::BOLD),
        MarkupStyle::H3 => plain.fg(Color::Magenta),
        MarkupStyle::Link => plain.fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        MarkupStyle::BlockQuote => plain.fg(Color::Gray).add_modifier(Modifier::ITALIC),
        MarkupStyle::ListMarker => plain.fg(Color::Yellow),
    }
}

fn toned(style: MarkupStyle, tone: Tone) -> Style {
    let base = base_style(style);
    match tone {
        Tone::Revealed => base,
        Tone::Current => {
            let base = base.add_modifier(Modifier::BOLD);
            if matches!(style, MarkupStyle::Plain | MarkupStyle::Body) {
                base.fg(Color::LightYellow)
            } else {
                base
            }
        }
        Tone::Dimmed => base.fg(Color::DarkGray).add_modifier(Modifier::DIM),
    }
}

fn render_text(text: &str, markup: bool, width: usize) -> Vec<StyledLine> {
    let text = markup::expand_tabs(text);
    if markup {
        markup::render_markup(&text, width)
    } else {
        markup::render_plain(&text, width)
    }
}

fn surface_row(row: StyledLine, tone: Tone, direction: Direction) -> Line<'static> {
    let marker_style = Style::default().fg(Color::Yellow);
    let content = row
        .spans
        .into_iter()
        .map(|span| Span::styled(span.text, toned(span.style, tone)));
    let is_current = tone == Tone::Current;

    match direction {
        Direction::Ltr => {
            let gutter = if is_current {
                Span::styled("▌ ", marker_style)
            } else {
                Span::raw("  ")
            };
            Line::from(std::iter::once(gutter).chain(content).collect::<Vec<_>>())
        }
        Direction::Rtl => {
            let gutter = if is_current {
                Span::styled(" ▐", marker_style)
            } else {
                Span::raw("  ")
            };
            Line::from(content.chain(std::iter::once(gutter)).collect::<Vec<_>>()).right_aligned()
        }
    }
}

/// Builds every row of a surface `width` columns wide: revealed text,
/// then the highlighted current line, then an end marker once finished.
pub fn surface_lines(reveal: &RevealController, view: ViewOptions, width: usize) -> SurfaceLines {
    let content_width = width.saturating_sub(GUTTER_WIDTH).max(1);
    let revealed_tone = if view.focus_dim {
        Tone::Dimmed
    } else {
        Tone::Revealed
    };

    let mut lines: Vec<Line<'static>> =
        render_text(reveal.revealed_text(), view.markup, content_width)
            .into_iter()
            .map(|row| surface_row(row, revealed_tone, view.direction))
            .collect();

    let anchor = if let Some(current) = reveal.current_line() {
        let mut rows = render_text(current, view.markup, content_width);
        // Markup such as a lone HTML tag renders to nothing; the current
        // line must still be visible.
        if rows.is_empty() {
            rows = markup::render_plain(&markup::expand_tabs(current), content_width);
        }
        let start = lines.len();
        lines.extend(
            rows.into_iter()
                .map(|row| surface_row(row, Tone::Current, view.direction)),
        );
        Some(RowSpan {
            start,
            end: lines.len(),
        })
    } else if reveal.is_finished() {
        if !lines.is_empty() {
            lines.push(Line::default());
        }
        let start = lines.len();
        lines.push(
            Line::from(Span::styled(
                END_MARKER,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
        Some(RowSpan {
            start,
            end: start + 1,
        })
    } else {
        None
    };

    SurfaceLines { lines, anchor }
}

fn render_surface(
    reveal: &RevealController,
    view: ViewOptions,
    viewport: &Viewport,
    frame: &mut Frame,
    area: Rect,
) {
    if area.width < 2 || area.height == 0 {
        viewport.record_layout(SurfaceLayout::default());
        return;
    }

    // Last column belongs to the scrollbar.
    let text_area = Rect {
        width: area.width - 1,
        ..area
    };
    let surface = surface_lines(reveal, view, text_area.width as usize);
    let height = area.height as usize;
    let layout = SurfaceLayout {
        total_rows: surface.lines.len(),
        height,
        anchor: surface.anchor,
    };
    viewport.record_layout(layout);

    let offset = viewport.clamped_offset(&layout);
    let visible: Vec<Line<'static>> = surface
        .lines
        .into_iter()
        .skip(offset)
        .take(height)
        .collect();

    frame.render_widget(Paragraph::new(visible), text_area);
    frame.render_widget(Scrollbar::new(layout.total_rows, height, offset), area);
}

/// Bordered reader panel inside the main layout.
pub fn render_inline(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(" Reader ", title_style))
        .title(Line::from(format!(" {} ", tui.reveal.progress())).right_aligned());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    render_surface(&tui.reveal, tui.view, &tui.inline_viewport, frame, inner);
}

/// Distraction-free surface covering `area`: a centered text column and
/// a one-line footer.
pub fn render_fullscreen(tui: &TuiState, frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);

    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

    let width = body.width.min(FULLSCREEN_MAX_WIDTH);
    let top_pad = u16::from(body.height > 2);
    let column = Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y + top_pad,
        width,
        height: body.height - top_pad,
    };
    render_surface(&tui.reveal, tui.view, &tui.fullscreen_viewport, frame, column);

    let footer_text = match &tui.notice {
        Some(notice) => notice.text.clone(),
        None => format!(
            "{}  ·  Esc exit fullscreen",
            progress_label(tui.reveal.progress())
        ),
    };
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(
                footer_text,
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        ),
        footer,
    );
}

#[cfg(test)]
mod tests {
    use unveil_core::tokenize;

    use super::*;

    fn texts(surface: &SurfaceLines) -> Vec<String> {
        surface.lines.iter().map(|line| line.to_string()).collect()
    }

    fn controller(text: &str) -> RevealController {
        RevealController::new(tokenize(text))
    }

    #[test]
    fn test_initial_surface_shows_only_current_line() {
        let reveal = controller("first\nsecond");
        let surface = surface_lines(&reveal, ViewOptions::default(), 40);
        assert_eq!(texts(&surface), vec!["▌ first"]);
        assert_eq!(surface.anchor, Some(RowSpan { start: 0, end: 1 }));
    }

    #[test]
    fn test_revealed_then_current() {
        let mut reveal = controller("first\nsecond\nthird");
        reveal.advance();
        let surface = surface_lines(&reveal, ViewOptions::default(), 40);
        assert_eq!(texts(&surface), vec!["  first", "▌ second"]);
        assert_eq!(surface.anchor, Some(RowSpan { start: 1, end: 2 }));
    }

    #[test]
    fn test_tabs_are_drawn_as_spaces() {
        let reveal = controller("a\tb");
        assert_eq!(reveal.current_line().unwrap(), "a\tb");
        let surface = surface_lines(&reveal, ViewOptions::default(), 40);
        let rows = texts(&surface);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("▌ a"));
        assert!(rows[0].ends_with('b'));
        assert!(!rows[0].contains('\t'));
    }

    #[test]
    fn test_finished_shows_end_marker() {
        let mut reveal = controller("only");
        reveal.advance();
        let surface = surface_lines(&reveal, ViewOptions::default(), 20);
        let rows = texts(&surface);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], "  only");
        assert_eq!(rows[2], END_MARKER);
        assert_eq!(surface.anchor, Some(RowSpan { start: 2, end: 3 }));
    }

    #[test]
    fn test_wrapped_current_line_spans_rows() {
        let reveal = controller("one two three four");
        let surface = surface_lines(&reveal, ViewOptions::default(), 10);
        assert_eq!(surface.anchor, Some(RowSpan { start: 0, end: 3 }));
        assert!(texts(&surface).iter().all(|row| row.starts_with("▌ ")));
    }

    #[test]
    fn test_markup_only_affects_styling() {
        let reveal = controller("**bold** text");
        let plain = surface_lines(&reveal, ViewOptions::default(), 40);
        assert_eq!(texts(&plain), vec!["▌ **bold** text"]);

        let view = ViewOptions {
            markup: true,
            ..ViewOptions::default()
        };
        let styled = surface_lines(&reveal, view, 40);
        assert_eq!(texts(&styled), vec!["▌ bold text"]);
    }

    #[test]
    fn test_markup_that_renders_empty_falls_back_to_plain() {
        let reveal = controller("<br>");
        let view = ViewOptions {
            markup: true,
            ..ViewOptions::default()
        };
        let surface = surface_lines(&reveal, view, 40);
        assert_eq!(texts(&surface), vec!["▌ <br>"]);
    }

    #[test]
    fn test_rtl_rows_are_right_aligned() {
        let mut reveal = controller("שלום\nעולם");
        reveal.advance();
        let view = ViewOptions {
            direction: Direction::Rtl,
            ..ViewOptions::default()
        };
        let surface = surface_lines(&reveal, view, 40);
        assert!(
            surface
                .lines
                .iter()
                .all(|line| line.alignment == Some(ratatui::layout::Alignment::Right))
        );
        assert_eq!(texts(&surface)[1], "עולם ▐");
    }

    #[test]
    fn test_focus_dim_dims_revealed_rows_only() {
        let mut reveal = controller("a\nb");
        reveal.advance();
        let view = ViewOptions {
            focus_dim: true,
            ..ViewOptions::default()
        };
        let surface = surface_lines(&reveal, view, 20);
        let revealed = &surface.lines[0].spans[1];
        let current = &surface.lines[1].spans[1];
        assert!(revealed.style.add_modifier.contains(Modifier::DIM));
        assert!(!current.style.add_modifier.contains(Modifier::DIM));
        assert!(current.style.add_modifier.contains(Modifier::BOLD));
    }
}
