//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame` and never
//! return effects. The only writes are the layouts recorded in each
//! surface's `Viewport` (interior mutability).

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;
use unveil_core::ViewOptions;

use crate::common::truncate_with_ellipsis;
use crate::state::{AppState, Screen, TuiState};
use crate::{compose, reader, statusline};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    if state.screen == Screen::Reader && state.view.fullscreen {
        reader::render_fullscreen(state, frame, area);
    } else {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        render_header(state, frame, header);
        match state.screen {
            Screen::Compose => compose::render_compose(&state.compose, frame, body),
            Screen::Reader => reader::render_inline(state, frame, body),
        }
        statusline::render_status_line(state, frame, status);
    }

    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

/// Badges for the active view flags, e.g. `LTR · markup · focus`.
fn flag_badges(view: ViewOptions) -> String {
    let mut badges = vec![view.direction.label()];
    if view.markup {
        badges.push("markup");
    }
    if view.focus_dim {
        badges.push("focus");
    }
    badges.join(" · ")
}

fn render_header(state: &TuiState, frame: &mut Frame, area: Rect) {
    let badges = flag_badges(state.view);
    let [left, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length((badges.width() as u16 + 1).min(area.width)),
    ])
    .areas(area);

    let title = Span::styled(
        " unveil",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let mut spans = vec![title];
    if let Some(label) = &state.source_label {
        let room = (left.width as usize).saturating_sub(" unveil  ".width());
        spans.push(Span::styled(
            format!("  {}", truncate_with_ellipsis(label, room)),
            Style::default().fg(Color::Gray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), left);
    frame.render_widget(
        Paragraph::new(
            Line::from(Span::styled(badges, Style::default().fg(Color::DarkGray))).right_aligned(),
        ),
        right,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use unveil_core::Direction;

    use super::*;
    use crate::Session;
    use crate::overlays::{HelpState, Overlay};

    fn draw(app: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with(text: &str) -> AppState {
        AppState::new(Session {
            text: Some(text.to_string()),
            source_label: Some("poem.txt".to_string()),
            ..Session::default()
        })
    }

    #[test]
    fn test_compose_screen_shows_placeholder() {
        let app = AppState::new(Session::default());
        let screen = draw(&app, 60, 10);
        assert!(screen.contains("Compose"));
        assert!(screen.contains("Paste or type the text to reveal"));
        assert!(screen.contains("Ctrl+S reveal"));
    }

    #[test]
    fn test_inline_reader_hides_unrevealed_lines() {
        let mut app = app_with("first line\nsecond line\nthird line");
        app.tui.reveal.advance();
        let screen = draw(&app, 60, 10);

        assert!(screen.contains("poem.txt"));
        assert!(screen.contains("first line"));
        assert!(screen.contains("▌ second line"));
        assert!(!screen.contains("third line"));
        assert!(screen.contains("1/3 · 33%"));
    }

    #[test]
    fn test_render_records_layout() {
        let app = app_with("a\nb");
        draw(&app, 40, 10);
        let layout = app.tui.inline_viewport.layout();
        assert_eq!(layout.total_rows, 1);
        assert_eq!(layout.height, 6);
        assert!(layout.anchor.is_some());
    }

    #[test]
    fn test_fullscreen_replaces_layout() {
        let mut app = app_with("a\nb");
        app.tui.view.fullscreen = true;
        let screen = draw(&app, 60, 10);

        assert!(!screen.contains("Reader"));
        assert!(screen.contains("Esc exit fullscreen"));
        assert_eq!(app.tui.fullscreen_viewport.layout().total_rows, 1);
    }

    #[test]
    fn test_finished_state_is_visible() {
        let mut app = app_with("a");
        app.tui.reveal.advance();
        let screen = draw(&app, 40, 10);
        assert!(screen.contains("· end ·"));
        assert!(screen.contains("finished · 1/1"));
    }

    #[test]
    fn test_header_badges() {
        let mut app = app_with("a");
        app.tui.view.direction = Direction::Rtl;
        app.tui.view.markup = true;
        let screen = draw(&app, 60, 8);
        assert!(screen.lines().next().unwrap().contains("RTL · markup"));
    }

    #[test]
    fn test_help_overlay_renders_on_top() {
        let mut app = app_with("a");
        app.overlay = Some(Overlay::Help(HelpState::default()));
        let screen = draw(&app, 70, 20);
        assert!(screen.contains("Keys"));
        assert!(screen.contains("reveal the next line"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app_with("some text\nmore text");
        draw(&app, 3, 2);
        let mut app = app_with("x");
        app.tui.view.fullscreen = true;
        draw(&app, 1, 1);
    }
}
