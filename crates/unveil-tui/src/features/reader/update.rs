//! Reader reducer.
//!
//! Space and Enter advance on both surfaces; the fullscreen surface only
//! adds Esc to leave it. Every change that can move the current line
//! schedules a scroll-into-view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};
use unveil_core::tokenize;
use unveil_core::view::ViewToggle;

use crate::effects::UiEffect;
use crate::state::{Screen, TuiState};
use crate::statusline::NoticeKind;

/// Rows moved per arrow key or wheel notch.
pub const SCROLL_STEP: usize = 1;
pub const WHEEL_STEP: usize = 3;

/// Tokenizes the compose buffer and opens the reader on the first line.
///
/// Text without any non-blank line keeps the compose screen open with a
/// notice.
pub fn start_reveal(tui: &mut TuiState) -> Vec<UiEffect> {
    let lines = tokenize(&tui.compose.text());
    if lines.is_empty() {
        tui.screen = Screen::Compose;
        tui.notify(
            NoticeKind::Warning,
            "Nothing to reveal: paste or type some text first",
        );
        return Vec::new();
    }

    info!(lines = lines.len(), "Starting reveal");
    tui.reveal.initialize(lines);
    tui.screen = Screen::Reader;
    tui.inline_viewport.reset();
    tui.fullscreen_viewport.reset();
    vec![tui.schedule_scroll()]
}

/// Commits the current line. A no-op once everything is revealed.
pub fn advance(tui: &mut TuiState) -> Vec<UiEffect> {
    if !tui.reveal.advance() {
        return Vec::new();
    }
    let progress = tui.reveal.progress();
    debug!(position = progress.position, total = progress.total, "Advanced");
    if progress.is_finished() {
        info!(total = progress.total, "Reveal finished");
    }
    vec![tui.schedule_scroll()]
}

pub fn reset(tui: &mut TuiState) -> Vec<UiEffect> {
    tui.reveal.reset();
    tui.inline_viewport.reset();
    tui.fullscreen_viewport.reset();
    tui.notify(NoticeKind::Info, "Restarted from the first line");
    vec![tui.schedule_scroll()]
}

pub fn toggle_view(tui: &mut TuiState, toggle: ViewToggle) -> Vec<UiEffect> {
    let message = tui.view.toggle(toggle);
    debug!(?toggle, view = ?tui.view, "View toggled");
    tui.notify(NoticeKind::Info, message);
    match toggle {
        // Row layout or the visible surface changed.
        ViewToggle::Fullscreen | ViewToggle::Markup => vec![tui.schedule_scroll()],
        ViewToggle::Direction | ViewToggle::FocusDim => Vec::new(),
    }
}

fn copy_revealed(tui: &mut TuiState) -> Vec<UiEffect> {
    let text = tui.reveal.revealed_text();
    if text.is_empty() {
        tui.notify(NoticeKind::Warning, "Nothing revealed yet");
        return Vec::new();
    }
    vec![UiEffect::CopyToClipboard {
        text: text.to_string(),
    }]
}

pub fn handle_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return Vec::new();
    }

    match key.code {
        KeyCode::Char(' ') | KeyCode::Enter => advance(tui),
        KeyCode::Esc if tui.view.fullscreen => toggle_view(tui, ViewToggle::Fullscreen),
        KeyCode::Char('f') => toggle_view(tui, ViewToggle::Fullscreen),
        KeyCode::Char('m') => toggle_view(tui, ViewToggle::Markup),
        KeyCode::Char('d') => toggle_view(tui, ViewToggle::Direction),
        KeyCode::Char('z') => toggle_view(tui, ViewToggle::FocusDim),
        KeyCode::Char('r') => reset(tui),
        KeyCode::Char('y') => copy_revealed(tui),
        KeyCode::Char('e') => {
            tui.screen = Screen::Compose;
            Vec::new()
        }
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            tui.active_viewport_mut().scroll_up(SCROLL_STEP);
            Vec::new()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.active_viewport_mut().scroll_down(SCROLL_STEP);
            Vec::new()
        }
        KeyCode::PageUp => {
            tui.active_viewport_mut().page_up();
            Vec::new()
        }
        KeyCode::PageDown => {
            tui.active_viewport_mut().page_down();
            Vec::new()
        }
        KeyCode::Home | KeyCode::Char('g') => {
            tui.active_viewport_mut().scroll_to_top();
            Vec::new()
        }
        KeyCode::End | KeyCode::Char('G') => {
            tui.active_viewport_mut().scroll_to_bottom();
            Vec::new()
        }
        _ => Vec::new(),
    }
}
