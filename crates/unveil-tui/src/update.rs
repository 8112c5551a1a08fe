//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use tracing::{debug, warn};

use crate::compose::{self, ComposeRequest};
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{HelpState, Overlay, OverlayTransition};
use crate::reader::{self, WHEEL_STEP};
use crate::state::{AppState, Screen, TuiState};
use crate::statusline::NoticeKind;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.tui.expire_notice(Instant::now());
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ScrollSettled { generation } => {
            handle_scroll_settled(&mut app.tui, generation);
            vec![]
        }
        UiEvent::ClipboardResult(result) => {
            match result {
                Ok(chars) => app
                    .tui
                    .notify(NoticeKind::Info, format!("Copied {chars} characters")),
                Err(error) => {
                    warn!(%error, "Clipboard copy failed");
                    app.tui
                        .notify(NoticeKind::Warning, format!("Copy failed: {error}"));
                }
            }
            vec![]
        }
    }
}

/// Scrolls the active surface to the current line unless a newer request
/// superseded this one.
fn handle_scroll_settled(tui: &mut TuiState, generation: u64) {
    if generation != tui.scroll_generation {
        debug!(
            generation,
            latest = tui.scroll_generation,
            "Dropping stale scroll"
        );
        return;
    }
    if tui.screen == Screen::Reader {
        tui.active_viewport_mut().scroll_into_view();
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            if app.overlay.is_none() && app.tui.screen == Screen::Compose {
                compose::handle_paste(&mut app.tui.compose, &text);
            }
            vec![]
        }
        Event::Mouse(mouse) => {
            if app.overlay.is_some() || app.tui.screen != Screen::Reader {
                return vec![];
            }
            match mouse.kind {
                MouseEventKind::ScrollUp => app.tui.active_viewport_mut().scroll_up(WHEEL_STEP),
                MouseEventKind::ScrollDown => {
                    app.tui.active_viewport_mut().scroll_down(WHEEL_STEP)
                }
                _ => {}
            }
            vec![]
        }
        Event::Resize(..) if app.tui.screen == Screen::Reader => vec![app.tui.schedule_scroll()],
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = &mut app.overlay {
        if overlay.handle_key(key) == OverlayTransition::Close {
            app.overlay = None;
        }
        return vec![];
    }

    match app.tui.screen {
        Screen::Compose => match compose::handle_key(&mut app.tui.compose, key) {
            Some(ComposeRequest::Process) => reader::start_reveal(&mut app.tui),
            Some(ComposeRequest::Resume) if !app.tui.reveal.is_empty() => {
                app.tui.screen = Screen::Reader;
                vec![app.tui.schedule_scroll()]
            }
            // Nothing to go back to.
            Some(ComposeRequest::Resume | ComposeRequest::Quit) => vec![UiEffect::Quit],
            None => vec![],
        },
        Screen::Reader => {
            if key.code == KeyCode::Char('?') {
                app.overlay = Some(Overlay::Help(HelpState::default()));
                return vec![];
            }
            reader::handle_key(&mut app.tui, key)
        }
    }
}
