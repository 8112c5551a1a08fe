//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── screen: Screen             (compose or reader)
//! │   ├── compose: ComposeState      (source text buffer)
//! │   ├── reveal: RevealController   (lines and reveal position)
//! │   ├── view: ViewOptions          (direction, markup, focus, fullscreen)
//! │   ├── inline_viewport / fullscreen_viewport
//! │   └── notice: Option<Notice>
//! └── overlay: Option<Overlay>       (help)
//! ```
//!
//! Both surfaces render from the same `RevealController`, so toggling
//! fullscreen never changes reveal progress.

use std::time::Instant;

use unveil_core::{RevealController, ViewOptions};

use crate::Session;
use crate::compose::ComposeState;
use crate::effects::UiEffect;
use crate::overlays::Overlay;
use crate::reader::{self, Viewport};
use crate::statusline::{Notice, NoticeKind};

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Builds the initial state. Text supplied up front is processed
    /// immediately; otherwise the compose screen opens.
    pub fn new(session: Session) -> Self {
        let mut tui = TuiState::new(session.view);
        tui.source_label = session.source_label;
        if let Some(text) = session.text {
            tui.compose = ComposeState::with_text(&text);
            // The first line starts at the top, nothing to scroll yet.
            let _ = reader::start_reveal(&mut tui);
        }
        Self { tui, overlay: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Compose,
    Reader,
}

/// TUI state (non-overlay).
pub struct TuiState {
    pub should_quit: bool,
    pub screen: Screen,
    pub compose: ComposeState,
    /// Single owner of reveal progress for both surfaces.
    pub reveal: RevealController,
    pub view: ViewOptions,
    pub inline_viewport: Viewport,
    pub fullscreen_viewport: Viewport,
    /// Bumped on every scroll request; stale settle events are dropped.
    pub scroll_generation: u64,
    pub notice: Option<Notice>,
    /// File name or `<stdin>` when text came from the command line.
    pub source_label: Option<String>,
}

impl TuiState {
    pub fn new(view: ViewOptions) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Compose,
            compose: ComposeState::default(),
            reveal: RevealController::default(),
            view,
            inline_viewport: Viewport::default(),
            fullscreen_viewport: Viewport::default(),
            scroll_generation: 0,
            notice: None,
            source_label: None,
        }
    }

    /// Viewport of the surface currently on screen.
    pub fn active_viewport(&self) -> &Viewport {
        if self.view.fullscreen {
            &self.fullscreen_viewport
        } else {
            &self.inline_viewport
        }
    }

    pub fn active_viewport_mut(&mut self) -> &mut Viewport {
        if self.view.fullscreen {
            &mut self.fullscreen_viewport
        } else {
            &mut self.inline_viewport
        }
    }

    /// Requests a scroll-into-view, superseding any pending request.
    pub fn schedule_scroll(&mut self) -> UiEffect {
        self.scroll_generation += 1;
        UiEffect::ScheduleScroll {
            generation: self.scroll_generation,
        }
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice::new(kind, text, Instant::now()));
    }

    pub fn expire_notice(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
        }
    }
}
