//! Modal overlays.
//!
//! An open overlay takes every key before the screens see it.
//!
//! - `help.rs`: key reference
//! - `render_utils.rs`: popup placement and framing

pub mod help;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use help::HelpState;
use ratatui::Frame;
use ratatui::layout::Rect;

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

#[derive(Debug)]
pub enum Overlay {
    Help(HelpState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Help(help) => help.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match self {
            Overlay::Help(help) => help.handle_key(key),
        }
    }
}
