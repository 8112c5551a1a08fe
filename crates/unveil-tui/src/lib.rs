//! Full-screen TUI for unveil.
//!
//! Elm-style split: `update` mutates `AppState` and returns `UiEffect`s,
//! `render` draws it, and `TuiRuntime` owns the terminal, collects events
//! and executes effects.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod markup;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::time::Duration;

use anyhow::Result;
pub use features::{compose, reader, statusline};
pub use runtime::TuiRuntime;
use tracing::info;
use unveil_core::ViewOptions;

/// Everything the reader needs to start.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Text to reveal immediately; `None` opens the compose screen.
    pub text: Option<String>,
    /// Shown in the header (file name or `<stdin>`).
    pub source_label: Option<String>,
    pub view: ViewOptions,
    /// Delay between drawing a change and scrolling the current line into view.
    pub settle_delay: Duration,
}

/// Runs the interactive reader until the user quits.
///
/// # Errors
/// Returns an error if stdout is not a terminal or the terminal cannot be
/// set up.
pub fn run_reader(session: Session) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The reader requires a terminal.\n\
             Use `unveil print <FILE>` or `unveil lines <FILE>` for non-interactive output."
        );
    }

    info!(
        source = session.source_label.as_deref().unwrap_or("compose"),
        view = ?session.view,
        "Starting reader"
    );
    let mut runtime = TuiRuntime::new(session)?;
    runtime.run()?;

    let progress = runtime.state.tui.reveal.progress();
    info!(position = progress.position, total = progress.total, "Reader closed");
    Ok(())
}
