//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! Structure:
//! - `mod.rs`: Core runtime (TuiRuntime, event loop, effect dispatch)
//! - `scroll.rs`: Deferred scroll-into-view timer
//! - `handlers/`: Effect handler implementations (clipboard)

mod handlers;
mod scroll;

use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use scroll::ScrollTimer;
use tracing::debug;
use unveil_core::interrupt::{self, InterruptedError};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{Session, render, terminal, update};

/// Frame interval while something is changing (~60fps).
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle (no pending scroll, notice or recent input).
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    scroll_timer: ScrollTimer,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
    /// Last time a terminal event was received (for fast tick during interaction).
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(session: Session) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let scroll_timer = ScrollTimer::new(session.settle_delay);
        let state = AppState::new(session);

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            scroll_timer,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        let result = self.event_loop();
        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            if let Err(e) = check_interrupted() {
                self.state.tui.should_quit = true;
                return Err(e);
            }

            let events = self.collect_events()?;

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }

                // Terminal events update state but batch renders to the next Tick.
                if matches!(&event, UiEvent::Tick | UiEvent::ScrollSettled { .. }) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                self.scroll_timer.mark_drawn();
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let needs_fast_poll = recent_terminal_activity
            || self.scroll_timer.is_pending()
            || self.state.tui.notice.is_some();
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Wake for whichever comes first: the next tick or a due scroll.
        let now = Instant::now();
        let mut poll_duration = tick_interval.saturating_sub(self.last_tick.elapsed());
        if let Some(until_scroll) = self.scroll_timer.time_until_due(now) {
            poll_duration = poll_duration.min(until_scroll);
        }

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if let Some(generation) = self.scroll_timer.take_due(Instant::now()) {
            events.push(UiEvent::ScrollSettled { generation });
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        debug!(?effect, "Executing effect");
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::ScheduleScroll { generation } => {
                self.scroll_timer.schedule(generation, Instant::now());
            }
            UiEffect::CopyToClipboard { text } => {
                let event = handlers::copy_to_clipboard(&text);
                self.dispatch_event(event);
            }
        }
    }
}

/// Fails with `InterruptedError` once Ctrl+C or SIGINT arrived, so the
/// process exits with 130.
fn check_interrupted() -> Result<()> {
    if interrupt::is_interrupted() {
        return Err(InterruptedError.into());
    }
    Ok(())
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_surfaces_as_interrupted_error() {
        interrupt::reset();
        assert!(check_interrupted().is_ok());

        interrupt::trigger_ctrl_c();
        let err = check_interrupted().unwrap_err();
        assert!(err.downcast_ref::<InterruptedError>().is_some());

        interrupt::reset();
        assert!(check_interrupted().is_ok());
    }
}
