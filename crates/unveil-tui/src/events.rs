//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: raw terminal
//! input, the render tick, and results of effects the runtime executed.

use crossterm::event::Event;

#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; expires notices and triggers a render.
    Tick,
    /// Raw terminal input (keys, paste, mouse, resize).
    Terminal(Event),
    /// A scheduled scroll-into-view came due.
    ///
    /// Carries the generation it was scheduled with; older generations are
    /// ignored by the reducer.
    ScrollSettled { generation: u64 },
    /// Outcome of a clipboard copy.
    ClipboardResult(Result<usize, String>),
}
