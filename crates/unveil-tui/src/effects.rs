//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer only mutates state and returns effects; timers and clipboard
//! access happen in the runtime.

use std::fmt;

/// Effects returned by the reducer for the runtime to execute.
#[derive(PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Scroll the current line into view once the new frame has been drawn
    /// and the settle delay has passed.
    ///
    /// A newer schedule replaces any pending one.
    ScheduleScroll { generation: u64 },

    /// Copy text to the system clipboard.
    CopyToClipboard { text: String },
}

impl fmt::Debug for UiEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiEffect::Quit => f.write_str("Quit"),
            UiEffect::ScheduleScroll { generation } => f
                .debug_struct("ScheduleScroll")
                .field("generation", generation)
                .finish(),
            // Keep copied text out of logs.
            UiEffect::CopyToClipboard { text } => f
                .debug_struct("CopyToClipboard")
                .field("chars", &text.chars().count())
                .finish(),
        }
    }
}
