//! Feature slices for the TUI (state/update/render per slice).

pub mod compose;
pub mod reader;
pub mod statusline;
