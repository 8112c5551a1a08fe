//! Effect handlers for the TUI runtime.
//!
//! Handlers perform I/O and report back as a `UiEvent`. They never touch
//! state directly.

pub mod clipboard;

pub use clipboard::copy_to_clipboard;
