//! Core of the unveil line-reveal reader.
//!
//! Everything here is terminal-agnostic:
//! - `reveal`: tokenizer and reveal controller
//! - `view`: presentation flags passed to renderers
//! - `config`: `config.toml` loading and paths
//! - `source`: reading raw text from files or stdin
//! - `logging`: file-backed tracing setup
//! - `interrupt`: Ctrl+C flag shared with the runtime

pub mod config;
pub mod interrupt;
pub mod logging;
pub mod reveal;
pub mod source;
pub mod view;

pub use reveal::{Line, LineSequence, Progress, RevealController, tokenize};
pub use view::{Direction, ViewOptions};
