//! Status line feature slice.
//!
//! Shows key hints (or a transient notice) on the left and reveal
//! progress on the right.
//!
//! - `state.rs`: `Notice` with its expiry
//! - `render.rs`: status line rendering

mod render;
mod state;

pub use render::render_status_line;
pub(crate) use render::progress_label;
pub use state::{NOTICE_DURATION, Notice, NoticeKind};
