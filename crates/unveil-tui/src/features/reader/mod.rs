//! Reader feature slice: reveal keys, surfaces and scroll state.

mod render;
mod update;
mod viewport;

pub use render::{GUTTER_WIDTH, SurfaceLines, render_fullscreen, render_inline, surface_lines};
pub use update::{SCROLL_STEP, WHEEL_STEP, advance, handle_key, reset, start_reveal, toggle_view};
pub use viewport::{RowSpan, SurfaceLayout, Viewport};
