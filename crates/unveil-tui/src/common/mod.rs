//! Shared widgets and text helpers.

mod scrollbar;
mod text;

pub use scrollbar::Scrollbar;
pub use text::truncate_with_ellipsis;
