//! Compose screen: paste or type the text to reveal.

mod render;
mod text_buffer;
mod update;

pub use render::render_compose;
pub use text_buffer::{CursorMove, TextBuffer};
use unveil_core::tokenize;
pub use update::{ComposeRequest, handle_key, handle_paste};

#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    pub buffer: TextBuffer,
}

impl ComposeState {
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    /// Number of lines the buffer would tokenize into.
    pub fn line_count(&self) -> usize {
        tokenize(&self.text()).len()
    }
}
