//! Per-surface scroll state.
//!
//! The renderer records the layout it produced (row count, height, rows
//! of the highlighted line) so the reducer can scroll without re-rendering.

use std::cell::Cell;

/// Half-open row range `[start, end)` within a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowSpan {
    pub start: usize,
    pub end: usize,
}

/// Geometry of the last rendered frame of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceLayout {
    pub total_rows: usize,
    pub height: usize,
    /// Rows of the current line (or the end marker once finished).
    pub anchor: Option<RowSpan>,
}

impl SurfaceLayout {
    pub fn max_offset(&self) -> usize {
        self.total_rows.saturating_sub(self.height)
    }
}

#[derive(Debug, Default)]
pub struct Viewport {
    offset: usize,
    layout: Cell<SurfaceLayout>,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn layout(&self) -> SurfaceLayout {
        self.layout.get()
    }

    /// Called from render with the layout just drawn.
    pub fn record_layout(&self, layout: SurfaceLayout) {
        self.layout.set(layout);
    }

    /// Offset clamped to what `layout` can show.
    pub fn clamped_offset(&self, layout: &SurfaceLayout) -> usize {
        self.offset.min(layout.max_offset())
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_up(&mut self, rows: usize) {
        let layout = self.layout();
        self.offset = self.clamped_offset(&layout).saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        let layout = self.layout();
        self.offset = (self.clamped_offset(&layout) + rows).min(layout.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.layout().height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.layout().height.saturating_sub(1).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.layout().max_offset();
    }

    /// Moves the smallest distance that makes the anchor rows visible.
    ///
    /// An anchor taller than the viewport is aligned to its first row.
    /// Returns true if the offset changed.
    pub fn scroll_into_view(&mut self) -> bool {
        let layout = self.layout();
        let Some(anchor) = layout.anchor else {
            return false;
        };
        let before = self.offset;
        let mut offset = self.clamped_offset(&layout);
        let height = layout.height.max(1);

        if anchor.end > offset + height {
            offset = anchor.end - height;
        }
        if anchor.start < offset || anchor.end - anchor.start > height {
            offset = anchor.start;
        }

        self.offset = offset.min(layout.max_offset());
        self.offset != before
    }
}
