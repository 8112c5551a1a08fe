//! Scrollbar with a fixed thumb length.
//!
//! The thumb size is computed once from the content/viewport ratio and
//! only its position moves, so it does not flicker while scrolling.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Drawn in the rightmost column of the area it is rendered into.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_rows: usize,
    viewport_height: usize,
    offset: usize,
}

impl Scrollbar {
    pub fn new(total_rows: usize, viewport_height: usize, offset: usize) -> Self {
        Self {
            total_rows,
            viewport_height,
            offset,
        }
    }

    fn should_display(&self) -> bool {
        self.total_rows > self.viewport_height
    }

    /// Returns `(thumb_start, thumb_len)` for a track of `track_len` cells.
    fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_offset = self.total_rows.saturating_sub(self.viewport_height);
        if track_len == 0 || max_offset == 0 {
            return None;
        }
        let visible = self.viewport_height.min(track_len);
        let thumb_len = (track_len * visible)
            .div_ceil(self.total_rows.max(1))
            .clamp(1, track_len);
        let free = track_len - thumb_len;
        let start = self.offset.min(max_offset) * free / max_offset;
        Some((start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() || area.width == 0 {
            return;
        }
        let Some((start, len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width - 1;
        let style = Style::default().fg(Color::DarkGray);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let symbol = if (start..start + len).contains(&idx) {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_content_fits() {
        assert!(!Scrollbar::new(10, 20, 0).should_display());
        assert!(!Scrollbar::new(20, 20, 0).should_display());
        assert!(Scrollbar::new(21, 20, 0).should_display());
    }

    #[test]
    fn test_thumb_reaches_both_ends() {
        let bar = Scrollbar::new(100, 10, 0);
        let (start, len) = bar.thumb(10).unwrap();
        assert_eq!(start, 0);
        assert_eq!(len, 1);

        let bar = Scrollbar::new(100, 10, 90);
        let (start, len) = bar.thumb(10).unwrap();
        assert_eq!(start + len, 10);
    }

    #[test]
    fn test_thumb_size_is_stable() {
        let lens: Vec<usize> = (0..=30)
            .map(|offset| Scrollbar::new(40, 10, offset).thumb(10).unwrap().1)
            .collect();
        assert!(lens.windows(2).all(|w| w[0] == w[1]));
    }
}
