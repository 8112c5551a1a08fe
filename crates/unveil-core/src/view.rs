//! Presentation flags.
//!
//! None of these touch reveal progress: they only select how the same
//! controller state is drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text direction for the reader surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ltr => "LTR",
            Direction::Rtl => "RTL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The four independent view toggles, passed by value to rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub direction: Direction,
    /// Render lines as markdown instead of plain text.
    pub markup: bool,
    /// Dim everything except the current line.
    pub focus_dim: bool,
    /// Show the fullscreen surface instead of the inline panel.
    pub fullscreen: bool,
}

/// A single view flag, used by toggle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewToggle {
    Direction,
    Markup,
    FocusDim,
    Fullscreen,
}

impl ViewOptions {
    /// Flips one flag and returns a short description of the new state.
    pub fn toggle(&mut self, toggle: ViewToggle) -> String {
        match toggle {
            ViewToggle::Direction => {
                self.direction = self.direction.toggled();
                format!("Direction: {}", self.direction)
            }
            ViewToggle::Markup => {
                self.markup = !self.markup;
                format!("Markup: {}", on_off(self.markup))
            }
            ViewToggle::FocusDim => {
                self.focus_dim = !self.focus_dim;
                format!("Focus: {}", on_off(self.focus_dim))
            }
            ViewToggle::Fullscreen => {
                self.fullscreen = !self.fullscreen;
                format!("Fullscreen: {}", on_off(self.fullscreen))
            }
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggles_are_independent() {
        let mut view = ViewOptions::default();
        view.toggle(ViewToggle::Markup);
        view.toggle(ViewToggle::Direction);
        assert!(view.markup);
        assert_eq!(view.direction, Direction::Rtl);
        assert!(!view.focus_dim);
        assert!(!view.fullscreen);

        assert_eq!(view.toggle(ViewToggle::Direction), "Direction: LTR");
        assert_eq!(view.toggle(ViewToggle::Fullscreen), "Fullscreen: on");
        assert!(view.markup);
    }

    #[test]
    fn test_direction_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            direction: Direction,
        }
        let parsed: Wrapper = toml::from_str("direction = \"rtl\"").unwrap();
        assert_eq!(parsed.direction, Direction::Rtl);
    }
}
