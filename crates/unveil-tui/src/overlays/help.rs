//! Key reference overlay.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayTransition;
use super::render_utils::{centered_area, render_overlay_container};

const BINDINGS: &[(&str, &str)] = &[
    ("Space / Enter", "reveal the next line"),
    ("r", "restart from the first line"),
    ("f", "toggle fullscreen"),
    ("Esc", "leave fullscreen"),
    ("m", "toggle markdown rendering"),
    ("d", "toggle text direction"),
    ("z", "toggle focus dimming"),
    ("y", "copy revealed text"),
    ("e", "edit the source text"),
    ("↑ ↓ PgUp PgDn", "scroll"),
    ("Home / End", "scroll to top / bottom"),
    ("?", "this help"),
    ("q / Ctrl+C", "quit"),
];

const KEY_COLUMN: usize = 16;

#[derive(Debug, Default)]
pub struct HelpState {
    scroll: u16,
}

impl HelpState {
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayTransition {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q') => OverlayTransition::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                OverlayTransition::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = (self.scroll + 1).min(BINDINGS.len() as u16 - 1);
                OverlayTransition::Stay
            }
            _ => OverlayTransition::Stay,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let height = BINDINGS.len() as u16 + 2;
        let popup = centered_area(area, 52, height);
        let inner = render_overlay_container(frame, popup, "Keys", Color::Cyan);

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!(" {keys:<KEY_COLUMN$}"), key_style),
                    Span::raw(*action),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).scroll((self.scroll, 0)), inner);
    }
}
