//! Status line view.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;
use unveil_core::Progress;

use super::NoticeKind;
use crate::common::truncate_with_ellipsis;
use crate::state::{Screen, TuiState};

const COMPOSE_HINTS: &str = "Ctrl+S reveal · Ctrl+L clear · Esc back/quit · Ctrl+Q quit";
const READER_HINTS: &str = "Space next · r restart · f fullscreen · ? help · q quit";

/// Progress label, e.g. `3/10 · 30%` or `finished · 10/10`.
pub(crate) fn progress_label(progress: Progress) -> String {
    if progress.is_finished() {
        format!("finished · {progress}")
    } else {
        format!("{progress} · {}%", progress.percent())
    }
}

pub fn render_status_line(tui: &TuiState, frame: &mut Frame, area: Rect) {
    let right = match tui.screen {
        Screen::Reader => progress_label(tui.reveal.progress()),
        Screen::Compose => String::new(),
    };
    let right_width = (right.width() as u16 + 1).min(area.width);
    let [left_area, right_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).areas(area);

    let left_width = left_area.width.saturating_sub(1) as usize;
    let left = match &tui.notice {
        Some(notice) => {
            let color = match notice.kind {
                NoticeKind::Info => Color::Green,
                NoticeKind::Warning => Color::Yellow,
            };
            Span::styled(
                truncate_with_ellipsis(&notice.text, left_width),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => {
            let hints = match tui.screen {
                Screen::Compose => COMPOSE_HINTS,
                Screen::Reader => READER_HINTS,
            };
            Span::styled(
                truncate_with_ellipsis(hints, left_width),
                Style::default().fg(Color::DarkGray),
            )
        }
    };

    frame.render_widget(Paragraph::new(Line::from(vec![Span::raw(" "), left])), left_area);

    if !right.is_empty() {
        let style = if tui.reveal.is_finished() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(right, style)).right_aligned()),
            right_area,
        );
    }
}
