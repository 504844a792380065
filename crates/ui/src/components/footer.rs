use super::wrap::truncate_to_width;
use crate::{
    state::{StatusKind, ViewState},
    theme::Theme,
};

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};
use turnplay_core::Playback;
use unicode_width::UnicodeWidthStr;

const HINTS: &[(&str, &str)] =
    &[("[→]", "next"), ("[←]", "back"), ("[⏎]", "steps"), ("[c]", "collapse"), ("[q]", "quit")];

/// Footer component displaying status and key hints
///
/// - Row 1: separator
/// - Row 2: status or progress summary (left), key hints (right)
pub struct Footer<'a> {
    playback: &'a Playback,
    view: &'a ViewState,
}

impl<'a> Footer<'a> {
    pub fn new(playback: &'a Playback, view: &'a ViewState) -> Self {
        Self { playback, view }
    }

    pub const HEIGHT: u16 = 2;

    /// Render footer to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("─".repeat(area.width as usize), Theme::border()))),
            Rect { height: 1, ..area },
        );

        if area.height < 2 {
            return;
        }
        let row = Rect { y: area.y + 1, height: 1, ..area };

        let hints = hint_spans();
        let hints_width: usize = hints.iter().map(|s| s.content.width()).sum();
        let status_width = (area.width as usize).saturating_sub(hints_width + 2);

        if status_width == 0 {
            frame.render_widget(Paragraph::new(self.status_line(area.width as usize)), row);
            return;
        }

        let status_area = Rect { width: status_width as u16, ..row };
        let hints_area = Rect { x: row.x + status_width as u16, width: row.width - status_width as u16, ..row };
        frame.render_widget(Paragraph::new(self.status_line(status_width)), status_area);
        frame.render_widget(Paragraph::new(Line::from(hints)).alignment(Alignment::Right), hints_area);
    }

    fn status_line(&self, width: usize) -> Line<'static> {
        if let Some(message) = self.view.status() {
            let style = match self.view.status_kind() {
                Some(StatusKind::Error) => Theme::error(),
                _ => Theme::notice(),
            };
            return Line::from(Span::styled(truncate_to_width(message, width), style));
        }

        let (shown, total) = self.playback.progress();
        let mut summary = format!("{} of {} revealed", shown, total);
        let expanded = self.playback.expanded_count();
        if expanded > 0 {
            summary.push_str(&format!(" · {} expanded", expanded));
        }
        if total > 0 && self.playback.is_at_end() {
            summary.push_str(" · end");
        }

        Line::from(Span::styled(truncate_to_width(&summary, width), Theme::muted()))
    }
}

fn hint_spans() -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(HINTS.len() * 2);
    for (i, (key, label)) in HINTS.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Theme::BLUE)));
        let sep = if i + 1 == HINTS.len() { "" } else { "  " };
        spans.push(Span::styled(format!(" {}{}", label, sep), Style::default().fg(Theme::MUTED)));
    }
    spans
}
