use super::wrap::truncate_to_width;
use crate::theme::Theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};
use turnplay_core::Playback;
use unicode_width::UnicodeWidthStr;

/// Header component displaying session information
///
/// - Row 1: session name and `turn i/N`
/// - Row 2: agent roster (when enabled)
pub struct Header<'a> {
    playback: &'a Playback,
    show_agents: bool,
}

impl<'a> Header<'a> {
    pub fn new(playback: &'a Playback, show_agents: bool) -> Self {
        Self { playback, show_agents }
    }

    /// Rows this header needs
    pub fn height(&self) -> u16 {
        if self.show_agents { 2 } else { 1 }
    }

    /// Render the header to the given frame
    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let width = area.width as usize;
        let progress = self.progress_text();
        let name_width = width.saturating_sub(progress.width() + 3);

        let session = match self.playback.session_name().trim() {
            "" => "untitled session",
            name => name,
        };

        let mut title = vec![
            Span::styled("▶ ", Style::default().fg(Theme::PURPLE)),
            Span::styled(truncate_to_width(session, name_width), Style::default().fg(Theme::FG).bold()),
        ];
        let used: usize = title.iter().map(|s| s.content.width()).sum();
        let gap = width.saturating_sub(used + progress.width());
        title.push(Span::raw(" ".repeat(gap)));
        title.push(Span::styled(progress, Style::default().fg(Theme::CYAN)));

        frame.render_widget(
            Paragraph::new(Line::from(title)).style(Theme::base()),
            Rect { height: 1, ..area },
        );

        if self.show_agents && area.height > 1 {
            let roster = Rect { y: area.y + 1, height: 1, ..area };
            frame.render_widget(Paragraph::new(self.roster_line(width)).style(Theme::base()), roster);
        }
    }

    fn progress_text(&self) -> String {
        let (shown, total) = self.playback.progress();
        format!("turn {}/{}", shown, total)
    }

    fn roster_line(&self, width: usize) -> Line<'static> {
        let agents = self.playback.transcript().agents();
        if agents.is_empty() {
            return Line::from(Span::styled("  no agents", Theme::muted()));
        }

        let roster = truncate_to_width(&agents.join(", "), width.saturating_sub(10));
        Line::from(vec![
            Span::styled("  agents: ", Theme::muted()),
            Span::styled(roster, Style::default().fg(Theme::BLUE)),
        ])
    }
}
