mod footer;
mod header;
mod turns;
mod wrap;

pub use footer::Footer;
pub use header::Header;
pub use turns::{TurnLines, TurnRenderer, TurnView, line_text};
pub use wrap::{format_delay, truncate_to_width, wrap_to_width};

use crate::{state::ViewState, theme::Theme};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use turnplay_core::{Playback, PlaybackConfig};

/// Presentation toggles read from `[playback]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub show_delays: bool,
    pub show_agents: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { show_delays: true, show_agents: true }
    }
}

impl From<&PlaybackConfig> for DisplayOptions {
    fn from(config: &PlaybackConfig) -> Self {
        Self { show_delays: config.show_delays, show_agents: config.show_agents }
    }
}

/// Full-screen view of the revealed prefix
pub struct PlaybackView<'a> {
    playback: &'a Playback,
    view: &'a ViewState,
    options: DisplayOptions,
}

impl<'a> PlaybackView<'a> {
    pub fn new(playback: &'a Playback, view: &'a ViewState, options: DisplayOptions) -> Self {
        Self { playback, view, options }
    }

    /// Build body lines for the revealed prefix at `width` columns
    pub fn body_lines(&self, width: usize) -> TurnLines {
        let focused = self.view.focused();
        let turns = self.playback.visible_prefix().iter().enumerate().map(|(index, turn)| TurnView {
            turn,
            index,
            focused: focused == Some(index),
            expanded: self.playback.is_detail_visible(turn.id()),
        });
        TurnRenderer::new(width, self.options.show_delays).render(turns)
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        frame.render_widget(Block::default().style(Theme::base()), area);

        let header = Header::new(self.playback, self.options.show_agents);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header.height()),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(Footer::HEIGHT),
            ])
            .split(area);

        header.render(frame, rows[0]);
        self.render_body(frame, rows[2]);
        Footer::new(self.playback, self.view).render(frame, rows[3]);
    }

    fn render_body(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.playback.turn_count() == 0 {
            let empty = Line::from(Span::styled("  This transcript has no turns.", Theme::muted()));
            frame.render_widget(Paragraph::new(empty), area);
            return;
        }

        let body = self.body_lines(area.width as usize);
        let height = area.height as usize;
        let offset = self.view.resolve_offset(body.anchor(self.view.focused()), body.lines.len(), height);

        let visible: Vec<Line<'static>> = body.lines.into_iter().skip(offset).take(height).collect();
        frame.render_widget(Paragraph::new(visible).style(Theme::base()), area);
    }
}
