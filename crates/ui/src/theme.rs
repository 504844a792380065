use ratatui::style::{Color, Style};
use ratatui::text::Span;
use turnplay_core::StepCategory;

/// Iceberg color theme for the playback TUI
///
/// Based on iceberg.vim color scheme (https://github.com/cocopon/iceberg.vim)
/// Bluish dark theme that stays readable through long transcripts.
#[derive(Debug, Clone, Copy)]
pub struct Theme;

impl Theme {
    /// Primary background: deep blue-black (fills terminal)
    pub const BG: Color = Color::Rgb(22, 24, 33);

    /// Foreground: light blue-gray (primary text)
    pub const FG: Color = Color::Rgb(198, 200, 209);

    /// Primary accent: blue
    pub const BLUE: Color = Color::Rgb(132, 160, 198);

    /// Secondary accent: cyan
    pub const CYAN: Color = Color::Rgb(137, 184, 194);

    /// Tertiary accent: purple
    pub const PURPLE: Color = Color::Rgb(160, 147, 199);

    /// Completion: green
    pub const GREEN: Color = Color::Rgb(180, 190, 130);

    /// Routing and hand-offs: yellow
    pub const YELLOW: Color = Color::Rgb(226, 164, 120);

    /// Errors: red (status line)
    pub const RED: Color = Color::Rgb(226, 120, 120);

    /// Muted text: dimmed foreground
    pub const MUTED: Color = Color::Rgb(107, 112, 137);

    /// Border color
    pub const BORDER: Color = Color::Rgb(60, 65, 90);

    /// Base style for all text
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    /// Error style
    pub fn error() -> Style {
        Style::default().fg(Self::RED).bg(Self::BG)
    }

    /// Muted style (for secondary text)
    pub fn muted() -> Style {
        Style::default().fg(Self::MUTED).bg(Self::BG)
    }

    /// Informational status text
    pub fn notice() -> Style {
        Style::default().fg(Self::YELLOW).bg(Self::BG)
    }

    /// Border style
    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Accent bar for a focused turn
    pub fn focus() -> Style {
        Style::default().fg(Self::PURPLE).bg(Self::BG)
    }

    /// Color for a processing step category
    pub fn category_color(category: StepCategory) -> Color {
        match category {
            StepCategory::Research => Self::CYAN,
            StepCategory::Clarify => Self::PURPLE,
            StepCategory::Respond => Self::BLUE,
            StepCategory::Route => Self::YELLOW,
            StepCategory::Complete => Self::GREEN,
            StepCategory::General => Self::MUTED,
        }
    }

    /// Bracketed category tag, e.g. `[research]`
    pub fn category_span(category: StepCategory) -> Span<'static> {
        Span::styled(
            format!("[{}]", category.as_str()),
            Style::default().fg(Self::category_color(category)),
        )
    }
}
