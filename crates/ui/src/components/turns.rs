use super::wrap::{format_delay, wrap_to_width};
use crate::theme::Theme;

use ratatui::{
    style::{Color, Style, Stylize},
    text::{Line, Span},
};
use turnplay_core::{ProcessingStep, Turn};
use unicode_width::UnicodeWidthStr;

const STEP_INDENT: &str = "    ";

/// Rendered body lines plus the first line of every turn
#[derive(Debug, Default)]
pub struct TurnLines {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<usize>,
}

impl TurnLines {
    /// Line where turn `index` starts, 0 when out of range
    pub fn anchor(&self, index: Option<usize>) -> usize {
        index.and_then(|i| self.anchors.get(i).copied()).unwrap_or(0)
    }
}

/// Per-turn rendering inputs resolved by the caller
pub struct TurnView<'a> {
    pub turn: &'a Turn,
    pub index: usize,
    pub focused: bool,
    pub expanded: bool,
}

/// Builds styled lines for the revealed prefix
pub struct TurnRenderer {
    width: usize,
    show_delays: bool,
}

impl TurnRenderer {
    pub fn new(width: usize, show_delays: bool) -> Self {
        Self { width, show_delays }
    }

    pub fn render<'a>(&self, turns: impl IntoIterator<Item = TurnView<'a>>) -> TurnLines {
        let mut out = TurnLines::default();
        for view in turns {
            out.anchors.push(out.lines.len());
            self.render_turn(&view, &mut out.lines);
            out.lines.push(Line::default());
        }
        out
    }

    fn render_turn(&self, view: &TurnView<'_>, lines: &mut Vec<Line<'static>>) {
        let (marker, marker_style) =
            if view.focused { ("▶ ", Theme::focus()) } else { ("  ", Theme::muted()) };
        let title_style = if view.focused { Style::default().fg(Theme::FG).bold() } else { Theme::muted() };

        lines.push(Line::from(vec![
            Span::styled(marker, marker_style),
            Span::styled(view.turn.display_label(view.index), title_style),
            Span::styled(format!("  #{}", view.turn.id()), Theme::muted()),
        ]));

        self.render_user_message(&view.turn.user_message, lines);
        self.render_agent_message(&view.turn.agent_message, lines);

        if !view.turn.has_steps() {
            return;
        }

        if view.expanded {
            for step in view.turn.steps() {
                self.render_step(step, lines);
            }
        } else {
            let count = view.turn.steps().len();
            let noun = if count == 1 { "step" } else { "steps" };
            lines.push(Line::from(vec![
                Span::raw(STEP_INDENT),
                Span::styled(format!("▸ {} {}", count, noun), Theme::muted()),
            ]));
        }
    }

    /// User message with role prefix and accent bar
    fn render_user_message(&self, content: &str, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(vec![
            Span::styled("  ● ", Style::default().fg(Theme::BLUE)),
            Span::styled("User", Style::default().fg(Theme::BLUE).bold()),
        ]));
        self.render_accent_bar_message(content, Theme::BLUE, lines);
    }

    /// Agent reply with role prefix
    fn render_agent_message(&self, content: &str, lines: &mut Vec<Line<'static>>) {
        lines.push(Line::from(vec![
            Span::styled("  ◆ ", Style::default().fg(Theme::CYAN)),
            Span::styled("Agent", Style::default().fg(Theme::CYAN).bold()),
        ]));
        self.render_accent_bar_message(content, Theme::CYAN, lines);
    }

    fn render_accent_bar_message(&self, content: &str, accent: Color, lines: &mut Vec<Line<'static>>) {
        let accent_bar = Span::styled("  ┃ ", Style::default().fg(accent));
        let content_style = Style::default().fg(Theme::FG);

        for wrapped in wrap_to_width(content, self.width.saturating_sub(4)) {
            lines.push(Line::from(vec![accent_bar.clone(), Span::styled(wrapped, content_style)]));
        }
    }

    fn render_step(&self, step: &ProcessingStep, lines: &mut Vec<Line<'static>>) {
        let category = step.category();
        let entry = step.log_entry();

        let agent_style = if entry.has_known_agent() {
            Style::default().fg(Theme::BLUE).bold()
        } else {
            Theme::muted()
        };

        let mut prefix = vec![
            Span::raw(STEP_INDENT),
            Theme::category_span(category),
            Span::raw(" "),
            Span::styled(entry.agent.to_string(), agent_style),
            Span::styled(": ", Theme::muted()),
        ];
        let prefix_width: usize = prefix.iter().map(|s| s.content.width()).sum();

        let mut suffix = None;
        if self.show_delays && step.simulated_delay_ms > 0 {
            suffix = Some(Span::styled(format!("  {}", format_delay(step.simulated_delay_ms)), Theme::muted()));
        }

        let content_width = self.width.saturating_sub(prefix_width).max(10);
        let mut wrapped = wrap_to_width(entry.content, content_width).into_iter();

        let first = wrapped.next().unwrap_or_default();
        prefix.push(Span::styled(first, Style::default().fg(Theme::FG)));

        let rest: Vec<String> = wrapped.collect();
        if rest.is_empty()
            && let Some(delay) = suffix.take()
        {
            prefix.push(delay);
        }
        lines.push(Line::from(prefix));

        let continuation = " ".repeat(prefix_width);
        let last = rest.len().saturating_sub(1);
        for (i, text) in rest.into_iter().enumerate() {
            let mut spans = vec![Span::raw(continuation.clone()), Span::styled(text, Style::default().fg(Theme::FG))];
            if i == last
                && let Some(delay) = suffix.take()
            {
                spans.push(delay);
            }
            lines.push(Line::from(spans));
        }
    }
}

/// Plain text of a rendered line
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_turn() -> Turn {
        Turn::new("t1", "What is due Friday?", "The report.").with_steps(vec![
            ProcessingStep::new("searching", "Researcher: looking up deadlines").with_delay(400),
            ProcessingStep::new("done", "wrapping up"),
        ])
    }

    fn render_one(turn: &Turn, width: usize, show_delays: bool, focused: bool, expanded: bool) -> TurnLines {
        TurnRenderer::new(width, show_delays).render([TurnView { turn, index: 0, focused, expanded }])
    }

    fn texts(lines: &TurnLines) -> Vec<String> {
        lines.lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_collapsed_turn_shows_step_count() {
        let turn = sample_turn();
        let rendered = render_one(&turn, 60, true, true, false);
        let text = texts(&rendered);

        assert!(text[0].contains("▶ Turn 1"));
        assert!(text.iter().any(|l| l.contains("What is due Friday?")));
        assert!(text.iter().any(|l| l.contains("The report.")));
        assert!(text.iter().any(|l| l.contains("▸ 2 steps")));
        assert!(!text.iter().any(|l| l.contains("[research]")));
    }

    #[test]
    fn test_expanded_turn_shows_steps() {
        let turn = sample_turn();
        let rendered = render_one(&turn, 80, true, false, true);
        let text = texts(&rendered);

        assert!(text.iter().any(|l| l.contains("[research] Researcher: looking up deadlines  400ms")));
        assert!(text.iter().any(|l| l.contains("[complete] unknown: wrapping up")));
        assert!(!text.iter().any(|l| l.contains("▸")));
    }

    #[test]
    fn test_delays_hidden() {
        let turn = sample_turn();
        let rendered = render_one(&turn, 80, false, false, true);
        assert!(!texts(&rendered).iter().any(|l| l.contains("400ms")));
    }

    #[test]
    fn test_anchors_per_turn() {
        let first = sample_turn();
        let second = Turn::new("t2", "u", "a").with_name("Second");
        let rendered = TurnRenderer::new(60, true).render([
            TurnView { turn: &first, index: 0, focused: false, expanded: false },
            TurnView { turn: &second, index: 1, focused: true, expanded: false },
        ]);

        assert_eq!(rendered.anchors.len(), 2);
        assert_eq!(rendered.anchor(Some(0)), 0);
        assert!(line_text(&rendered.lines[rendered.anchor(Some(1))]).contains("Second"));
        assert_eq!(rendered.anchor(None), 0);
    }

    #[test]
    fn test_single_step_noun() {
        let turn = Turn::new("t1", "u", "a").with_steps(vec![ProcessingStep::new("routing", "loop_router: next")]);
        let rendered = render_one(&turn, 60, true, false, false);
        assert!(texts(&rendered).iter().any(|l| l.contains("▸ 1 step")));
    }
}
