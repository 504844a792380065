use super::{App, SCROLL_STEP};
use crate::event_handler::{EventHandler, KeyAction};

use crossterm::event::Event;
use turnplay_core::logging::redact_message;
use turnplay_core::{CommandOutcome, NavOutcome, PlaybackCommand};

impl App {
    /// Handle a terminal event
    pub fn handle_event(&mut self, event: Event) {
        if let Some(action) = EventHandler::handle_event(&event) {
            self.handle_action(action);
        }
    }

    /// Translate a key action into playback commands or view changes
    pub fn handle_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Advance => self.apply(PlaybackCommand::Advance),
            KeyAction::Retreat => self.apply(PlaybackCommand::Retreat),
            KeyAction::RevealAll => self.apply(PlaybackCommand::RevealAll),
            KeyAction::Rewind => self.apply(PlaybackCommand::Rewind),
            KeyAction::ToggleDetail => {
                let focused = self.view.focused_turn(&self.playback).map(|turn| turn.id().clone());
                match focused {
                    Some(turn_id) => self.apply(PlaybackCommand::ToggleDetail(turn_id)),
                    None => self.view.set_info("No turn is focused"),
                }
            }
            KeyAction::CollapseAll => {
                self.playback.collapse_all();
                self.view.clear_status();
            }
            KeyAction::FocusNext => {
                self.view.focus_next(self.playback.visible_prefix().len());
            }
            KeyAction::FocusPrev => {
                self.view.focus_prev();
            }
            KeyAction::Reload => self.reload(),
            KeyAction::ScrollUp => self.view.scroll_up(SCROLL_STEP),
            KeyAction::ScrollDown => self.view.scroll_down(SCROLL_STEP),
            KeyAction::Exit => self.should_exit = true,
        }
    }

    /// Apply a command, routing failures to the status line
    pub(super) fn apply(&mut self, command: PlaybackCommand) {
        let forward = matches!(command, PlaybackCommand::Advance | PlaybackCommand::RevealAll);

        match self.playback.apply(command) {
            Ok(CommandOutcome::Navigated(NavOutcome::Moved { from, to })) => {
                self.view.clear_status();
                self.view.follow_cursor(Some(to));
                if forward {
                    self.log_revealed(from + 1..=to);
                }
            }
            Ok(CommandOutcome::Navigated(NavOutcome::Saturated)) => {
                if self.playback.turn_count() == 0 {
                    self.view.set_info("This transcript has no turns");
                } else if forward {
                    self.view.set_info("Already at the last turn");
                } else {
                    self.view.set_info("Already at the first turn");
                }
            }
            Ok(CommandOutcome::DetailToggled { .. }) => self.view.clear_status(),
            Ok(CommandOutcome::Loaded { turns }) => {
                self.view.set_info(format!("Loaded {} turns", turns));
            }
            Err(e) => self.view.set_error(e.to_string()),
        }

        self.view.sync(&self.playback);
    }

    fn log_revealed(&self, range: std::ops::RangeInclusive<usize>) {
        for index in range {
            if let Ok(turn) = self.playback.turn_at(index) {
                tracing::info!(
                    turn_id = %turn.id(),
                    index,
                    user_message = %redact_message(&turn.user_message, &self.privacy),
                    "turn revealed"
                );
            }
        }
    }
}
