//! Discrete commands accepted by [`Playback`].
//!
//! Input layers (keyboard, buttons, scripts) translate their events into a
//! [`PlaybackCommand`] and hand it to [`Playback::apply`]. Each command runs to
//! completion before `apply` returns; the `&mut` receiver rules out a second
//! command being applied to the same state concurrently.

use crate::error::Result;
use crate::playback::{NavOutcome, Playback};
use crate::transcript::{Transcript, TurnId};

/// A state-changing request for the playback engine
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackCommand {
    Advance,
    Retreat,
    RevealAll,
    Rewind,
    ToggleDetail(TurnId),
    Load(Transcript),
}

impl PlaybackCommand {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            PlaybackCommand::Advance => "advance",
            PlaybackCommand::Retreat => "retreat",
            PlaybackCommand::RevealAll => "reveal_all",
            PlaybackCommand::Rewind => "rewind",
            PlaybackCommand::ToggleDetail(_) => "toggle_detail",
            PlaybackCommand::Load(_) => "load",
        }
    }
}

/// What applying a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Navigated(NavOutcome),
    DetailToggled { turn_id: TurnId, visible: bool },
    Loaded { turns: usize },
}

impl Playback {
    /// Apply a single command
    ///
    /// Navigation never fails. `ToggleDetail` with a stale id and `Load` with an
    /// invalid transcript return their errors unchanged to the caller.
    pub fn apply(&mut self, command: PlaybackCommand) -> Result<CommandOutcome> {
        let name = command.name();
        let result = match command {
            PlaybackCommand::Advance => Ok(CommandOutcome::Navigated(self.advance())),
            PlaybackCommand::Retreat => Ok(CommandOutcome::Navigated(self.retreat())),
            PlaybackCommand::RevealAll => Ok(CommandOutcome::Navigated(self.reveal_all())),
            PlaybackCommand::Rewind => Ok(CommandOutcome::Navigated(self.rewind())),
            PlaybackCommand::ToggleDetail(turn_id) => self
                .toggle_detail(&turn_id)
                .map(|visible| CommandOutcome::DetailToggled { turn_id, visible }),
            PlaybackCommand::Load(transcript) => {
                self.load(transcript).map(|()| CommandOutcome::Loaded { turns: self.turn_count() })
            }
        };

        match &result {
            Ok(outcome) => tracing::debug!(command = name, cursor = ?self.cursor(), ?outcome, "command applied"),
            Err(e) => tracing::warn!(command = name, error = %e, "command rejected"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::playback::tests::three_turns;
    use crate::transcript::Turn;

    #[test]
    fn test_command_names() {
        assert_eq!(PlaybackCommand::Advance.name(), "advance");
        assert_eq!(PlaybackCommand::ToggleDetail(TurnId::from("t1")).name(), "toggle_detail");
        assert_eq!(PlaybackCommand::Load(Transcript::default()).name(), "load");
    }

    #[test]
    fn test_apply_navigation() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();

        let outcome = playback.apply(PlaybackCommand::Advance).unwrap();
        assert_eq!(outcome, CommandOutcome::Navigated(NavOutcome::Moved { from: 0, to: 1 }));

        let outcome = playback.apply(PlaybackCommand::RevealAll).unwrap();
        assert_eq!(outcome, CommandOutcome::Navigated(NavOutcome::Moved { from: 1, to: 2 }));

        let outcome = playback.apply(PlaybackCommand::Advance).unwrap();
        assert_eq!(outcome, CommandOutcome::Navigated(NavOutcome::Saturated));

        playback.apply(PlaybackCommand::Retreat).unwrap();
        playback.apply(PlaybackCommand::Rewind).unwrap();
        assert_eq!(playback.cursor(), Some(0));
    }

    #[test]
    fn test_apply_toggle_detail() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        let outcome = playback.apply(PlaybackCommand::ToggleDetail(TurnId::from("t2"))).unwrap();
        assert_eq!(outcome, CommandOutcome::DetailToggled { turn_id: TurnId::from("t2"), visible: true });

        let err = playback.apply(PlaybackCommand::ToggleDetail(TurnId::from("t99"))).unwrap_err();
        assert!(matches!(err, Error::UnknownTurn(_)));
    }

    #[test]
    fn test_apply_load_resets_and_rejects() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        playback.apply(PlaybackCommand::RevealAll).unwrap();

        let outcome = playback
            .apply(PlaybackCommand::Load(Transcript::new("b", vec![Turn::new("x", "u", "a")])))
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Loaded { turns: 1 });
        assert_eq!(playback.cursor(), Some(0));

        let bad = Transcript::new("c", vec![Turn::new("y", "u", "a"), Turn::new("y", "u", "a")]);
        assert!(matches!(
            playback.apply(PlaybackCommand::Load(bad)),
            Err(Error::Validation(_))
        ));
        assert_eq!(playback.session_name(), "b");
    }

    #[test]
    fn test_stale_id_after_reload_is_rejected() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        playback
            .apply(PlaybackCommand::Load(Transcript::new("b", vec![Turn::new("x", "u", "a")])))
            .unwrap();

        let err = playback.apply(PlaybackCommand::ToggleDetail(TurnId::from("t1"))).unwrap_err();
        assert!(matches!(err, Error::UnknownTurn(_)));
    }
}
