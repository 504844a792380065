use super::Playback;

/// Result of a navigation command. Hitting a bound is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// The cursor changed position
    Moved { from: usize, to: usize },
    /// The cursor was already at the bound (or there are no turns)
    Saturated,
}

impl NavOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, NavOutcome::Moved { .. })
    }
}

impl Playback {
    /// Reveal the next turn
    pub fn advance(&mut self) -> NavOutcome {
        let last = self.turn_count().saturating_sub(1);
        self.move_cursor(|cursor| (cursor + 1).min(last))
    }

    /// Hide the last revealed turn, never going below the first
    pub fn retreat(&mut self) -> NavOutcome {
        self.move_cursor(|cursor| cursor.saturating_sub(1))
    }

    /// Reveal every turn
    pub fn reveal_all(&mut self) -> NavOutcome {
        let last = self.turn_count().saturating_sub(1);
        self.move_cursor(|_| last)
    }

    /// Back to the first turn
    pub fn rewind(&mut self) -> NavOutcome {
        self.move_cursor(|_| 0)
    }

    pub fn is_at_start(&self) -> bool {
        matches!(self.cursor, None | Some(0))
    }

    pub fn is_at_end(&self) -> bool {
        match self.cursor {
            Some(cursor) => cursor + 1 == self.turn_count(),
            None => true,
        }
    }

    fn move_cursor(&mut self, target: impl FnOnce(usize) -> usize) -> NavOutcome {
        let Some(from) = self.cursor else {
            return NavOutcome::Saturated;
        };

        let to = target(from);
        if to == from {
            tracing::trace!(cursor = from, "navigation saturated");
            return NavOutcome::Saturated;
        }

        self.cursor = Some(to);
        NavOutcome::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::tests::three_turns;
    use crate::transcript::{Transcript, Turn, TurnId};

    #[test]
    fn test_advance_and_saturate() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();

        assert_eq!(playback.advance(), NavOutcome::Moved { from: 0, to: 1 });
        assert_eq!(playback.advance(), NavOutcome::Moved { from: 1, to: 2 });
        assert_eq!(playback.visible_prefix().len(), 3);

        assert_eq!(playback.advance(), NavOutcome::Saturated);
        assert_eq!(playback.cursor(), Some(2));
        assert!(playback.is_at_end());
    }

    #[test]
    fn test_retreat_and_saturate() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        assert!(playback.is_at_start());

        for _ in 0..5 {
            assert_eq!(playback.retreat(), NavOutcome::Saturated);
            assert_eq!(playback.cursor(), Some(0));
        }

        playback.advance();
        assert_eq!(playback.retreat(), NavOutcome::Moved { from: 1, to: 0 });
    }

    #[test]
    fn test_navigation_on_empty_transcript() {
        let mut playback = Playback::new();
        assert_eq!(playback.advance(), NavOutcome::Saturated);
        assert_eq!(playback.retreat(), NavOutcome::Saturated);
        assert_eq!(playback.reveal_all(), NavOutcome::Saturated);
        assert_eq!(playback.rewind(), NavOutcome::Saturated);
        assert_eq!(playback.cursor(), None);
        assert!(playback.is_at_start());
        assert!(playback.is_at_end());
    }

    #[test]
    fn test_single_turn_is_start_and_end() {
        let mut playback = Playback::with_transcript(Transcript::new("one", vec![Turn::new("only", "u", "a")])).unwrap();
        assert!(playback.is_at_start());
        assert!(playback.is_at_end());
        assert!(!playback.advance().moved());
        assert!(!playback.retreat().moved());
    }

    #[test]
    fn test_reveal_all_and_rewind() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();

        assert_eq!(playback.reveal_all(), NavOutcome::Moved { from: 0, to: 2 });
        assert_eq!(playback.reveal_all(), NavOutcome::Saturated);

        assert_eq!(playback.rewind(), NavOutcome::Moved { from: 2, to: 0 });
        assert_eq!(playback.rewind(), NavOutcome::Saturated);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        let moves = [1, 1, 1, 1, -1, 1, -1, -1, -1, -1, 1, 1, 1, -1];

        for step in moves {
            if step > 0 {
                playback.advance();
            } else {
                playback.retreat();
            }
            let cursor = playback.cursor().unwrap();
            assert!(cursor < playback.turn_count());
            assert_eq!(playback.visible_prefix().len(), cursor + 1);
        }
    }

    #[test]
    fn test_walkthrough_scenario() {
        let mut playback = Playback::with_transcript(three_turns()).unwrap();
        assert_eq!(playback.cursor(), Some(0));

        playback.advance();
        playback.advance();
        assert_eq!(playback.cursor(), Some(2));
        assert_eq!(playback.visible_prefix().len(), 3);

        playback.advance();
        assert_eq!(playback.cursor(), Some(2));

        let t1 = TurnId::from("t1");
        assert!(playback.toggle_detail(&t1).unwrap());
        assert!(playback.is_detail_visible(&t1));

        playback.retreat();
        playback.retreat();
        assert_eq!(playback.cursor(), Some(0));
        assert!(playback.is_detail_visible(&t1));
    }
}
