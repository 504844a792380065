use super::Playback;
use crate::error::{Result, UnknownTurnError};
use crate::transcript::TurnId;

impl Playback {
    /// Flip detail visibility for `turn_id` and return the new value
    ///
    /// Fails with [`UnknownTurnError`] for ids outside the loaded transcript.
    /// Never moves the cursor.
    pub fn toggle_detail(&mut self, turn_id: &TurnId) -> Result<bool> {
        let visible = !self.is_detail_visible(turn_id);
        self.set_detail(turn_id, visible)?;
        Ok(visible)
    }

    /// Set detail visibility for `turn_id` explicitly
    pub fn set_detail(&mut self, turn_id: &TurnId, visible: bool) -> Result<()> {
        if !self.store.contains(turn_id) {
            return Err(UnknownTurnError { turn_id: turn_id.clone() }.into());
        }
        self.detail_visibility.insert(turn_id.clone(), visible);
        Ok(())
    }

    /// Whether `turn_id`'s processing steps are shown. Unknown ids read as `false`.
    pub fn is_detail_visible(&self, turn_id: &TurnId) -> bool {
        self.detail_visibility.get(turn_id).copied().unwrap_or(false)
    }

    /// Hide processing steps for every turn
    pub fn collapse_all(&mut self) {
        self.detail_visibility.clear();
    }

    /// Number of turns currently expanded
    pub fn expanded_count(&self) -> usize {
        self.detail_visibility.values().filter(|v| **v).count()
    }
}
