mod detail;
mod navigation;

pub use navigation::NavOutcome;

use crate::error::Result;
use crate::store::TranscriptStore;
use crate::transcript::{Transcript, Turn, TurnId};

use serde_json::Value;
use std::collections::HashMap;

/// Playback owns the loaded transcript and the state of revealing it turn by turn
///
/// Supports:
/// - Saturating forward/backward navigation over the turn sequence
/// - Per-turn expand/collapse of processing steps, keyed by turn id
/// - Derived views (visible prefix, current turn) recomputed on demand
///
/// The cursor is `None` exactly when the transcript has no turns. Detail
/// visibility survives navigation and is only cleared by a new load or an
/// explicit [`collapse_all`](Self::collapse_all).
#[derive(Debug, Clone, Default)]
pub struct Playback {
    store: TranscriptStore,
    cursor: Option<usize>,
    detail_visibility: HashMap<TurnId, bool>,
}

impl Playback {
    /// Create a playback over an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a playback and load `transcript` into it
    pub fn with_transcript(transcript: Transcript) -> Result<Self> {
        let mut playback = Self::new();
        playback.load(transcript)?;
        Ok(playback)
    }

    /// Replace the transcript and reset the cursor and visibility map
    ///
    /// On error nothing changes, including the cursor.
    pub fn load(&mut self, transcript: Transcript) -> Result<()> {
        self.store.load(transcript)?;
        self.reset();
        Ok(())
    }

    /// Like [`load`](Self::load) for untyped JSON-like data
    pub fn load_value(&mut self, value: Value) -> Result<()> {
        self.store.load_value(value)?;
        self.reset();
        Ok(())
    }

    fn reset(&mut self) {
        self.cursor = if self.store.is_empty() { None } else { Some(0) };
        self.detail_visibility.clear();
    }

    /// Index of the last revealed turn; `None` for an empty transcript
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn turn_count(&self) -> usize {
        self.store.turn_count()
    }

    pub fn turn_at(&self, index: usize) -> Result<&Turn> {
        self.store.turn_at(index)
    }

    /// Turns `0..=cursor` in order; empty for an empty transcript
    pub fn visible_prefix(&self) -> &[Turn] {
        match self.cursor {
            Some(cursor) => &self.store.turns()[..=cursor],
            None => &[],
        }
    }

    /// Turn under the cursor, `None` when there are no turns
    pub fn current_turn(&self) -> Option<&Turn> {
        self.cursor.and_then(|cursor| self.store.turns().get(cursor))
    }

    /// `(revealed, total)` turn counts
    pub fn progress(&self) -> (usize, usize) {
        (self.visible_prefix().len(), self.turn_count())
    }

    pub fn session_name(&self) -> &str {
        self.store.session_name()
    }

    pub fn transcript(&self) -> &Transcript {
        self.store.transcript()
    }

    pub fn store(&self) -> &TranscriptStore {
        &self.store
    }

    /// Bumped on every successful load
    pub fn generation(&self) -> u64 {
        self.store.generation()
    }
}
