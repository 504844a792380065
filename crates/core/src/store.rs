use crate::error::{IndexError, Result, ValidationError};
use crate::transcript::{Transcript, Turn, TurnId};

use serde_json::Value;
use std::collections::HashMap;

/// Holds the immutable turn sequence of the current transcript
///
/// Supports:
/// - Loading a typed [`Transcript`] or untyped JSON value with validation
/// - Bounded indexed lookup
/// - Turn id to index resolution
///
/// A rejected load leaves the previously loaded transcript in place.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    transcript: Transcript,
    index_by_id: HashMap<TurnId, usize>,
    generation: u64,
}

impl TranscriptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held transcript after checking turn ids
    pub fn load(&mut self, transcript: Transcript) -> Result<()> {
        let index_by_id = index_turns(&transcript.turns)?;

        tracing::debug!(
            session = %transcript.session_name,
            turns = transcript.turns.len(),
            generation = self.generation + 1,
            "transcript loaded"
        );

        self.transcript = transcript;
        self.index_by_id = index_by_id;
        self.generation += 1;
        Ok(())
    }

    /// Validate the shape of already-decoded JSON data, then [`load`](Self::load) it
    pub fn load_value(&mut self, value: Value) -> Result<()> {
        let transcript = transcript_from_value(value)?;
        self.load(transcript)
    }

    pub fn turn_count(&self) -> usize {
        self.transcript.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript.turns.is_empty()
    }

    /// Turn at `index`, or [`IndexError`] outside `[0, turn_count() - 1]`
    pub fn turn_at(&self, index: usize) -> Result<&Turn> {
        self.transcript
            .turns
            .get(index)
            .ok_or_else(|| IndexError { index, len: self.turn_count() }.into())
    }

    /// Index of the turn with `turn_id`, if it belongs to this transcript
    pub fn position_of(&self, turn_id: &TurnId) -> Option<usize> {
        self.index_by_id.get(turn_id).copied()
    }

    pub fn contains(&self, turn_id: &TurnId) -> bool {
        self.index_by_id.contains_key(turn_id)
    }

    pub fn turns(&self) -> &[Turn] {
        &self.transcript.turns
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn session_name(&self) -> &str {
        &self.transcript.session_name
    }

    /// Number of successful loads so far; 0 for a fresh store
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn index_turns(turns: &[Turn]) -> std::result::Result<HashMap<TurnId, usize>, ValidationError> {
    let mut index_by_id = HashMap::with_capacity(turns.len());
    for (index, turn) in turns.iter().enumerate() {
        if turn.turn_id.is_blank() {
            return Err(ValidationError::EmptyTurnId { index });
        }
        if index_by_id.insert(turn.turn_id.clone(), index).is_some() {
            return Err(ValidationError::DuplicateTurnId { turn_id: turn.turn_id.clone(), index });
        }
    }
    Ok(index_by_id)
}

/// Structural checks with field-level messages before typed decoding.
pub(crate) fn transcript_from_value(value: Value) -> std::result::Result<Transcript, ValidationError> {
    let root = value.as_object().ok_or(ValidationError::NotAnObject)?;

    if let Some(name) = root.get("sessionName")
        && !name.is_string()
    {
        return Err(ValidationError::InvalidSessionName);
    }

    let turns = root
        .get("turns")
        .and_then(Value::as_array)
        .ok_or(ValidationError::TurnsNotSequence)?;

    for (index, turn) in turns.iter().enumerate() {
        let turn = turn.as_object().ok_or(ValidationError::TurnNotAnObject { index })?;

        match turn.get("turnId") {
            None | Some(Value::Null) => return Err(ValidationError::MissingField { index, field: "turnId" }),
            Some(Value::String(_)) => {}
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {}
            Some(_) => {
                return Err(ValidationError::InvalidField { index, field: "turnId", expected: "a string or integer" });
            }
        }

        for field in ["userMessage", "agentMessage"] {
            match turn.get(field) {
                None | Some(Value::Null) => return Err(ValidationError::MissingField { index, field }),
                Some(Value::String(_)) => {}
                Some(_) => return Err(ValidationError::InvalidField { index, field, expected: "a string" }),
            }
        }

        if let Some(steps) = turn.get("processingSteps")
            && !steps.is_array()
            && !steps.is_null()
        {
            return Err(ValidationError::InvalidField { index, field: "processingSteps", expected: "an array" });
        }
    }

    Ok(serde_json::from_value(value)?)
}
