//! Conversation transcript data model.
//!
//! A [`Transcript`] is an ordered list of [`Turn`]s, each pairing a user message
//! with an agent response and an optional list of [`ProcessingStep`]s that
//! describe the simulated internal reasoning behind the response.
//!
//! Wire names are camelCase so pre-recorded JSON transcripts decode directly:
//!
//! ```json
//! {
//!   "sessionName": "Deadline anxiety",
//!   "turns": [
//!     {
//!       "turnId": "t1",
//!       "userMessage": "I'm anxious about the deadline.",
//!       "agentMessage": "Let's break it down.",
//!       "processingSteps": [
//!         { "status": "searching", "logLine": "Researcher: coping strategies", "simulatedDelayMs": 800 }
//!       ]
//!     }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Agent name used when a log line has no `"<agent>:"` prefix.
pub const UNKNOWN_AGENT: &str = "unknown";

const AGENT_SEPARATOR: char = ':';

/// Stable identifier of a turn, unique within a transcript.
///
/// Accepts a JSON string or integer; integers are stored in decimal form so
/// `7` and `"7"` name the same turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawTurnId", into = "String")]
pub struct TurnId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTurnId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawTurnId> for TurnId {
    fn from(raw: RawTurnId) -> Self {
        match raw {
            RawTurnId::Text(s) => TurnId(s),
            RawTurnId::Unsigned(n) => TurnId(n.to_string()),
            RawTurnId::Signed(n) => TurnId(n.to_string()),
        }
    }
}

impl From<TurnId> for String {
    fn from(id: TurnId) -> Self {
        id.0
    }
}

impl TurnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty once surrounding whitespace is ignored
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TurnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TurnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u64> for TurnId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

/// Display category derived from a step's free-form `status` tag.
///
/// The status vocabulary is open; anything unrecognized maps to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StepCategory {
    Research,
    Clarify,
    Respond,
    Route,
    Complete,
    #[default]
    General,
}

impl StepCategory {
    /// Categorize a status tag. Never fails.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "searching" | "researching" | "web_search" => StepCategory::Research,
            "clarifying" | "options" => StepCategory::Clarify,
            "asking" | "responding" | "thinking" => StepCategory::Respond,
            "routing" | "delegating" | "handoff" => StepCategory::Route,
            "loop_complete" | "complete" | "done" => StepCategory::Complete,
            _ => StepCategory::General,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepCategory::Research => "research",
            StepCategory::Clarify => "clarify",
            StepCategory::Respond => "respond",
            StepCategory::Route => "route",
            StepCategory::Complete => "complete",
            StepCategory::General => "general",
        }
    }
}

impl fmt::Display for StepCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A log line split into the agent that wrote it and what it said
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogEntry<'a> {
    pub agent: &'a str,
    pub content: &'a str,
}

impl<'a> LogEntry<'a> {
    /// Split `"<agent>:<content>"` at the first colon, trimming whitespace around both parts.
    ///
    /// Lines without a colon, with a blank agent part, or whose first colon
    /// belongs to a URL or path (`https://`, `a/b:c`) belong to [`UNKNOWN_AGENT`].
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        if let Some((agent, content)) = trimmed.split_once(AGENT_SEPARATOR)
            && !agent.trim().is_empty()
            && !agent.contains('/')
            && !content.starts_with("//")
        {
            return Self { agent: agent.trim(), content: content.trim() };
        }
        Self { agent: UNKNOWN_AGENT, content: trimmed }
    }

    pub fn has_known_agent(&self) -> bool {
        self.agent != UNKNOWN_AGENT
    }
}

/// One scripted unit of simulated internal reasoning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingStep {
    pub status: String,
    pub log_line: String,
    /// Display-only; playback never waits on it.
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

impl ProcessingStep {
    pub fn new(status: impl Into<String>, log_line: impl Into<String>) -> Self {
        Self { status: status.into(), log_line: log_line.into(), simulated_delay_ms: 0 }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.simulated_delay_ms = delay_ms;
        self
    }

    pub fn category(&self) -> StepCategory {
        StepCategory::from_status(&self.status)
    }

    pub fn log_entry(&self) -> LogEntry<'_> {
        LogEntry::parse(&self.log_line)
    }
}

/// One user/agent exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub turn_id: TurnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn_name: Option<String>,
    pub user_message: String,
    pub agent_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_steps: Option<Vec<ProcessingStep>>,
}

impl Turn {
    pub fn new(turn_id: impl Into<TurnId>, user_message: impl Into<String>, agent_message: impl Into<String>) -> Self {
        Self {
            turn_id: turn_id.into(),
            turn_name: None,
            user_message: user_message.into(),
            agent_message: agent_message.into(),
            processing_steps: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.turn_name = Some(name.into());
        self
    }

    pub fn with_steps(mut self, steps: Vec<ProcessingStep>) -> Self {
        self.processing_steps = Some(steps);
        self
    }

    pub fn id(&self) -> &TurnId {
        &self.turn_id
    }

    /// Processing steps in presentation order; empty when absent
    pub fn steps(&self) -> &[ProcessingStep] {
        self.processing_steps.as_deref().unwrap_or(&[])
    }

    pub fn has_steps(&self) -> bool {
        !self.steps().is_empty()
    }

    /// The turn name when set, otherwise a 1-based positional label
    pub fn display_label(&self, index: usize) -> String {
        match self.turn_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Turn {}", index + 1),
        }
    }
}

/// A fully-loaded, immutable conversation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    #[serde(default)]
    pub session_name: String,
    pub turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(session_name: impl Into<String>, turns: Vec<Turn>) -> Self {
        Self { session_name: session_name.into(), turns }
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Total processing steps across all turns
    pub fn step_count(&self) -> usize {
        self.turns.iter().map(|t| t.steps().len()).sum()
    }

    /// Agents named in step log lines, in order of first appearance
    pub fn agents(&self) -> Vec<&str> {
        let mut agents: Vec<&str> = Vec::new();
        for step in self.turns.iter().flat_map(|t| t.steps()) {
            let entry = step.log_entry();
            if entry.has_known_agent() && !agents.contains(&entry.agent) {
                agents.push(entry.agent);
            }
        }
        agents
    }
}
