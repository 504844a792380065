pub mod command;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod playback;
pub mod store;
pub mod transcript;

pub use command::{CommandOutcome, PlaybackCommand};
pub use config::{Config, FileLoggingConfig, PlaybackConfig};
pub use error::{Error, IndexError, Result, UnknownTurnError, ValidationError};
pub use loader::{load_transcript_file, parse_transcript, read_transcript_file};
pub use playback::{NavOutcome, Playback};
pub use store::TranscriptStore;
pub use transcript::{LogEntry, ProcessingStep, StepCategory, Transcript, Turn, TurnId, UNKNOWN_AGENT};
