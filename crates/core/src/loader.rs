use crate::error::{Error, Result};
use crate::store::transcript_from_value;
use crate::transcript::Transcript;

use std::path::Path;

/// Decode JSON text into a validated-shape [`Transcript`]
///
/// Only structure is checked here; duplicate ids are caught when the result is
/// loaded into a store.
pub fn parse_transcript(json: &str) -> Result<Transcript> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| Error::Parse(e.to_string()))?;
    Ok(transcript_from_value(value)?)
}

/// Read and decode a transcript file
pub async fn load_transcript_file(path: impl AsRef<Path>) -> Result<Transcript> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await?;
    decode_file(path, &content)
}

/// Blocking variant of [`load_transcript_file`] for callers outside a runtime
pub fn read_transcript_file(path: impl AsRef<Path>) -> Result<Transcript> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    decode_file(path, &content)
}

fn decode_file(path: &Path, content: &str) -> Result<Transcript> {
    let transcript = parse_transcript(content)?;

    tracing::info!(
        path = %path.display(),
        session = %transcript.session_name,
        turns = transcript.len(),
        "transcript file read"
    );

    Ok(transcript)
}
