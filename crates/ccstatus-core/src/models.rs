//! Data model for the status line payload and transcript lines
//!
//! `StatusInput` mirrors the JSON object Claude Code pipes to a
//! statusLine command on every prompt redraw. Everything below the
//! top-level object is optional; the hosting tool may omit any field.

use crate::error::StatusError;
use serde::Deserialize;
use std::io::Read;

/// Model descriptor from the status payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub display_name: String,
}

/// Workspace descriptor from the status payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub current_dir: String,
}

/// Cumulative cost descriptor from the status payload
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostInfo {
    #[serde(default)]
    pub total_cost_usd: f64,
}

/// One status payload, constructed once per invocation from stdin
///
/// Unknown fields are ignored so newer Claude Code versions do not
/// break deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusInput {
    #[serde(default)]
    pub model: ModelInfo,

    #[serde(default)]
    pub workspace: WorkspaceInfo,

    #[serde(default)]
    pub cost: CostInfo,

    /// Path to the session's JSONL transcript, if one exists yet
    #[serde(default)]
    pub transcript_path: Option<String>,

    /// Hosting tool version string
    #[serde(default)]
    pub version: Option<String>,
}

impl StatusInput {
    /// Parse a payload from a JSON string
    ///
    /// Malformed JSON is fatal for the whole render: there is no
    /// partial-output fallback.
    pub fn from_json(payload: &str) -> Result<Self, StatusError> {
        serde_json::from_str(payload).map_err(|e| StatusError::PayloadParse {
            message: e.to_string(),
            source: e,
        })
    }

    /// Read a reader to EOF and parse the payload
    pub fn from_reader(mut reader: impl Read) -> Result<Self, StatusError> {
        let mut payload = String::new();
        reader
            .read_to_string(&mut payload)
            .map_err(|e| StatusError::PayloadRead { source: e })?;
        Self::from_json(&payload)
    }
}

/// Token usage snapshot reported by an assistant turn
///
/// Counts are cumulative for the session, not per-turn deltas, so the
/// latest snapshot supersedes all earlier ones.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: u64,

    #[serde(default)]
    pub output_tokens: u64,

    /// Cache creation tokens (from cache_creation_input_tokens in JSONL)
    #[serde(default, alias = "cache_creation_input_tokens")]
    pub cache_creation_tokens: u64,

    /// Cache read tokens (from cache_read_input_tokens in JSONL)
    #[serde(default, alias = "cache_read_input_tokens")]
    pub cache_read_tokens: u64,
}

impl TokenUsage {
    /// Total tokens across all four counters
    pub fn total(&self) -> u64 {
        self.input_tokens + self.output_tokens + self.cache_creation_tokens + self.cache_read_tokens
    }
}

/// A single line from a session JSONL transcript
///
/// Only the fields the aggregator needs; everything else on the line
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptLine {
    /// Event type: "user", "assistant", "file-history-snapshot", etc.
    #[serde(rename = "type", default)]
    pub line_type: String,

    #[serde(default)]
    pub message: Option<TranscriptMessage>,
}

/// Message content of a transcript line
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptMessage {
    #[serde(default)]
    pub role: Option<String>,

    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

impl TranscriptLine {
    /// Usage snapshot, if this line is an assistant entry carrying one
    pub fn assistant_usage(&self) -> Option<TokenUsage> {
        let message = self.message.as_ref()?;
        let is_assistant =
            self.line_type == "assistant" || message.role.as_deref() == Some("assistant");
        if !is_assistant {
            return None;
        }
        message.usage.clone()
    }
}

/// Repository state for the working directory, computed fresh each run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoStatus {
    /// Active branch name; empty when not a repository or lookup failed
    pub branch: String,
    pub lines_added: u64,
    pub lines_deleted: u64,
}
