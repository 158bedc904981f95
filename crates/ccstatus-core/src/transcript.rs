//! Transcript aggregation: last assistant usage snapshot wins
//!
//! Transcripts are append-only JSONL and may end in a partial write
//! from an in-progress session, so a parse failure on any single line
//! is skipped rather than treated as fatal. Usage snapshots are
//! cumulative per turn; the aggregator keeps only the most recent one
//! and never sums across lines.

use crate::models::{TokenUsage, TranscriptLine};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, trace};

/// Token count at which the hosting tool auto-compacts the context
/// (80% of the 200k context window). Used purely as the percentage
/// denominator.
pub const AUTO_COMPACT_THRESHOLD: u64 = 160_000;

/// Scan a transcript for the most recent assistant usage snapshot
///
/// Returns an all-zero `TokenUsage` when the path is absent, the file
/// is unreadable, or no assistant entry carries a usage object. That
/// is a normal condition (e.g. a session with no assistant turns yet),
/// not an error.
pub fn last_usage(path: Option<&str>) -> TokenUsage {
    let Some(path) = path else {
        return TokenUsage::default();
    };

    let file = match File::open(Path::new(path)) {
        Ok(f) => f,
        Err(e) => {
            debug!(path, error = %e, "transcript not readable, rendering zero usage");
            return TokenUsage::default();
        }
    };

    let reader = BufReader::new(file);
    let mut latest = TokenUsage::default();

    for (index, line) in reader.lines().enumerate() {
        let Ok(line) = line else {
            // Mid-file read error; keep whatever was scanned so far.
            debug!(path, line = index + 1, "transcript read interrupted");
            break;
        };
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<TranscriptLine>(&line) {
            Ok(entry) => {
                if let Some(usage) = entry.assistant_usage() {
                    latest = usage;
                }
            }
            Err(e) => {
                trace!(path, line = index + 1, error = %e, "skipping malformed transcript line");
            }
        }
    }

    latest
}

/// Context pressure as a percentage of the auto-compact threshold
///
/// Rounded, and deliberately unclamped above 100 so overflow stays
/// visible to the operator.
pub fn context_percent(usage: &TokenUsage) -> u64 {
    ((usage.total() as f64 / AUTO_COMPACT_THRESHOLD as f64) * 100.0).round() as u64
}
