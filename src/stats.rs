use serde::{Deserialize, Serialize};

use crate::concordance::Concordance;
use crate::reader::ReadStats;

/// Per-run summary written as JSON when the CLI is invoked with
/// `--stats-out`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunStats {
    /// Document path as given on the command line
    pub file_path: String,
    /// Whitespace-delimited chunks read from the document
    pub chunks_read: u64,
    /// Bytes consumed from the document
    pub bytes_read: u64,
    /// Distinct normalized words in the concordance
    pub distinct_words: u64,
    /// Total word occurrences across all sentences
    pub total_occurrences: u64,
    /// Highest sentence number reached
    pub sentences: u64,
    /// Wall-clock processing time in milliseconds
    pub duration_ms: u64,
    /// Processing status (success, degraded)
    pub status: String,
    /// Error message when the run degraded
    pub error: Option<String>,
}

impl RunStats {
    /// Summarize one aggregation run.
    pub fn from_run(concordance: &Concordance, read_stats: &ReadStats, duration_ms: u64) -> Self {
        let status = if read_stats.read_error.is_some() {
            "degraded"
        } else {
            "success"
        };

        Self {
            file_path: read_stats.file_path.clone(),
            chunks_read: read_stats.chunks_read,
            bytes_read: read_stats.bytes_read,
            distinct_words: concordance.size() as u64,
            total_occurrences: concordance.total_occurrences(),
            sentences: concordance.last_sentence(),
            duration_ms,
            status: status.to_string(),
            error: read_stats.read_error.clone(),
        }
    }
}
