use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Criticality of a pattern, ordered so that `max()` picks the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One located occurrence of a secret pattern match.
///
/// `snippet` is always redacted; the raw matched text is never stored.
#[derive(Debug, Clone, Serialize)]
pub struct DetectedSecret {
    /// Path relative to the scan root, for report portability.
    pub file_path: String,
    /// 1-based line number.
    pub line_number: usize,
    pub secret_type: String,
    pub secret_name: String,
    pub severity: Severity,
    pub description: String,
    pub snippet: String,
    pub matched_pattern: String,
}

/// Result of one scan invocation.
#[derive(Debug, Serialize)]
pub struct ScanResult {
    /// Free-form repository identifier supplied by the caller.
    pub repo: String,
    pub scanned_at: DateTime<Utc>,
    /// Count of files the selector produced, including files that later
    /// failed to read.
    pub total_files: usize,
    pub total_secrets: usize,
    pub secrets: Vec<DetectedSecret>,
    pub scan_duration_ms: u64,
}

/// Processing mode for the per-file scanning phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Decide based on file count (default).
    Auto,
    /// Always use the worker pool.
    Parallel,
    /// Single-threaded.
    Sequential,
}

/// Fatal scan errors. Everything else is recovered per file.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),
    #[error("scan root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Critical).unwrap();
        assert_eq!(json, "\"critical\"");
    }
}
