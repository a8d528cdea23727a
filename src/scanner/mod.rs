//! The secret-detection engine.
//!
//! Pipeline: the [`selector::FileSelector`] walks the scan root and
//! produces the candidate file list, the [`engine::Scanner`] matches every
//! registry pattern against every line (redacting matches into safe
//! snippets), and [`severity::overall_severity`] reduces the finding list
//! to one label. Per-file work is independent, so the engine can run it on
//! a bounded worker pool ([`parallel`]).

pub mod engine;
pub mod parallel;
pub mod patterns;
pub mod redact;
pub mod selector;
pub mod severity;
pub mod types;

pub use engine::Scanner;
pub use patterns::{SecretPattern, SecretPatterns};
pub use selector::FileSelector;
pub use severity::{overall_severity, severity_label};
pub use types::{DetectedSecret, ScanError, ScanMode, ScanResult, Severity};
