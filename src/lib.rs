//! # ShepScan - Repository Credential Scanner
//!
//! Scans a cloned source-code repository for accidentally committed
//! credentials (API keys, private keys, connection strings) and reports
//! each finding with location, type, severity, and a redacted preview.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan a checked-out repository
//! shepscan scan path/to/repo --repo https://github.com/acme/widgets
//!
//! # Machine-readable report
//! shepscan scan path/to/repo --format json
//! ```
//!
//! The library entry point is [`scanner::Scanner`]: hand it a directory
//! and a repository identifier, get back a [`scanner::ScanResult`]. The
//! crate never touches the network and never persists anything; cloning
//! the repository and storing the report are the caller's job.

pub mod cli;
pub mod config;
pub mod scanner;

pub use cli::Cli;
pub use config::ScanConfig;

/// Result type alias for ShepScan operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
