//! Scanner configuration.
//!
//! Layered the usual way: builtin defaults, then an optional
//! `shepscan.toml` (or an explicit `--config` path), then `SHEPSCAN_*`
//! environment variables with the highest priority.

use std::path::Path;

use anyhow::Result;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::scanner::ScanMode;

pub const DEFAULT_CONFIG_FILE: &str = "shepscan.toml";
pub const ENV_PREFIX: &str = "SHEPSCAN_";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Byte-size ceiling for candidate files.
    pub max_file_size: u64,
    /// Sequential, parallel, or file-count-based auto selection.
    pub mode: ScanMode,
    /// Hard cap on worker threads (0 = derive from CPU count).
    pub max_threads: usize,
    /// Minimum candidate count before auto mode goes parallel.
    pub min_files_for_parallel: usize,
    /// Directory names to prune in addition to the builtin denylist.
    pub skip_directories: Vec<String>,
    /// File extensions to skip in addition to the builtin denylist.
    pub skip_extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: crate::scanner::selector::MAX_FILE_SIZE,
            mode: ScanMode::Auto,
            max_threads: 0,
            min_files_for_parallel: 50,
            skip_directories: Vec::new(),
            skip_extensions: Vec::new(),
        }
    }
}

impl ScanConfig {
    /// Load configuration, optionally from an explicit file path.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        figment = match config_path {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(DEFAULT_CONFIG_FILE)),
        };

        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ScanConfig::default();
        assert_eq!(config.max_file_size, 1024 * 1024);
        assert_eq!(config.mode, ScanMode::Auto);
        assert_eq!(config.max_threads, 0);
        assert!(config.skip_directories.is_empty());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("shepscan.toml");
        fs::write(
            &path,
            r#"
max_file_size = 4096
mode = "sequential"
skip_directories = ["fixtures"]
"#,
        )
        .unwrap();

        let config = ScanConfig::load(Some(&path)).unwrap();
        assert_eq!(config.max_file_size, 4096);
        assert_eq!(config.mode, ScanMode::Sequential);
        assert_eq!(config.skip_directories, vec!["fixtures".to_string()]);
        // Untouched keys keep their defaults.
        assert_eq!(config.min_files_for_parallel, 50);
    }
}
