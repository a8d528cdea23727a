use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use super::engine::Scanner;
use super::types::DetectedSecret;

/// Worker count adapted to the workload. Small candidate lists are not
/// worth spreading across the whole machine.
///
/// `max_threads` of 0 means "derive from CPU count".
pub fn optimal_workers(file_count: usize, max_threads: usize) -> usize {
    let cores = num_cpus::get();
    let cap = if max_threads > 0 {
        max_threads.min(cores)
    } else {
        cores
    };

    let workers = if file_count <= 10 {
        2
    } else if file_count <= 50 {
        cap / 2
    } else if file_count <= 100 {
        (cap * 3) / 4
    } else {
        cap
    };

    workers.clamp(1, cap.max(1)).min(file_count.max(1))
}

/// Scan files on a bounded rayon pool.
///
/// Per-file work shares nothing; results are collected in input order and
/// concatenated, so the output is identical to a sequential scan.
pub fn scan_files(
    scanner: &Scanner,
    root: &Path,
    files: &[PathBuf],
) -> Result<Vec<DetectedSecret>> {
    let workers = optimal_workers(files.len(), scanner.config().max_threads);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let per_file: Vec<Vec<DetectedSecret>> = pool.install(|| {
        files
            .par_iter()
            .map(|path| scanner.scan_file_lossy(path, root))
            .collect()
    });

    Ok(per_file.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::scanner::selector::FileSelector;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_optimal_workers_respects_caps() {
        assert_eq!(optimal_workers(0, 4), 1);
        assert!(optimal_workers(5, 4) <= 2);
        assert!(optimal_workers(75, 4) <= 4);
        assert!(optimal_workers(10_000, 4) <= 4);
        // Never zero, even on a single-core box.
        assert!(optimal_workers(500, 1) >= 1);
    }

    #[test]
    fn test_parallel_matches_sequential_output() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..12 {
            fs::write(
                temp_dir.path().join(format!("file{i:02}.txt")),
                format!("line one\nAKIAABCDEFGHIJKLMN{i:02}\n"),
            )
            .unwrap();
        }

        let config = ScanConfig::default();
        let scanner = Scanner::new(config.clone()).unwrap();
        let files = FileSelector::new(&config).select(temp_dir.path());

        let parallel = scan_files(&scanner, temp_dir.path(), &files).unwrap();
        let sequential: Vec<_> = files
            .iter()
            .flat_map(|path| scanner.scan_file_lossy(path, temp_dir.path()))
            .collect();

        assert_eq!(parallel.len(), sequential.len());
        assert_eq!(parallel.len(), 12);
        for (a, b) in parallel.iter().zip(sequential.iter()) {
            assert_eq!(a.file_path, b.file_path);
            assert_eq!(a.line_number, b.line_number);
            assert_eq!(a.secret_type, b.secret_type);
            assert_eq!(a.snippet, b.snippet);
        }
    }
}
