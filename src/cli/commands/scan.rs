use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use console::style;
use serde::Serialize;

use crate::cli::Output;
use crate::config::ScanConfig;
use crate::scanner::{
    overall_severity, severity_label, ScanError, ScanMode, ScanResult, Scanner, Severity,
};

#[derive(Args)]
pub struct ScanArgs {
    /// Directory containing the already-cloned repository
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Repository identifier stamped into the report (defaults to PATH)
    #[arg(long)]
    pub repo: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum file size to scan, in bytes
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Processing mode: auto (smart default), parallel, or sequential
    #[arg(long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Hard cap on worker threads (0 = derive from CPU count)
    #[arg(long)]
    pub max_threads: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON report
    Json,
}

/// JSON report envelope: the scan result plus the aggregate label, the
/// same shape downstream consumers of the scan response expect.
#[derive(Serialize)]
struct ScanReport<'a> {
    #[serde(flatten)]
    result: &'a ScanResult,
    overall_severity: &'a str,
}

pub fn execute(args: &ScanArgs, output: &Output, config_path: Option<&Path>) -> Result<()> {
    let mut config = ScanConfig::load(config_path)?;
    if let Some(size) = args.max_file_size {
        config.max_file_size = size;
    }
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(threads) = args.max_threads {
        config.max_threads = threads;
    }

    let repo = args
        .repo
        .clone()
        .unwrap_or_else(|| args.path.display().to_string());
    let scanner = Scanner::new(config)?;

    if matches!(args.format, OutputFormat::Text) {
        output.info(&format!("Scanning {} ...", args.path.display()));
    }
    let result = match scanner.scan_repository(&args.path, &repo) {
        Ok(result) => result,
        Err(err) => {
            // Invalid roots get a friendly message and a dedicated exit
            // code; anything else propagates.
            if let Some(scan_err) = err.downcast_ref::<ScanError>() {
                output.error(&scan_err.to_string());
                std::process::exit(2);
            }
            return Err(err);
        }
    };

    let overall = overall_severity(&result.secrets);
    match args.format {
        OutputFormat::Json => print_json_report(&result, overall)?,
        OutputFormat::Text => print_text_report(&result, overall, output),
    }

    // Hook-friendly: findings mean a failing exit code.
    if result.total_secrets > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn print_json_report(result: &ScanResult, overall: Option<Severity>) -> Result<()> {
    let report = ScanReport {
        result,
        overall_severity: severity_label(overall),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_text_report(result: &ScanResult, overall: Option<Severity>, output: &Output) {
    for secret in &result.secrets {
        println!(
            "{} {}:{} - {}",
            severity_tag(secret.severity),
            secret.file_path,
            secret.line_number,
            secret.secret_name,
        );
        println!("    {}", style(&secret.snippet).dim());
    }

    if result.total_secrets == 0 {
        output.success(&format!(
            "No secrets found in {} files ({} ms)",
            result.total_files, result.scan_duration_ms
        ));
    } else {
        println!();
        output.warning(&format!(
            "{} secret(s) found in {} files ({} ms), overall severity: {}",
            result.total_secrets,
            result.total_files,
            result.scan_duration_ms,
            severity_label(overall),
        ));
    }
}

fn severity_tag(severity: Severity) -> console::StyledObject<&'static str> {
    match severity {
        Severity::Critical => style("CRITICAL").red().bold(),
        Severity::High => style("HIGH").red(),
        Severity::Medium => style("MEDIUM").yellow(),
        Severity::Low => style("LOW").dim(),
    }
}
