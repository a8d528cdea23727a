use anyhow::Result;
use console::style;

use crate::cli::Output;
use crate::scanner::SecretPatterns;

pub fn execute(output: &Output) -> Result<()> {
    let patterns = SecretPatterns::builtin()?;
    println!(
        "Builtin secret detection patterns ({} total):",
        patterns.len()
    );
    println!();

    for pattern in patterns.iter() {
        println!(
            "  {:<28} {:<16} {}",
            style(pattern.name).cyan(),
            pattern.kind,
            style(pattern.severity.as_str()).yellow(),
        );
        output.verbose(&format!("    {}", pattern.description));
    }

    Ok(())
}
