//! Report command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use smartspend_core::{advise, load_and_aggregate, Analysis, CategoryTable, InputResolver, Report};
use tracing::debug;

/// Pick the base directory: `--dir` if given, else the executable's directory
pub fn resolve_base_dir(dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.to_path_buf());
    }

    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("Executable path has no parent: {}", exe.display()))
}

/// Run the whole pipeline and return the analysis and the report path
///
/// The report file is only touched once every stage before it has succeeded.
pub fn run_report(base_dir: &Path, input: &str, output: &str) -> Result<(Analysis, PathBuf)> {
    let input_path = InputResolver::with_file_name(base_dir, input).resolve()?;

    let table = CategoryTable::default();
    let analysis = load_and_aggregate(&input_path, &table)
        .with_context(|| format!("Failed to analyze {}", input_path.display()))?;

    let advice = advise(analysis.highest_category, analysis.predicted_monthly);
    debug!("Generated {} suggestions", advice.len());

    let report_path = base_dir.join(output);
    Report::from_analysis(&analysis, advice)
        .write(&report_path)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    Ok((analysis, report_path))
}

pub fn cmd_report(base_dir: &Path, input: &str, output: &str, json: bool) -> Result<()> {
    let (analysis, report_path) = run_report(base_dir, input, output)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    }

    println!(
        "Analysis Complete! Report generated at: {}",
        report_path.display()
    );
    Ok(())
}
