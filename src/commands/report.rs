//! Report command implementation.
//!
//! The report command:
//! 1. Discovers bamPEFragmentSize logs
//! 2. Parses and merges per-sample histograms
//! 3. Writes the HTML report and JSON export

use super::models::ReportArgs;
use crate::aggregator::FragmentSizeModule;
use crate::host::{FsLogFinder, NameCleaner};
use crate::output::{write_histograms_json, HtmlReport};
use crate::parser::schema::{HistogramSummary, SampleHistograms};
use anyhow::{Context, Result};
use log::{info, warn};
use std::time::Instant;

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Number of samples found
///
/// # Errors
/// * Missing search paths
/// * Section registration failures
/// * File write errors
pub fn execute_report(args: &ReportArgs) -> Result<usize> {
    let start_time = Instant::now();

    info!("Step 1/3: Searching {} path(s) for logs...", args.search_paths.len());
    let finder = FsLogFinder::new(args.search_paths.iter().cloned())
        .with_max_file_size(args.max_file_size);
    let cleaner = NameCleaner::new().with_prepend_dirs(args.prepend_dirs);

    info!("Step 2/3: Parsing fragment size distributions...");
    let mut report = HtmlReport::new();
    let mut module = FragmentSizeModule::new(cleaner);
    let count = module
        .parse_all_logs(&finder, &mut report)
        .context("Failed to parse bamPEFragmentSize logs")?;

    if count == 0 {
        warn!("No bamPEFragmentSize samples found");
    }

    info!("Step 3/3: Writing output files...");
    if let Some(json_path) = &args.output_json {
        write_histograms_json(module.data(), json_path)
            .context("Failed to write histogram JSON")?;
        info!("✓ Histograms written to: {}", json_path.display());
    }

    if let Some(html_path) = &args.output_html {
        if count > 0 {
            report.write(html_path)
                .context("Failed to write HTML report")?;
            info!("✓ Report written to: {}", html_path.display());
        } else {
            info!("Skipping HTML report (no sections)");
        }
    }

    if args.print_summary {
        println!("{}", format_summary(module.data()));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(count)
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.search_paths.is_empty() {
        anyhow::bail!("At least one search path is required");
    }

    for path in &args.search_paths {
        if !path.exists() {
            anyhow::bail!("Search path does not exist: {}", path.display());
        }
    }

    if args.max_file_size == 0 {
        anyhow::bail!("max_file_size must be greater than 0");
    }

    if args.output_html.is_none() && args.output_json.is_none() && !args.print_summary {
        anyhow::bail!("Nothing to do: enable at least one of HTML output, JSON output or summary");
    }

    Ok(())
}

/// Tabular per-sample summary
///
/// **Public** - shared with the validate command
pub fn format_summary(data: &SampleHistograms) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{:<30} {:>12} {:>8} {:>8} {:>10} {:>8}",
        "Sample", "Fragments", "Min", "Max", "Mean", "Mode"
    ));

    for (s_name, histogram) in data {
        match HistogramSummary::from_histogram(histogram) {
            Some(summary) => lines.push(format!(
                "{:<30} {:>12} {:>8} {:>8} {:>10.1} {:>8}",
                s_name,
                summary.total_fragments,
                summary.min_size,
                summary.max_size,
                summary.mean_size,
                summary.modal_size
            )),
            None => lines.push(format!("{:<30} {:>12}", s_name, 0)),
        }
    }

    lines.push(format!("{} sample(s)", data.len()));
    lines.join("\n")
}
