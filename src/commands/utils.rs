use super::report::format_summary;
use crate::output::read_histograms_json;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a histogram JSON export
pub fn validate_export_file(file_path: &Path) -> Result<()> {
    println!("Validating export: {}", file_path.display());

    let export = read_histograms_json(file_path)?;

    if export.version != SCHEMA_VERSION {
        log::warn!(
            "Export schema version {} differs from current {}",
            export.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid histogram JSON");
    println!("  Version: {}", export.version);
    println!("  Generated: {}", export.generated_at);
    println!();
    println!("{}", format_summary(&export.samples));

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("fragsize v{}", env!("CARGO_PKG_VERSION"));
    println!("Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Fragment size distribution reports from deepTools bamPEFragmentSize logs.");
}
