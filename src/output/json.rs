//! JSON histogram export.
//!
//! Writes merged per-sample histograms wrapped in a versioned envelope.

use crate::parser::schema::{HistogramExport, SampleHistograms};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write merged histograms to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `data` - Merged histograms to write
/// * `output_path` - Path to output JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_histograms_json(
    data: &SampleHistograms,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing histograms to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let export = HistogramExport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        samples: data.clone(),
    };

    let file = File::create(output_path)
        .map_err(OutputError::WriteFailed)?;

    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(OutputError::SerializationFailed)?;

    writer.flush()
        .map_err(OutputError::WriteFailed)?;

    info!("Histograms written successfully ({} samples)", data.len());

    Ok(())
}

/// Read a histogram export back from disk
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_histograms_json(input_path: impl AsRef<Path>) -> Result<HistogramExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading histograms from: {}", input_path.display());

    let file = File::open(input_path)
        .map_err(OutputError::WriteFailed)?;

    let export: HistogramExport = serde_json::from_reader(file)
        .map_err(OutputError::SerializationFailed)?;

    debug!("Histograms loaded: version {}, {} samples",
           export.version,
           export.samples.len());

    Ok(export)
}

/// Validate an output path and create its parent directories
///
/// **Public** - shared by the JSON and HTML writers
pub fn prepare_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                )))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Histogram;
    use tempfile::NamedTempFile;

    fn create_test_data() -> SampleHistograms {
        let mut data = SampleHistograms::new();
        data.insert("s1".to_string(), [(100, 5), (150, 3)].into_iter().collect::<Histogram>());
        data
    }

    #[test]
    fn test_write_and_read_histograms() {
        let data = create_test_data();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_histograms_json(&data, path).unwrap();
        let loaded = read_histograms_json(path).unwrap();

        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.samples, data);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_reports_flush_failure() {
        // /dev/full accepts open but fails every write with ENOSPC
        let result = write_histograms_json(&create_test_data(), "/dev/full");
        assert!(matches!(result, Err(OutputError::WriteFailed(_))));
    }

    #[test]
    fn test_prepare_output_path_empty() {
        let result = prepare_output_path(Path::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn test_prepare_output_path_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = prepare_output_path(temp_dir.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/data.json");

        write_histograms_json(&create_test_data(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
