//! Parser for deepTools `bamPEFragmentSize --outRawFragmentLengths` output.
//!
//! The file is tab separated:
//!
//! ```text
//! #bamPEFragmentSize
//! Size    Occurrences    Sample
//! 100     5              /data/sampleA.bam
//! ```
//!
//! Only the first three columns are read. Malformed rows are skipped with
//! a warning rather than failing the whole file.

use super::schema::{Histogram, ParsedFile};
use crate::host::SampleNameCleaner;
use crate::utils::config::{COLUMN_HEADER_MARKER, HEADER_MARKER};
use log::{debug, warn};
use std::path::Path;
use thiserror::Error;

/// One data row of the raw lengths table
#[derive(Debug, Clone, PartialEq, Eq)]
struct FragmentRow<'a> {
    size: u64,
    count: u64,
    raw_name: &'a str,
}

/// Why a row was not turned into a data point
#[derive(Error, Debug, Clone, PartialEq, Eq)]
enum RowError {
    #[error("expected at least 3 columns, found {0}")]
    TooFewColumns(usize),

    #[error("invalid fragment size '{0}'")]
    InvalidSize(String),

    #[error("invalid occurrence count '{0}'")]
    InvalidCount(String),
}

/// Parse the content of one bamPEFragmentSize raw lengths file
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `content` - Full text of the log file
/// * `root` - Directory context of the file, handed to the name cleaner
/// * `cleaner` - Turns the trailing path segment of column 3 into a sample name
///
/// # Returns
/// Histograms for the samples in this file plus the number of skipped rows.
///
/// A sample's histogram is restarted whenever its name differs from the
/// previous data row's, so a sample that reappears after another one in the
/// same file keeps only its last run of rows.
pub fn parse_fragment_size_file<C>(content: &str, root: &Path, cleaner: &C) -> ParsedFile
where
    C: SampleNameCleaner + ?Sized,
{
    let mut parsed = ParsedFile::default();
    let mut last_sample: Option<String> = None;

    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split('\t').collect();
        if cols[0] == HEADER_MARKER || cols[0] == COLUMN_HEADER_MARKER {
            continue;
        }

        let row = match parse_row(&cols) {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping line {} of bamPEFragmentSize file: {}", index + 1, e);
                parsed.skipped_rows += 1;
                continue;
            }
        };

        let s_name = cleaner.clean_sample_name(sample_segment(row.raw_name), root);

        if last_sample.as_deref() != Some(s_name.as_str()) {
            debug!("Starting histogram for sample '{}' at line {}", s_name, index + 1);
            parsed.samples.insert(s_name.clone(), Histogram::new());
            last_sample = Some(s_name.clone());
        }

        parsed
            .samples
            .entry(s_name)
            .or_default()
            .insert(row.size, row.count);
    }

    debug!(
        "Parsed {} samples ({} rows skipped)",
        parsed.samples.len(),
        parsed.skipped_rows
    );

    parsed
}

/// Split a data row into its typed columns
///
/// **Private** - internal helper for parse_fragment_size_file
fn parse_row<'a>(cols: &[&'a str]) -> Result<FragmentRow<'a>, RowError> {
    if cols.len() < 3 {
        return Err(RowError::TooFewColumns(cols.len()));
    }

    let size = cols[0]
        .trim()
        .parse::<u64>()
        .map_err(|_| RowError::InvalidSize(cols[0].to_string()))?;
    let count = cols[1]
        .trim()
        .parse::<u64>()
        .map_err(|_| RowError::InvalidCount(cols[1].to_string()))?;

    Ok(FragmentRow {
        size,
        count,
        raw_name: cols[2],
    })
}

/// Trailing path segment of the sample column
///
/// **Private** - internal helper for parse_fragment_size_file
fn sample_segment(raw: &str) -> &str {
    let raw = raw.trim_end();
    raw.rsplit('/').next().unwrap_or(raw)
}
