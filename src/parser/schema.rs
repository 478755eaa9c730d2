//! Data types produced by the fragment size parser.
//!
//! Histograms are keyed by size so iteration (and JSON output) is ordered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fragment size (bp) -> number of fragments observed at that size
pub type Histogram = BTreeMap<u64, u64>;

/// Sample name -> fragment size histogram
pub type SampleHistograms = BTreeMap<String, Histogram>;

/// Result of parsing a single log file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// Histograms found in this file only
    pub samples: SampleHistograms,

    /// Data rows dropped because they were malformed
    pub skipped_rows: usize,
}

impl ParsedFile {
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// JSON export envelope for merged histograms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the export was generated
    pub generated_at: String,

    /// Merged per-sample histograms
    pub samples: SampleHistograms,
}

/// Summary numbers for one sample histogram
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramSummary {
    pub total_fragments: u64,
    pub min_size: u64,
    pub max_size: u64,
    pub mean_size: f64,
    pub modal_size: u64,
}

impl HistogramSummary {
    /// Summarise a histogram, `None` when it holds no fragments
    pub fn from_histogram(histogram: &Histogram) -> Option<Self> {
        let total_fragments = histogram.values().fold(0u64, |acc, c| acc.saturating_add(*c));
        if total_fragments == 0 {
            return None;
        }

        let min_size = *histogram.keys().next()?;
        let max_size = *histogram.keys().next_back()?;
        let weighted: f64 = histogram
            .iter()
            .map(|(size, count)| *size as f64 * *count as f64)
            .sum();
        // Ties resolve to the smallest size
        let modal_size = histogram
            .iter()
            .fold((0u64, 0u64), |best, (size, count)| {
                if *count > best.1 { (*size, *count) } else { best }
            })
            .0;

        Some(Self {
            total_fragments,
            min_size,
            max_size,
            mean_size: weighted / total_fragments as f64,
            modal_size,
        })
    }
}
