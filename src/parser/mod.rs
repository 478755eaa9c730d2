//! Log parsing and data types.
//!
//! This module handles:
//! - Parsing bamPEFragmentSize raw fragment length tables
//! - Defining histogram types and the JSON export schema

pub mod fragment_size;
pub mod schema;

// Re-export main types
pub use fragment_size::parse_fragment_size_file;
pub use schema::{Histogram, HistogramExport, HistogramSummary, ParsedFile, SampleHistograms};
