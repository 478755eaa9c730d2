//! Aggregation of parsed logs into a merged per-sample collection.
//!
//! This module:
//! - Runs the parser over every discovered log file
//! - Merges samples across files (later files win)
//! - Registers the fragment size line chart with the report host

pub mod fragment_size;

// Re-export main types and functions
pub use fragment_size::{fragment_size_plot_config, FragmentSizeModule};
