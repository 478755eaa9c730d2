//! Output writers for parsed data and reports.
//!
//! This module handles writing data to disk in various formats:
//! - JSON histogram exports
//! - HTML reports with inline SVG charts

pub mod html;
pub mod json;

// Re-export main functions
pub use html::{DataSource, HtmlReport};
pub use json::{read_histograms_json, write_histograms_json};
