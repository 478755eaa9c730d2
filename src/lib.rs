//! Fragsize Report
//!
//! Parses deepTools `bamPEFragmentSize --outRawFragmentLengths` output into
//! per-sample fragment size histograms and renders them as a line chart
//! report section.
//!
//! This crate provides the core implementation for the
//! `fragsize` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! fragsize report ./results --output report.html --json fragsize.json
//! ```
//!
//! As a library, compose a [`aggregator::FragmentSizeModule`] with a
//! [`host::LogFinder`] and a [`host::ReportHost`]:
//!
//! ```ignore
//! let finder = FsLogFinder::new(["./results"]);
//! let mut report = HtmlReport::new();
//! let mut module = FragmentSizeModule::new(NameCleaner::new());
//! let samples = module.parse_all_logs(&finder, &mut report)?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod host;
pub mod output;
pub mod parser;
pub mod plot;
pub mod utils;
