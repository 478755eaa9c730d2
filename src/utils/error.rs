//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering log files
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Unknown log category: {0}")]
    UnknownCategory(String),

    #[error("Search path does not exist: {}", .0.display())]
    MissingPath(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Errors that can occur while rendering a plot
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("No data to plot")]
    EmptyData,

    #[error("Invalid plot configuration: {0}")]
    InvalidConfig(String),
}

/// Errors raised by a report host when registering sections
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Duplicate section anchor: {0}")]
    DuplicateAnchor(String),

    #[error("Failed to render plot: {0}")]
    PlotFailed(#[from] PlotError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to render report: {0}")]
    RenderFailed(#[from] PlotError),
}

/// Errors surfaced by a module parse pass
#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Log discovery failed: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Section registration failed: {0}")]
    Report(#[from] ReportError),
}
