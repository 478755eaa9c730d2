//! Interfaces to the surrounding report framework.
//!
//! The fragment size module only needs three things from its host:
//! - discovery of log files for a category tag
//! - sample name cleaning
//! - data source and section registration
//!
//! Default implementations for discovery and cleaning live in the
//! submodules; `output::HtmlReport` is the default report host.

pub mod cleaner;
pub mod finder;

use crate::plot::LinePlot;
use crate::utils::error::{DiscoveryError, ReportError};
use std::path::{Path, PathBuf};

pub use cleaner::NameCleaner;
pub use finder::FsLogFinder;

/// A discovered log file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    /// File name without directories
    pub fn_name: String,

    /// Directory of the file, relative to the search path it was found under
    pub root: PathBuf,

    /// Full text content
    pub content: String,
}

impl LogFile {
    pub fn new(fn_name: impl Into<String>, root: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            fn_name: fn_name.into(),
            root: root.into(),
            content: content.into(),
        }
    }

    /// Path of the file relative to its search path
    pub fn path(&self) -> PathBuf {
        self.root.join(&self.fn_name)
    }
}

/// A report section registered with the host
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub name: String,
    pub anchor: String,
    pub description: String,
    pub plot: LinePlot,
}

/// Finds log files belonging to a category
pub trait LogFinder {
    fn find_log_files(&self, category: &str) -> Result<Vec<LogFile>, DiscoveryError>;
}

/// Normalises a raw file-derived name into a sample name
pub trait SampleNameCleaner {
    fn clean_sample_name(&self, raw: &str, root: &Path) -> String;
}

impl<F> SampleNameCleaner for F
where
    F: Fn(&str, &Path) -> String,
{
    fn clean_sample_name(&self, raw: &str, root: &Path) -> String {
        self(raw, root)
    }
}

/// Receives provenance records and rendered sections
pub trait ReportHost {
    /// Record that `file` contributed data to `section`
    fn add_data_source(&mut self, file: &LogFile, section: &str);

    /// Register a visual report section
    fn add_section(&mut self, section: ReportSection) -> Result<(), ReportError>;
}

/// In-memory log source, useful for piping content from elsewhere
impl LogFinder for Vec<LogFile> {
    fn find_log_files(&self, _category: &str) -> Result<Vec<LogFile>, DiscoveryError> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_cleaner() {
        let upper = |raw: &str, _root: &Path| raw.to_uppercase();
        assert_eq!(upper.clean_sample_name("abc", Path::new("x")), "ABC");
    }

    #[test]
    fn test_log_file_path() {
        let file = LogFile::new("a.txt", "run1/lane2", "");
        assert_eq!(file.path(), PathBuf::from("run1/lane2/a.txt"));
    }

    #[test]
    fn test_vec_finder_returns_all() {
        let files = vec![LogFile::new("a", "", "x"), LogFile::new("b", "", "y")];
        let found = files.find_log_files("anything").unwrap();
        assert_eq!(found.len(), 2);
    }
}
