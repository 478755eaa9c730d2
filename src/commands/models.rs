use crate::utils::config::DEFAULT_MAX_FILE_SIZE;
use std::path::PathBuf;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Files or directories to search for logs
    pub search_paths: Vec<PathBuf>,

    /// Output path for the HTML report (optional)
    pub output_html: Option<PathBuf>,

    /// Output path for the JSON histogram export (optional)
    pub output_json: Option<PathBuf>,

    /// Prepend directory names to sample names
    pub prepend_dirs: bool,

    /// Skip files larger than this many bytes
    pub max_file_size: u64,

    /// Print a per-sample summary to stdout
    pub print_summary: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            search_paths: vec![PathBuf::from(".")],
            output_html: Some(PathBuf::from("fragsize_report.html")),
            output_json: None,
            prepend_dirs: false,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            print_summary: false,
        }
    }
}
