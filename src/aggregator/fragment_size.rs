//! Merge fragment size histograms across all discovered log files.
//!
//! A sample seen in a later file replaces the earlier histogram.
//! When anything was parsed, a single line chart section is registered.

use crate::host::{LogFinder, ReportHost, ReportSection, SampleNameCleaner};
use crate::parser::fragment_size::parse_fragment_size_file;
use crate::parser::schema::SampleHistograms;
use crate::plot::{plot, LineGraphConfig};
use crate::utils::config::{
    FRAGMENT_SIZE_CATEGORY, FRAGMENT_SIZE_SECTION, PLOT_ID, PLOT_SMOOTH_POINTS, PLOT_TITLE,
    PLOT_TT_LABEL, PLOT_XLAB, PLOT_XMAX, PLOT_YLAB, SECTION_ANCHOR, SECTION_DESCRIPTION,
    SECTION_NAME,
};
use crate::utils::error::ModuleError;
use log::{debug, info, warn};

/// Plot configuration for the fragment size distribution chart
pub fn fragment_size_plot_config() -> LineGraphConfig {
    LineGraphConfig::new(PLOT_ID)
        .with_title(PLOT_TITLE)
        .with_labels(PLOT_XLAB, PLOT_YLAB)
        .with_smooth_points(PLOT_SMOOTH_POINTS)
        .with_xmax(PLOT_XMAX)
        .with_x_decimals(false)
        .with_tt_label(PLOT_TT_LABEL)
}

/// bamPEFragmentSize distribution module
///
/// Owns the merged result collection for one parse pass.
#[derive(Debug)]
pub struct FragmentSizeModule<C> {
    cleaner: C,
    data: SampleHistograms,
    replaced: Vec<String>,
    skipped_rows: usize,
}

impl<C: SampleNameCleaner> FragmentSizeModule<C> {
    pub fn new(cleaner: C) -> Self {
        Self {
            cleaner,
            data: SampleHistograms::new(),
            replaced: Vec::new(),
            skipped_rows: 0,
        }
    }

    /// Parse every discovered log and register the report section
    ///
    /// **Public** - main entry point for a parse pass
    ///
    /// # Arguments
    /// * `finder` - Discovery collaborator, queried for the bamPEFragmentSize category
    /// * `host` - Receives data sources and the plot section
    ///
    /// # Returns
    /// Number of samples in the merged collection
    ///
    /// # Errors
    /// * `ModuleError::Discovery` - Log discovery failed
    /// * `ModuleError::Report` - The host rejected the section
    pub fn parse_all_logs<F, H>(&mut self, finder: &F, host: &mut H) -> Result<usize, ModuleError>
    where
        F: LogFinder + ?Sized,
        H: ReportHost + ?Sized,
    {
        self.data.clear();
        self.replaced.clear();
        self.skipped_rows = 0;

        for file in finder.find_log_files(FRAGMENT_SIZE_CATEGORY)? {
            debug!("Parsing {}", file.path().display());
            let parsed = parse_fragment_size_file(&file.content, &file.root, &self.cleaner);
            self.skipped_rows += parsed.skipped_rows;

            if parsed.is_empty() {
                continue;
            }

            for (s_name, histogram) in parsed.samples {
                if self.data.contains_key(&s_name) {
                    warn!("Replacing duplicate sample {}.", s_name);
                    self.replaced.push(s_name.clone());
                }
                self.data.insert(s_name, histogram);
            }
            host.add_data_source(&file, FRAGMENT_SIZE_SECTION);
        }

        if !self.data.is_empty() {
            host.add_section(ReportSection {
                name: SECTION_NAME.to_string(),
                anchor: SECTION_ANCHOR.to_string(),
                description: SECTION_DESCRIPTION.to_string(),
                plot: plot(&self.data, fragment_size_plot_config()),
            })?;
        }

        info!(
            "Found {} bamPEFragmentSize samples ({} duplicates replaced, {} rows skipped)",
            self.data.len(),
            self.replaced.len(),
            self.skipped_rows
        );

        Ok(self.data.len())
    }

    /// Merged histograms from the last parse pass
    pub fn data(&self) -> &SampleHistograms {
        &self.data
    }

    /// Sample names that replaced an earlier file's histogram, in order
    pub fn replaced_samples(&self) -> &[String] {
        &self.replaced
    }

    /// Malformed rows skipped across all files
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Hand the merged collection off to the caller
    pub fn into_data(self) -> SampleHistograms {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LogFile;
    use crate::utils::error::ReportError;
    use std::path::Path;

    #[derive(Default)]
    struct RecordingHost {
        sources: Vec<(String, String)>,
        sections: Vec<ReportSection>,
    }

    impl ReportHost for RecordingHost {
        fn add_data_source(&mut self, file: &LogFile, section: &str) {
            self.sources.push((file.fn_name.clone(), section.to_string()));
        }

        fn add_section(&mut self, section: ReportSection) -> Result<(), ReportError> {
            self.sections.push(section);
            Ok(())
        }
    }

    fn identity(name: &str, _root: &Path) -> String {
        name.to_string()
    }

    #[test]
    fn test_plot_config_fields() {
        let config = fragment_size_plot_config();
        assert_eq!(config.id, "fragment_size_distribution_plot");
        assert_eq!(config.smooth_points, Some(50));
        assert_eq!(config.xmax, Some(1000));
        assert!(!config.x_decimals);
    }

    #[test]
    fn test_header_only_file_adds_no_source() {
        let files = vec![LogFile::new("a.txt", "", "#bamPEFragmentSize\nSize\tOccurrences\tSample\n")];
        let mut host = RecordingHost::default();
        let mut module = FragmentSizeModule::new(identity);

        let count = module.parse_all_logs(&files, &mut host).unwrap();

        assert_eq!(count, 0);
        assert!(host.sources.is_empty());
        assert!(host.sections.is_empty());
    }

    #[test]
    fn test_rerun_resets_state() {
        let files = vec![LogFile::new("a.txt", "", "100\t1\tX\n")];
        let mut host = RecordingHost::default();
        let mut module = FragmentSizeModule::new(identity);

        module.parse_all_logs(&files, &mut host).unwrap();
        module.parse_all_logs(&files, &mut host).unwrap();

        assert!(module.replaced_samples().is_empty());
        assert_eq!(module.data().len(), 1);
    }
}
