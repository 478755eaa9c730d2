//! Default sample name cleaning.
//!
//! Raw names are truncated at the first occurrence of each configured
//! extension, in order. Optionally the file's root directories are
//! prepended so identically named files in different folders stay apart.

use super::SampleNameCleaner;
use crate::utils::config::{DEFAULT_CLEAN_EXTENSIONS, DIR_NAME_SEPARATOR};
use log::debug;
use std::path::{Component, Path};

/// Configurable sample name cleaner
#[derive(Debug, Clone)]
pub struct NameCleaner {
    pub extensions: Vec<String>,
    pub prepend_dirs: bool,
}

impl Default for NameCleaner {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_CLEAN_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            prepend_dirs: false,
        }
    }
}

impl NameCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prepend_dirs(mut self, prepend_dirs: bool) -> Self {
        self.prepend_dirs = prepend_dirs;
        self
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Truncate `raw` at every configured extension
    fn strip_extensions<'a>(&self, raw: &'a str) -> &'a str {
        let mut name = raw;
        for ext in &self.extensions {
            if ext.is_empty() {
                continue;
            }
            if let Some(pos) = name.find(ext.as_str()) {
                name = &name[..pos];
            }
        }
        name
    }
}

impl SampleNameCleaner for NameCleaner {
    fn clean_sample_name(&self, raw: &str, root: &Path) -> String {
        let stripped = self.strip_extensions(raw).trim();
        // Keep the raw name rather than producing an empty sample
        let mut name = if stripped.is_empty() {
            raw.trim().to_string()
        } else {
            stripped.to_string()
        };

        if self.prepend_dirs {
            let dirs: Vec<String> = root
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect();
            if !dirs.is_empty() {
                name = format!("{}{}{}", dirs.join(DIR_NAME_SEPARATOR), DIR_NAME_SEPARATOR, name);
            }
        }

        if name != raw {
            debug!("Cleaned sample name '{}' -> '{}'", raw, name);
        }
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bam_extension() {
        let cleaner = NameCleaner::new();
        assert_eq!(cleaner.clean_sample_name("sampleA.bam", Path::new("")), "sampleA");
        assert_eq!(
            cleaner.clean_sample_name("sampleB.sorted.dedup.bam", Path::new("")),
            "sampleB"
        );
    }

    #[test]
    fn test_keeps_raw_when_fully_stripped() {
        let cleaner = NameCleaner::new();
        assert_eq!(cleaner.clean_sample_name(".bam", Path::new("")), ".bam");
    }

    #[test]
    fn test_prepend_dirs() {
        let cleaner = NameCleaner::new().with_prepend_dirs(true);
        assert_eq!(
            cleaner.clean_sample_name("s1.bam", Path::new("run1/lane2")),
            "run1 | lane2 | s1"
        );
        assert_eq!(cleaner.clean_sample_name("s1.bam", Path::new("")), "s1");
    }

    #[test]
    fn test_custom_extensions() {
        let cleaner = NameCleaner::new().with_extensions(["_R1"]);
        assert_eq!(cleaner.clean_sample_name("s1_R1.bam", Path::new("")), "s1");
    }
}
