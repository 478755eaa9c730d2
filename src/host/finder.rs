//! Filesystem log discovery.
//!
//! Walks the search paths recursively and keeps files whose first line
//! starts with the marker registered for the requested category.

use super::{LogFile, LogFinder};
use crate::utils::config::{DEFAULT_MAX_FILE_SIZE, SEARCH_PATTERNS};
use crate::utils::error::DiscoveryError;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Recursive filesystem log finder
#[derive(Debug, Clone)]
pub struct FsLogFinder {
    pub search_paths: Vec<PathBuf>,
    pub max_file_size: u64,
}

impl FsLogFinder {
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    /// Check a single file and read it if it matches
    ///
    /// **Private** - internal helper for find_log_files
    fn match_file(&self, path: &Path, base: &Path, marker: &str) -> Option<LogFile> {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };
        if size > self.max_file_size {
            warn!(
                "Skipping {} ({} bytes exceeds limit of {} bytes)",
                path.display(),
                size,
                self.max_file_size
            );
            return None;
        }

        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Skipping unreadable file {}: {}", path.display(), e);
                return None;
            }
        };
        let Ok(content) = String::from_utf8(bytes) else {
            debug!("Skipping non UTF-8 file: {}", path.display());
            return None;
        };

        let first_line = content.lines().next().unwrap_or("");
        if !first_line.starts_with(marker) {
            return None;
        }

        let fn_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let root = path
            .parent()
            .and_then(|p| p.strip_prefix(base).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        debug!("Matched log file: {}", path.display());
        Some(LogFile {
            fn_name,
            root,
            content,
        })
    }
}

impl LogFinder for FsLogFinder {
    fn find_log_files(&self, category: &str) -> Result<Vec<LogFile>, DiscoveryError> {
        let marker = SEARCH_PATTERNS
            .iter()
            .find(|(tag, _)| *tag == category)
            .map(|(_, marker)| *marker)
            .ok_or_else(|| DiscoveryError::UnknownCategory(category.to_string()))?;

        let mut found = Vec::new();
        for search_path in &self.search_paths {
            if !search_path.exists() {
                return Err(DiscoveryError::MissingPath(search_path.clone()));
            }

            let mut files = Vec::new();
            collect_files(search_path, &mut files);
            files.sort();

            // A single file argument is its own base
            let base = if search_path.is_file() {
                search_path.parent().unwrap_or(search_path)
            } else {
                search_path.as_path()
            };

            for path in files {
                if let Some(log) = self.match_file(&path, base, marker) {
                    found.push(log);
                }
            }
        }

        info!("Found {} log files for {}", found.len(), category);
        Ok(found)
    }
}

/// Recursively gather regular files under `path`
///
/// Symlinked directories are not descended into. Entries that cannot be
/// listed are skipped with a warning.
///
/// **Private** - internal helper for find_log_files
fn collect_files(path: &Path, out: &mut Vec<PathBuf>) {
    if path.is_file() {
        out.push(path.to_path_buf());
        return;
    }

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Skipping unreadable directory {}: {}", path.display(), e);
            return;
        }
    };

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping entry in {}: {}", path.display(), e);
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                warn!("Skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        let entry_path = entry.path();
        if file_type.is_dir() {
            collect_files(&entry_path, out);
        } else if file_type.is_symlink() {
            // Linked files are read, linked directories could loop
            if entry_path.is_file() {
                out.push(entry_path);
            } else {
                debug!("Not following symlink: {}", entry_path.display());
            }
        } else if file_type.is_file() {
            out.push(entry_path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config::FRAGMENT_SIZE_CATEGORY;

    const LOG: &str = "#bamPEFragmentSize\nSize\tOccurrences\tSample\n100\t5\t/a/s1.bam\n";

    #[test]
    fn test_finds_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("run1")).unwrap();
        fs::write(dir.path().join("run1/frags.txt"), LOG).unwrap();
        fs::write(dir.path().join("other.txt"), "not a log\n").unwrap();

        let finder = FsLogFinder::new([dir.path()]);
        let found = finder.find_log_files(FRAGMENT_SIZE_CATEGORY).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fn_name, "frags.txt");
        assert_eq!(found[0].root, PathBuf::from("run1"));
        assert_eq!(found[0].content, LOG);
    }

    #[test]
    fn test_unknown_category() {
        let dir = tempfile::tempdir().unwrap();
        let finder = FsLogFinder::new([dir.path()]);
        let result = finder.find_log_files("nope/nothing");
        assert!(matches!(result, Err(DiscoveryError::UnknownCategory(_))));
    }

    #[test]
    fn test_missing_search_path() {
        let finder = FsLogFinder::new(["/definitely/not/here/fragsize"]);
        let result = finder.find_log_files(FRAGMENT_SIZE_CATEGORY);
        assert!(matches!(result, Err(DiscoveryError::MissingPath(_))));
    }

    #[test]
    fn test_oversized_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frags.txt"), LOG).unwrap();

        let finder = FsLogFinder::new([dir.path()]).with_max_file_size(4);
        let found = finder.find_log_files(FRAGMENT_SIZE_CATEGORY).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_single_file_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("frags.txt");
        fs::write(&file, LOG).unwrap();

        let finder = FsLogFinder::new([&file]);
        let found = finder.find_log_files(FRAGMENT_SIZE_CATEGORY).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].root, PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_cycle_not_followed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("run")).unwrap();
        fs::write(dir.path().join("run/a.txt"), LOG).unwrap();
        std::os::unix::fs::symlink("..", dir.path().join("run/up")).unwrap();

        let finder = FsLogFinder::new([dir.path()]);
        let found = finder.find_log_files(FRAGMENT_SIZE_CATEGORY).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].root, PathBuf::from("run"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let target = tempfile::tempdir().unwrap();
        fs::write(target.path().join("frags.txt"), LOG).unwrap();
        std::os::unix::fs::symlink(target.path().join("frags.txt"), dir.path().join("link.txt")).unwrap();

        let finder = FsLogFinder::new([dir.path()]);
        let found = finder.find_log_files(FRAGMENT_SIZE_CATEGORY).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].fn_name, "link.txt");
    }

    #[test]
    fn test_unreadable_file_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let finder = FsLogFinder::new([dir.path()]);

        let vanished = dir.path().join("gone.txt");
        assert!(finder.match_file(&vanished, dir.path(), "#bamPEFragmentSize").is_none());
    }

    #[test]
    fn test_unreadable_directory_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("frags.txt"), LOG).unwrap();

        let mut files = Vec::new();
        collect_files(&dir.path().join("gone"), &mut files);
        assert!(files.is_empty());

        collect_files(dir.path(), &mut files);
        assert_eq!(files.len(), 1);
    }
}
