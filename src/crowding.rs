//! Crowding evaluation for populated year folders.
//!
//! After a filing pass, each category's year folders are inspected; when a
//! folder holds more files than the threshold, the operator is offered a
//! month-based re-sort of its top-level files.

use glob::glob;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::destination::{OrganizeError, OrganizeResult};

/// Year folders end in a space and four digits, e.g. `media 2023`. The
/// bare-year folders under `Large_Files` do not match and are never offered
/// for month sorting.
static YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \d{4}$").expect("valid year-suffix pattern"));

/// The measured contents of one year folder.
#[derive(Debug)]
pub struct FolderLoad {
    /// Files sitting directly in the year folder, still unsorted by month.
    pub top_level: Vec<PathBuf>,
    /// Files already filed into immediate subfolders.
    pub sorted: usize,
}

impl FolderLoad {
    /// A folder is crowded when it still has unsorted top-level files and
    /// its total count exceeds the threshold. Exactly the threshold is fine.
    pub fn is_crowded(&self, threshold: usize) -> bool {
        !self.top_level.is_empty() && self.top_level.len() + self.sorted > threshold
    }
}

fn glob_paths(pattern: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let pattern = pattern.to_string_lossy();
    let matches = glob(&pattern).map_err(|e| OrganizeError::ScanFailed {
        path: PathBuf::from(pattern.as_ref()),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()),
    })?;
    Ok(matches.filter_map(Result::ok).collect())
}

/// Finds the year folders of one category under the root.
pub fn year_folders(root: &Path, label: &str) -> OrganizeResult<Vec<PathBuf>> {
    let mut found: Vec<PathBuf> = glob_paths(&root.join(label).join("* ????"))?
        .into_iter()
        .filter(|path| {
            path.is_dir()
                && path
                    .file_name()
                    .map(|n| YEAR_SUFFIX.is_match(&n.to_string_lossy()))
                    .unwrap_or(false)
        })
        .collect();
    found.sort();
    Ok(found)
}

/// Counts a year folder's unsorted top-level files and the files already
/// sorted into its immediate subfolders.
pub fn folder_load(year_dir: &Path) -> OrganizeResult<FolderLoad> {
    let mut top_level: Vec<PathBuf> = glob_paths(&year_dir.join("*.*"))?
        .into_iter()
        .filter(|path| path.is_file())
        .collect();
    top_level.sort();

    let sorted = glob_paths(&year_dir.join("*").join("*.*"))?.len();

    Ok(FolderLoad { top_level, sorted })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_year_folders_match_label_year_names() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("media").join("media 2023")).unwrap();
        fs::create_dir_all(root.join("media").join("media 2021")).unwrap();
        fs::create_dir_all(root.join("media").join("media backup")).unwrap();
        fs::create_dir_all(root.join("media").join("notes abcd")).unwrap();
        fs::write(root.join("media").join("loose 2023"), "a file, not a dir").unwrap();

        let found = year_folders(root, "media").unwrap();
        assert_eq!(
            found,
            vec![
                root.join("media").join("media 2021"),
                root.join("media").join("media 2023"),
            ]
        );
    }

    #[test]
    fn test_large_files_bare_year_folders_are_skipped() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("Large_Files").join("2023")).unwrap();

        let found = year_folders(root, "Large_Files").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_folder_load_counts_top_level_and_sorted() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let year_dir = temp_dir.path().join("media 2023");
        let month_dir = year_dir.join("media 4 (April) 2023");
        fs::create_dir_all(&month_dir).unwrap();

        for i in 0..3 {
            fs::write(year_dir.join(format!("top{}.jpg", i)), "x").unwrap();
        }
        for i in 0..2 {
            fs::write(month_dir.join(format!("sorted{}.jpg", i)), "x").unwrap();
        }

        let load = folder_load(&year_dir).unwrap();
        assert_eq!(load.top_level.len(), 3);
        assert_eq!(load.sorted, 2);
    }

    #[test]
    fn test_crowded_boundary() {
        let make = |top: usize, sorted: usize| FolderLoad {
            top_level: (0..top).map(|i| PathBuf::from(format!("f{}.jpg", i))).collect(),
            sorted,
        };

        // Exactly the threshold is not crowded; one more is.
        assert!(!make(24, 0).is_crowded(24));
        assert!(make(25, 0).is_crowded(24));
        assert!(make(5, 20).is_crowded(24));
        assert!(!make(5, 19).is_crowded(24));
    }

    #[test]
    fn test_fully_sorted_folder_is_never_crowded() {
        let load = FolderLoad {
            top_level: Vec::new(),
            sorted: 100,
        };
        assert!(!load.is_crowded(24));
    }
}
