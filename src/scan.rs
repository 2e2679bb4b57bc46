//! Top-level file discovery and per-category grouping.
//!
//! The scan only looks at the root itself, never into subdirectories, and
//! only at names carrying an extension. Files already filed into category
//! folders are therefore never re-matched on a later run.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::ScanRules;
use crate::destination::{OrganizeError, OrganizeResult};
use crate::file_category::Category;

/// A filesystem entry queued for filing.
///
/// Ephemeral: discovered at scan time, consumed once moved, deleted, or
/// skipped.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// The entry's file name.
    pub name: String,
    /// The full path to the entry.
    pub path: PathBuf,
    /// Last-modified timestamp, local time.
    pub modified: DateTime<Local>,
    /// Size in bytes.
    pub size: u64,
}

impl FileEntry {
    /// Builds an entry from filesystem metadata.
    pub fn from_path(path: &Path) -> OrganizeResult<Self> {
        let metadata = fs::metadata(path).map_err(|e| OrganizeError::ScanFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        let modified = metadata
            .modified()
            .map_err(|e| OrganizeError::ScanFailed {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(Self {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            path: path.to_path_buf(),
            modified: DateTime::<Local>::from(modified),
            size: metadata.len(),
        })
    }
}

/// Collects the top-level files of `root` that are candidates for filing.
///
/// A candidate is a regular file whose name contains a `.`, passes the scan
/// rules, and is not the running executable itself. Results are sorted by
/// name so prompt order is deterministic.
pub fn scan_directory(root: &Path, rules: &ScanRules) -> OrganizeResult<Vec<FileEntry>> {
    let own_name = std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()));

    let entries = fs::read_dir(root).map_err(|e| OrganizeError::ScanFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if !name.contains('.') {
            continue;
        }
        if !rules.should_include(&name) {
            continue;
        }
        if own_name.as_deref() == Some(name.as_str()) {
            continue;
        }

        found.push(FileEntry::from_path(&entry.path())?);
    }

    found.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(found)
}

/// Partitions entries into per-category batches, preserving the category
/// declaration order. Every entry lands in exactly one batch.
pub fn group_by_category(entries: Vec<FileEntry>) -> Vec<(Category, Vec<FileEntry>)> {
    let mut groups: Vec<(Category, Vec<FileEntry>)> = Category::ALL
        .into_iter()
        .map(|category| (category, Vec::new()))
        .collect();

    for entry in entries {
        let category = Category::classify(&entry.name);
        if let Some((_, batch)) = groups.iter_mut().find(|(c, _)| *c == category) {
            batch.push(entry);
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_only_picks_dotted_files() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        fs::write(root.join("photo.jpg"), "x").unwrap();
        fs::write(root.join("README"), "x").unwrap();
        fs::create_dir(root.join("media")).unwrap();
        fs::create_dir(root.join("archive.old")).unwrap();

        let found = scan_directory(root, &ScanRules::default()).unwrap();
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["photo.jpg"]);
    }

    #[test]
    fn test_scan_applies_exclusions_and_hidden_filter() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        fs::write(root.join("desktop.ini"), "x").unwrap();
        fs::write(root.join(".hidden.txt"), "x").unwrap();
        fs::write(root.join("kept.txt"), "x").unwrap();

        let found = scan_directory(root, &ScanRules::default()).unwrap();
        let names: Vec<_> = found.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["kept.txt"]);
    }

    #[test]
    fn test_scan_does_not_descend() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();

        fs::create_dir_all(root.join("media").join("media 2023")).unwrap();
        fs::write(root.join("media").join("media 2023").join("a.jpg"), "x").unwrap();

        let found = scan_directory(root, &ScanRules::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_file_entry_from_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("note.txt");
        fs::write(&path, "hello").unwrap();

        let entry = FileEntry::from_path(&path).unwrap();
        assert_eq!(entry.name, "note.txt");
        assert_eq!(entry.size, 5);
    }

    #[test]
    fn test_group_by_category_keeps_declaration_order() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path();
        for name in ["c.unknownext", "b.py", "a.jpg"] {
            fs::write(root.join(name), "x").unwrap();
        }

        let found = scan_directory(root, &ScanRules::default()).unwrap();
        let groups = group_by_category(found);

        let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(order, Category::ALL.to_vec());

        let non_empty: Vec<_> = groups
            .iter()
            .filter(|(_, batch)| !batch.is_empty())
            .map(|(c, batch)| (*c, batch.len()))
            .collect();
        assert_eq!(
            non_empty,
            vec![
                (Category::Media, 1),
                (Category::Programming, 1),
                (Category::Misc, 1)
            ]
        );
    }
}
