/// Destination planning and file-moving mechanics.
///
/// Computes where a file belongs (`<label>/<label> <year>`, month subfolder
/// when requested, `Large_Files/<year>` for oversized files), creates that
/// directory up front, and moves files in without ever overwriting an
/// existing name.
use chrono::{DateTime, Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_category::Category;
use crate::scan::FileEntry;

/// Files above this size route to `Large_Files/<year>` regardless of the
/// assigned category.
pub const LARGE_FILE_BYTES: u64 = 150_000_000;

/// English month names, indexed by `month - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Name for a one-based month number.
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`.
pub fn month_name(month: u32) -> &'static str {
    debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
    MONTH_NAMES[(month - 1) as usize]
}

/// Errors that can occur while planning destinations or moving files.
#[derive(Debug)]
pub enum OrganizeError {
    /// Failed to create a destination directory.
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its destination.
    FileMoveFailure {
        source: PathBuf,
        destination: PathBuf,
        source_error: std::io::Error,
    },
    /// Failed to read an operator answer.
    PromptFailed { source: std::io::Error },
    /// Failed to read directory contents during a scan.
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for OrganizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DirectoryCreationFailed { path, source } => {
                write!(
                    f,
                    "Failed to create directory {}: {}",
                    path.display(),
                    source
                )
            }
            Self::FileMoveFailure {
                source,
                destination,
                source_error,
            } => {
                write!(
                    f,
                    "Failed to move {} to {}: {}",
                    source.display(),
                    destination.display(),
                    source_error
                )
            }
            Self::PromptFailed { source } => {
                write!(f, "Failed to read operator input: {}", source)
            }
            Self::ScanFailed { path, source } => {
                write!(f, "Failed to scan {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for OrganizeError {}

/// Result type for filing operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// Computes and creates the destination directory for an entry.
///
/// The label is usually a category directory name, but extra-folder
/// relocation may pass any operator-supplied name. Oversized entries ignore
/// the label's year-folder grammar and go to `Large_Files/<year>` instead.
/// With `month_mode`, a `<label> <month-number> (<month-name>) <year>`
/// subfolder is appended.
///
/// The directory is created (idempotently) before returning, so the caller
/// can always attempt a move immediately after planning.
pub fn plan(
    root: &Path,
    entry: &FileEntry,
    label: &str,
    month_mode: bool,
) -> OrganizeResult<PathBuf> {
    let year = entry.modified.year();

    let mut target = if entry.size > LARGE_FILE_BYTES {
        root.join(Category::LargeFiles.dir_name()).join(year.to_string())
    } else {
        root.join(label).join(format!("{} {}", label, year))
    };

    if month_mode {
        let month = entry.modified.month();
        target = target.join(format!(
            "{} {} ({}) {}",
            label,
            month,
            month_name(month),
            year
        ));
    }

    fs::create_dir_all(&target).map_err(|e| OrganizeError::DirectoryCreationFailed {
        path: target.clone(),
        source: e,
    })?;

    Ok(target)
}

/// Moves a file (or folder) into a destination directory under its own name.
///
/// If the destination already holds an entry of the same name, the incoming
/// one is renamed to `<stem> <month-name> <day> (<unix-seconds>) COPY<.ext>`
/// and moved under that name instead; the existing entry is never touched.
/// Returns the path the entry ended up at.
pub fn move_into(source: &Path, dest_dir: &Path) -> OrganizeResult<PathBuf> {
    let file_name = source
        .file_name()
        .ok_or_else(|| OrganizeError::FileMoveFailure {
            source: source.to_path_buf(),
            destination: dest_dir.to_path_buf(),
            source_error: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "entry has no name component",
            ),
        })?;

    let mut destination = dest_dir.join(file_name);

    if destination.exists() {
        // The candidate name embeds a seconds timestamp, so two collisions
        // for the same name within one second would pick the same candidate;
        // bump the stamp until the name is actually free.
        let now = Local::now();
        let mut stamp = now.timestamp();
        let renamed = loop {
            let candidate = disambiguated_name(source, &now, stamp);
            if !dest_dir.join(&candidate).exists() {
                break candidate;
            }
            stamp += 1;
        };
        destination = dest_dir.join(&renamed);
        crate::output::OutputFormatter::warning(&format!(
            "Renamed '{}' to '{}'.",
            source.display(),
            renamed
        ));
    }

    fs::rename(source, &destination).map_err(|e| OrganizeError::FileMoveFailure {
        source: source.to_path_buf(),
        destination: destination.clone(),
        source_error: e,
    })?;

    Ok(destination)
}

/// Builds a candidate replacement name from the file's stem, the given
/// month name and day, and a timestamp value.
fn disambiguated_name(source: &Path, now: &DateTime<Local>, stamp: i64) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let suffix = source
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    format!(
        "{} {} {} ({}) COPY{}",
        stem,
        month_name(now.month()),
        now.day(),
        stamp,
        suffix
    )
}
