//! Post-run cleanup: empty-folder removal and extra-folder relocation.

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::destination::{OrganizeError, OrganizeResult};
use crate::file_category::Category;
use crate::filer::InteractiveFiler;
use crate::output::{OutputFormatter, Prompter};
use crate::scan::FileEntry;

/// Removes every directory under `path` (and `path` itself) that is empty.
///
/// Children are visited before parents, so a chain of nested empty folders
/// collapses in one pass. Removal failures are expected — the directory
/// still has contents the tool does not own — and are only logged at debug
/// level.
pub fn remove_empty_dirs(path: &Path) {
    for entry in WalkDir::new(path)
        .contents_first(true)
        .into_iter()
        .filter_map(Result::ok)
    {
        if !entry.file_type().is_dir() {
            continue;
        }
        match fs::remove_dir(entry.path()) {
            Ok(()) => {
                OutputFormatter::plain(&format!(
                    "Removing empty folder ({}).",
                    entry.path().display()
                ));
            }
            Err(e) => {
                log::debug!("could not remove folder {}: {}", entry.path().display(), e);
            }
        }
    }
}

/// Sweeps every category directory for empty folders. All categories are
/// treated identically.
pub fn remove_empty_category_dirs(root: &Path) {
    for category in Category::ALL {
        remove_empty_dirs(&root.join(category.dir_name()));
    }
}

/// Finds top-level directories not produced by this tool: no extension
/// suffix, not hidden, and not a category directory.
pub fn extra_folders(root: &Path) -> OrganizeResult<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| OrganizeError::ScanFailed {
        path: root.to_path_buf(),
        source: e,
    })?;

    let mut extras = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        // Dotted names cover both suffixed folders and hidden ones.
        if name.contains('.') {
            continue;
        }
        if Category::from_dir_name(&name).is_some() {
            continue;
        }

        extras.push(entry.path());
    }

    extras.sort();
    Ok(extras)
}

/// Offers to relocate each extra folder into a category.
///
/// The destination answer is a category number from the printed list; any
/// other input is taken literally as the destination name, which may create
/// a brand-new top-level label. The folder is then filed like a single-entry
/// batch, landing in `<label>/<label> <year>` by its own modification time.
pub fn relocate_extras<R: BufRead>(
    root: &Path,
    prompter: &mut Prompter<R>,
) -> OrganizeResult<()> {
    let extras = extra_folders(root)?;
    if extras.is_empty() {
        return Ok(());
    }

    let listing = extras
        .iter()
        .filter_map(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let wanted = prompter
        .confirm(&format!(
            "{}\nExtra folders detected.  Move them (y/n)?",
            listing
        ))
        .map_err(|e| OrganizeError::PromptFailed { source: e })?;
    if !wanted {
        return Ok(());
    }

    for extra in extras {
        let confirmed = prompter
            .confirm(&format!("{}\nMove (y/n)?", extra.display()))
            .map_err(|e| OrganizeError::PromptFailed { source: e })?;
        if !confirmed {
            continue;
        }

        for (i, category) in Category::ALL.iter().enumerate() {
            OutputFormatter::plain(&format!("\n{}.) {}", i + 1, category.dir_name()));
        }

        let answer = prompter
            .ask(&format!("\nmv '{}' ???\nDestination?", extra.display()))
            .map_err(|e| OrganizeError::PromptFailed { source: e })?;

        let label = match answer.parse::<usize>() {
            Ok(n) if (1..=Category::ALL.len()).contains(&n) => {
                Category::ALL[n - 1].dir_name().to_string()
            }
            // Not a valid index: the literal input is the destination name.
            _ => answer,
        };

        let entry = FileEntry::from_path(&extra)?;
        InteractiveFiler::new(root, prompter).file_batch(&[entry], &label, false)?;
    }

    Ok(())
}
