//! Run orchestration: working-directory resolution and the full pipeline.
//!
//! A run is: scan the root, file each category batch interactively, offer
//! month re-sorting for crowded year folders, offer relocation of extra
//! top-level folders, then sweep empty folders. All dialogs go through one
//! `Prompter`, so tests can script a whole run as a single input stream.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use crate::cleanup;
use crate::config::Settings;
use crate::crowding;
use crate::destination::OrganizeError;
use crate::filer::InteractiveFiler;
use crate::output::{OutputFormatter, Prompter};
use crate::scan::{self, FileEntry};

/// Resolves the directory to clean.
///
/// A leading `$` in the argument names an environment variable holding the
/// real path. When the resolved path is not a directory, the operator is
/// prompted once: Enter accepts the current directory, anything else is
/// taken (after `$` expansion) as the path to clean.
pub fn resolve_root<R: BufRead>(
    arg: Option<&Path>,
    prompter: &mut Prompter<R>,
) -> io::Result<PathBuf> {
    let raw = arg
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string());

    let expanded = expand_env(&raw)?;
    if Path::new(&expanded).is_dir() {
        return Ok(PathBuf::from(expanded));
    }

    OutputFormatter::warning("The path specified does not exist");
    let cwd = std::env::current_dir()?;
    let answer = prompter.ask(&format!(
        "Clean current directory ({})?\nPress Enter to continue or enter a new path to clean.",
        cwd.display()
    ))?;

    if answer.is_empty() {
        Ok(cwd)
    } else {
        Ok(PathBuf::from(expand_env(&answer)?))
    }
}

/// Expands a leading `$VAR` into the variable's value. An unset variable is
/// an error rather than a silent literal path.
fn expand_env(raw: &str) -> io::Result<String> {
    match raw.strip_prefix('$') {
        Some(var_name) => std::env::var(var_name).map_err(|_| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("environment variable '{}' is not set", var_name),
            )
        }),
        None => Ok(raw.to_string()),
    }
}

/// Runs the whole pipeline over `root` with prompts answered from `input`.
///
/// Convenience wrapper for tests and for `main`, which passes a locked
/// stdin.
pub fn run_with_input<R: BufRead>(
    root: &Path,
    settings: &Settings,
    input: R,
) -> Result<(), String> {
    let mut prompter = Prompter::new(input);
    run(root, settings, &mut prompter)
}

/// Runs the whole pipeline over `root`.
pub fn run<R: BufRead>(
    root: &Path,
    settings: &Settings,
    prompter: &mut Prompter<R>,
) -> Result<(), String> {
    OutputFormatter::info(&format!("Organizing contents of: {}", root.display()));

    let entries = scan::scan_directory(root, &settings.scan).map_err(|e| e.to_string())?;
    OutputFormatter::plain(&format!("({}) files/folders to move.\n", entries.len()));

    let groups = scan::group_by_category(entries);
    let mut moved = 0;

    for (category, batch) in groups {
        let label = category.dir_name();
        moved += InteractiveFiler::new(root, prompter)
            .file_batch(&batch, label, false)
            .map_err(|e| e.to_string())?;

        // Year folders from earlier runs count too, so crowding is checked
        // even when this run filed nothing into the category.
        moved += resort_crowded_years(root, label, settings.crowding_threshold, prompter)
            .map_err(|e| e.to_string())?;
    }

    cleanup::relocate_extras(root, prompter).map_err(|e| e.to_string())?;
    cleanup::remove_empty_category_dirs(root);

    OutputFormatter::success(&format!("Done. {} files filed.", moved));
    Ok(())
}

/// Offers month-based re-sorting for each crowded year folder of a
/// category, re-running the interactive filer over the folder's top-level
/// files when the operator accepts.
fn resort_crowded_years<R: BufRead>(
    root: &Path,
    label: &str,
    threshold: usize,
    prompter: &mut Prompter<R>,
) -> Result<usize, OrganizeError> {
    let mut moved = 0;

    for year_dir in crowding::year_folders(root, label)? {
        let load = crowding::folder_load(&year_dir)?;
        if !load.is_crowded(threshold) {
            continue;
        }

        let wanted = prompter
            .confirm(&format!(
                "{} has {} top-level files and {} already sorted files.  Sort by month (y/n)?",
                year_dir.display(),
                load.top_level.len(),
                load.sorted
            ))
            .map_err(|e| OrganizeError::PromptFailed { source: e })?;
        if !wanted {
            continue;
        }

        let entries = load
            .top_level
            .iter()
            .map(|path| FileEntry::from_path(path))
            .collect::<Result<Vec<_>, _>>()?;
        moved += InteractiveFiler::new(root, prompter).file_batch(&entries, label, true)?;
    }

    Ok(moved)
}
