//! The interactive filing loop.
//!
//! Walks a batch of entries, plans each destination, and asks the operator
//! what to do. Answers are modeled as an explicit `Decision` rather than raw
//! token strings; only `MoveAll` survives from one file to the next.

use std::fs;
use std::io::BufRead;
use std::path::Path;

use crate::destination::{self, OrganizeError, OrganizeResult};
use crate::file_category::Category;
use crate::output::Prompter;
use crate::scan::FileEntry;

/// The operator's answer for a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Leave the file where it is.
    Skip,
    /// Move this file only; the next file is prompted again.
    MoveOne,
    /// Move this file and every remaining file in the batch.
    MoveAll,
    /// Park the file in the `delete_me` holding folder.
    Delete,
}

impl Decision {
    /// Parses a raw answer token. Tokens are literal, matching the
    /// original prompts exactly; anything else is invalid and re-prompted.
    pub fn parse(token: &str) -> Option<Decision> {
        match token {
            "y" | "yes" => Some(Decision::MoveOne),
            "n" | "no" => Some(Decision::Skip),
            "a" | "all" => Some(Decision::MoveAll),
            "d" | "del" => Some(Decision::Delete),
            _ => None,
        }
    }
}

/// Files batches of entries under a root, one prompt at a time.
pub struct InteractiveFiler<'a, R> {
    root: &'a Path,
    prompter: &'a mut Prompter<R>,
}

impl<'a, R: BufRead> InteractiveFiler<'a, R> {
    pub fn new(root: &'a Path, prompter: &'a mut Prompter<R>) -> Self {
        Self { root, prompter }
    }

    /// Processes one batch of entries destined for `label`.
    ///
    /// Each entry's destination directory is planned (and created) before
    /// the prompt, so an accepted move can never fail on a missing folder.
    /// Returns the number of entries actually moved (deletes are holds, not
    /// moves, and do not count).
    pub fn file_batch(
        &mut self,
        entries: &[FileEntry],
        label: &str,
        month_mode: bool,
    ) -> OrganizeResult<usize> {
        let mut standing: Option<Decision> = None;
        let mut moved = 0;

        for entry in entries {
            let dest_dir = destination::plan(self.root, entry, label, month_mode)?;

            let decision = match standing {
                Some(decision) => decision,
                None => self.prompt_decision(entry, &dest_dir)?,
            };

            match decision {
                Decision::Skip => {}
                Decision::MoveOne => {
                    destination::move_into(&entry.path, &dest_dir)?;
                    moved += 1;
                }
                Decision::MoveAll => {
                    standing = Some(Decision::MoveAll);
                    destination::move_into(&entry.path, &dest_dir)?;
                    moved += 1;
                }
                Decision::Delete => {
                    let hold = self.root.join(Category::DeleteMe.dir_name());
                    fs::create_dir_all(&hold).map_err(|e| {
                        OrganizeError::DirectoryCreationFailed {
                            path: hold.clone(),
                            source: e,
                        }
                    })?;
                    destination::move_into(&entry.path, &hold)?;
                }
            }
        }

        Ok(moved)
    }

    /// Asks until the operator produces a valid token. Invalid input never
    /// advances the loop; a closed input stream is an error.
    fn prompt_decision(&mut self, entry: &FileEntry, dest_dir: &Path) -> OrganizeResult<Decision> {
        let question = format!(
            "mv '{}' '{}'\n(y)es/(n)o/yes_to_(a)ll/(d)el?",
            entry.path.display(),
            dest_dir.join(&entry.name).display()
        );

        loop {
            let answer = self
                .prompter
                .ask(&question)
                .map_err(|e| OrganizeError::PromptFailed { source: e })?;
            if let Some(decision) = Decision::parse(&answer) {
                return Ok(decision);
            }
        }
    }
}
