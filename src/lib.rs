//! declutter - an interactive directory-organizing utility
//!
//! This library scans a working directory, classifies loose files by
//! extension into category folders bucketed by last-modified year (and
//! optionally month), prompts the operator for move/skip/delete decisions,
//! re-balances crowded year folders, and cleans up folders left empty.

pub mod cleanup;
pub mod cli;
pub mod config;
pub mod crowding;
pub mod destination;
pub mod file_category;
pub mod filer;
pub mod output;
pub mod scan;

pub use config::{ConfigError, ScanRules, Settings};
pub use destination::{OrganizeError, OrganizeResult};
pub use file_category::Category;
pub use filer::{Decision, InteractiveFiler};
pub use scan::FileEntry;

pub use cli::{resolve_root, run, run_with_input};
