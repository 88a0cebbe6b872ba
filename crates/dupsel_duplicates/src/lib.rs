//! Duplicate selector detection for SCSS projects.
//!
//! This crate compiles every stylesheet of a project, works out which selectors
//! each file defines itself (as opposed to selectors inlined from its imports) and
//! reports selectors that are defined directly in more than one file.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use dupsel_duplicates::{Config, run_duplicate_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     ..Config::default()
//! };
//!
//! let result = run_duplicate_check(cfg.clone())?;
//!
//! if !result.duplicates.is_empty() {
//!     let mut stdout = BufWriter::new(std::io::stdout());
//!     dupsel_duplicates::print_duplicates_report(
//!         &mut stdout,
//!         &result.duplicates,
//!         cfg.root.as_deref(),
//!     )?;
//!     stdout.flush()?;
//! }
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod direct;
mod duplicates;
mod reporter;
mod types;

// Re-export public API
pub use checker::{analyze_file, run_duplicate_check, scan_files};
pub use config::{Config, OutputFormat};
pub use direct::direct_selectors;
pub use duplicates::find_duplicates;
pub use reporter::{
    print_duplicates_report, print_json_report, print_no_duplicates_message, print_skipped_files,
};
pub use types::{CheckResult, FileOutcome, FileRecord, SelectorOccurrenceMap, SkippedFile};
