use dupsel_core::CompileError;
use serde::Serialize;
use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

/// Selector -> every file that defines it directly. Only selectors owned by two or more files appear.
pub type SelectorOccurrenceMap = BTreeMap<String, BTreeSet<PathBuf>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Relative to the project root
    pub path: PathBuf,
    /// `@import` specifiers as authored
    pub raw_imports: Vec<String>,
    pub direct_selectors: BTreeSet<String>,
}

/// A file left out of the analysis because it did not compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

impl From<CompileError> for SkippedFile {
    fn from(err: CompileError) -> Self {
        Self { path: err.path, reason: err.message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Analyzed(FileRecord),
    Skipped(SkippedFile),
}

#[derive(Debug, Clone, Default)]
pub struct CheckResult {
    pub files: Vec<FileRecord>,
    pub skipped: Vec<SkippedFile>,
    pub duplicates: SelectorOccurrenceMap,
}

impl CheckResult {
    pub fn files_analyzed(&self) -> usize {
        self.files.len()
    }
}
