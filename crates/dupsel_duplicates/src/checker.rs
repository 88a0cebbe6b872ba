use anyhow::{Context, Result};
use dupsel_core::{
    CollectorConfig, Compiler, GrassCompiler, SelectorExtractor, collect_stylesheets, imports_for,
};
use log::{debug, info, trace, warn};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    config::Config,
    direct::direct_selectors,
    duplicates::find_duplicates,
    types::{CheckResult, FileOutcome, FileRecord},
};

pub fn run_duplicate_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting duplicate selector check");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    let collector_cfg = CollectorConfig {
        root: root.clone(),
        exclude_dirs: cfg.exclude.clone(),
        respect_gitignore: cfg.gitignore,
    };
    debug!("Excluding directories: {:?}", collector_cfg.exclude_dirs);

    let files = collect_stylesheets(&collector_cfg)?;
    if files.is_empty() {
        warn!("No stylesheets found under {}", root.display());
    }
    info!("Found {} stylesheets", files.len());

    let compiler = GrassCompiler::new(&root).with_load_paths(&cfg.load_paths);
    let extractor = SelectorExtractor::new(cfg.include_nested);

    scan_files(&root, &files, &compiler, &extractor)
}

/// Analyzes `files` (relative to `root`) one after another and finds their shared selectors.
///
/// Files that fail to compile are recorded as skipped; an unreadable file aborts the scan.
pub fn scan_files<C: Compiler + ?Sized>(
    root: &Path,
    files: &[PathBuf],
    compiler: &C,
    extractor: &SelectorExtractor,
) -> Result<CheckResult> {
    let mut result = CheckResult::default();

    for path in files {
        match analyze_file(root, path, compiler, extractor)? {
            FileOutcome::Analyzed(record) => result.files.push(record),
            FileOutcome::Skipped(skipped) => result.skipped.push(skipped),
        }
    }

    result.duplicates = find_duplicates(&result.files);
    info!(
        "Duplicate check complete. {} duplicated selectors across {} files ({} skipped)",
        result.duplicates.len(),
        result.files.len(),
        result.skipped.len()
    );
    Ok(result)
}

/// Reads, parses and compiles a single stylesheet.
///
/// # Errors
/// Only I/O failures reading the source are errors; compile failures become
/// [`FileOutcome::Skipped`].
pub fn analyze_file<C: Compiler + ?Sized>(
    root: &Path,
    path: &Path,
    compiler: &C,
    extractor: &SelectorExtractor,
) -> Result<FileOutcome> {
    debug!("Analyzing {}", path.display());
    let bytes =
        fs::read(root.join(path)).with_context(|| format!("Failed to read {}", path.display()))?;
    let source = String::from_utf8_lossy(&bytes);

    let raw_imports = imports_for(&source);
    trace!("{} imports {:?}", path.display(), raw_imports);

    match direct_selectors(path, &raw_imports, compiler, extractor) {
        Ok(direct_selectors) => Ok(FileOutcome::Analyzed(FileRecord {
            path: path.to_path_buf(),
            raw_imports,
            direct_selectors,
        })),
        Err(e) => {
            warn!("Skipping {}: {}", path.display(), e);
            Ok(FileOutcome::Skipped(e.into()))
        }
    }
}
