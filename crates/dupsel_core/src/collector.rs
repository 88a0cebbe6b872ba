use ignore::WalkBuilder;
use log::{debug, trace};
use std::path::PathBuf;

use crate::{
    constants::{DEPENDENCY_DIR, SCSS_EXTENSION},
    error::DiscoveryError,
};

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Directory names skipped wherever they appear, in addition to the dependency directory
    pub exclude_dirs: Vec<String>,
    pub respect_gitignore: bool,
}

impl CollectorConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude_dirs: vec![DEPENDENCY_DIR.to_string()],
            respect_gitignore: false,
        }
    }
}

/// Lists the stylesheet sources under the root as root-relative paths, sorted.
pub fn collect_stylesheets(cfg: &CollectorConfig) -> Result<Vec<PathBuf>, DiscoveryError> {
    debug!("Collecting stylesheets");
    let root = &cfg.root;
    if !root.is_dir() {
        return Err(DiscoveryError::MissingRoot(root.clone()));
    }

    debug!("Walking directory tree from root: {}", root.display());
    let mut exclude = cfg.exclude_dirs.clone();
    if !exclude.iter().any(|d| d == DEPENDENCY_DIR) {
        exclude.push(DEPENDENCY_DIR.to_string());
    }
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .parents(cfg.respect_gitignore)
        .ignore(cfg.respect_gitignore)
        .git_ignore(cfg.respect_gitignore)
        .git_global(cfg.respect_gitignore)
        .git_exclude(cfg.respect_gitignore)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            !(is_dir && entry.depth() > 0 && exclude.iter().any(|d| entry.file_name() == d.as_str()))
        })
        .build();

    let mut files: Vec<PathBuf> = Vec::new();
    for res in walker {
        let dent = res?;
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if p.extension().and_then(|e| e.to_str()) == Some(SCSS_EXTENSION) {
            let rel = p.strip_prefix(root).unwrap_or(p).to_path_buf();
            trace!("Found stylesheet: {}", rel.display());
            files.push(rel);
        }
    }

    files.sort();
    debug!("Collected {} stylesheets", files.len());
    Ok(files)
}
