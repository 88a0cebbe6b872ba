use std::path::{Path, PathBuf};

use crate::resolver::resolve;

/// An `@import` specifier as authored, paired with its root-relative resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    pub raw: String,
    pub resolved_path: PathBuf,
}

impl ImportSpecifier {
    pub fn resolve(raw: impl Into<String>, from_file: &Path) -> Self {
        let raw = raw.into();
        let resolved_path = resolve(&raw, from_file);
        Self { raw, resolved_path }
    }
}
