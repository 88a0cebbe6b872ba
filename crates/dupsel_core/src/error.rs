use std::path::PathBuf;
use thiserror::Error;

/// A stylesheet could not be turned into CSS (syntax error, missing import target, unreadable file).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to compile {}: {}", .path.display(), .message)]
pub struct CompileError {
    pub path: PathBuf,
    pub message: String,
}

/// Errors raised while enumerating stylesheet sources.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Root directory does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Failed to walk directory tree: {0}")]
    Walk(#[from] ignore::Error),
}
