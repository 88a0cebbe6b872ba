//! Core utilities for dupsel tools.
//!
//! This crate provides the stylesheet plumbing shared by the analyses:
//! - Resolving SCSS `@import` specifiers to root-relative paths
//! - Parsing `@import` declarations out of raw SCSS
//! - Compiling SCSS to CSS (`grass`) behind the [`Compiler`] trait
//! - Extracting style rule selectors from compiled CSS
//! - Discovering stylesheet sources under a project root

mod collector;
mod compiler;
mod constants;
mod error;
mod parser;
mod resolver;
mod selectors;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_stylesheets};
pub use compiler::{Compiler, GrassCompiler};
pub use constants::DEPENDENCY_DIR;
pub use error::{CompileError, DiscoveryError};
pub use parser::imports_for;
pub use resolver::resolve;
pub use selectors::{SelectorExtractor, extract_selectors};
pub use types::ImportSpecifier;
