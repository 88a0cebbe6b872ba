use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use dupsel_core::DEPENDENCY_DIR;
use log::{debug, info};
use std::{env, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "duplicates")]
#[command(about = "Find CSS selectors defined directly in more than one stylesheet")]
pub struct Config {
    /// Root directory of the project (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Additional directory name to skip while discovering stylesheets (repeatable; node_modules is always skipped)
    #[arg(long = "exclude", value_name = "DIR", default_value = DEPENDENCY_DIR)]
    pub exclude: Vec<String>,

    /// Honour .gitignore rules while discovering stylesheets
    #[arg(long)]
    pub gitignore: bool,

    /// Also collect rules nested in @media, @supports, @layer and @container blocks
    #[arg(long)]
    pub include_nested: bool,

    /// Extra Sass load path, relative to the root (repeatable)
    #[arg(long = "load-path", value_name = "DIR")]
    pub load_paths: Vec<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: None,
            exclude: vec![DEPENDENCY_DIR.to_string()],
            gitignore: false,
            include_nested: false,
            load_paths: Vec::new(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Resolve the root directory, falling back to the current directory
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            r.canonicalize().unwrap_or(r)
        } else {
            debug!("No root provided, using current directory");
            env::current_dir()?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_defaults() {
        let cfg = Config::try_parse_from(["duplicates"]).unwrap();
        assert_eq!(cfg.root, None);
        assert_eq!(cfg.exclude, vec!["node_modules".to_string()]);
        assert!(!cfg.gitignore);
        assert!(!cfg.include_nested);
        assert!(cfg.load_paths.is_empty());
        assert_eq!(cfg.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_flags() {
        let cfg = Config::try_parse_from([
            "duplicates",
            "--root",
            "web",
            "--exclude",
            "dist",
            "--exclude",
            "vendor",
            "--gitignore",
            "--include-nested",
            "--load-path",
            "styles/vendor",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cfg.root, Some(PathBuf::from("web")));
        assert_eq!(cfg.exclude, vec!["dist".to_string(), "vendor".to_string()]);
        assert!(cfg.gitignore);
        assert!(cfg.include_nested);
        assert_eq!(cfg.load_paths, vec![PathBuf::from("styles/vendor")]);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_root_requires_initialize() {
        let cfg = Config::default();
        assert!(cfg.root().is_err());
    }

    #[test]
    fn test_initialize_with_explicit_root() {
        let temp_dir = TempDir::new().unwrap();
        let mut cfg = Config { root: Some(temp_dir.path().to_path_buf()), ..Config::default() };
        cfg.initialize().unwrap();
        assert_eq!(cfg.root().unwrap(), &temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_initialize_defaults_to_current_dir() {
        let mut cfg = Config::default();
        cfg.initialize().unwrap();
        assert_eq!(cfg.root().unwrap(), &env::current_dir().unwrap());
    }
}
