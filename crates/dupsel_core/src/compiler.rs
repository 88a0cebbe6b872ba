use log::{debug, trace};
use std::{
    borrow::Cow,
    fs, io,
    path::{Component, Path, PathBuf},
};

use crate::{
    constants::{DEPENDENCY_DIR, PARTIALS_DIR, TILDE_PREFIX},
    error::CompileError,
};

/// Turns a stylesheet source file into final CSS with all of its imports inlined.
pub trait Compiler {
    /// Compiles the stylesheet at `path`, relative to the project root.
    fn compile(&self, path: &Path) -> Result<String, CompileError>;
}

/// Sass compiler backed by `grass`.
///
/// Load paths are the root, `<root>/styles`, `<root>/node_modules` and any extra
/// paths supplied by the caller. Imports written as `~pkg/...` are looked up under
/// `<root>/node_modules/pkg/...`.
#[derive(Debug)]
pub struct GrassCompiler {
    root: PathBuf,
    load_paths: Vec<PathBuf>,
    fs: PackageFs,
}

impl GrassCompiler {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let modules_dir = root.join(DEPENDENCY_DIR);
        let load_paths = vec![root.clone(), root.join(PARTIALS_DIR), modules_dir.clone()];
        let fs = PackageFs { root: root.clone(), modules_dir };
        Self { root, load_paths, fs }
    }

    /// Appends extra load paths; relative ones are taken relative to the root.
    pub fn with_load_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            let path = self.root.join(path);
            trace!("Adding load path: {}", path.display());
            self.load_paths.push(path);
        }
        self
    }
}

impl Compiler for GrassCompiler {
    fn compile(&self, path: &Path) -> Result<String, CompileError> {
        let absolute = self.root.join(path);
        trace!("Compiling {}", absolute.display());

        let options = self
            .load_paths
            .iter()
            .fold(grass::Options::default().fs(&self.fs).quiet(true), |options, load_path| {
                options.load_path(load_path)
            });

        match grass::from_path(&absolute, &options) {
            Ok(css) => {
                debug!("Compiled {} ({} bytes of css)", path.display(), css.len());
                Ok(css)
            }
            Err(e) => Err(CompileError { path: path.to_path_buf(), message: e.to_string() }),
        }
    }
}

/// Filesystem view that re-roots `~name` path components under the dependency directory.
///
/// Only components below the project root are considered, so a root that itself
/// lives under a `~name` directory is read as-is.
#[derive(Debug)]
struct PackageFs {
    root: PathBuf,
    modules_dir: PathBuf,
}

impl PackageFs {
    fn redirect<'p>(&self, path: &'p Path) -> Cow<'p, Path> {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return Cow::Borrowed(path);
        };
        let components: Vec<Component<'_>> = relative.components().collect();
        let Some(idx) = components.iter().position(|c| {
            matches!(c, Component::Normal(s) if s.to_string_lossy().starts_with(TILDE_PREFIX))
        }) else {
            return Cow::Borrowed(path);
        };

        let mut redirected = self.modules_dir.clone();
        if let Component::Normal(package) = components[idx] {
            let package = package.to_string_lossy();
            redirected.push(&package[TILDE_PREFIX.len_utf8()..]);
        }
        redirected.extend(&components[idx + 1..]);
        trace!("Redirected {} to {}", path.display(), redirected.display());
        Cow::Owned(redirected)
    }
}

impl grass::Fs for PackageFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.redirect(path).is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        self.redirect(path).is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(self.redirect(path))
    }
}
