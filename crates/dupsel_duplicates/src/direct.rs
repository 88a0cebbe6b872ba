use dupsel_core::{CompileError, Compiler, ImportSpecifier, SelectorExtractor};
use log::{debug, trace};
use std::{
    collections::{BTreeSet, HashSet},
    path::Path,
};

/// Computes the selectors `file` defines itself.
///
/// The compiled output of `file` already contains everything its imports pull in,
/// so each import is resolved, compiled on its own and its selectors are removed
/// from the file's selectors. An import that fails to compile removes nothing.
///
/// Import targets are recompiled for every import edge; nothing is cached.
///
/// # Errors
/// Returns the [`CompileError`] of `file` itself when it does not compile.
pub fn direct_selectors<C: Compiler + ?Sized>(
    file: &Path,
    raw_imports: &[String],
    compiler: &C,
    extractor: &SelectorExtractor,
) -> Result<BTreeSet<String>, CompileError> {
    let own = extractor.extract(&compiler.compile(file)?);
    trace!("{} compiles to {} selectors", file.display(), own.len());

    let imports: Vec<ImportSpecifier> =
        raw_imports.iter().map(|raw| ImportSpecifier::resolve(raw.as_str(), file)).collect();
    let imported = imported_selectors(&imports, compiler, extractor);

    let direct: BTreeSet<String> =
        own.into_iter().filter(|selector| !imported.contains(selector)).collect();
    debug!(
        "{} defines {} selectors directly ({} imports)",
        file.display(),
        direct.len(),
        imports.len()
    );
    Ok(direct)
}

fn imported_selectors<C: Compiler + ?Sized>(
    imports: &[ImportSpecifier],
    compiler: &C,
    extractor: &SelectorExtractor,
) -> HashSet<String> {
    let mut selectors = HashSet::new();
    for spec in imports {
        match compiler.compile(&spec.resolved_path) {
            Ok(css) => selectors.extend(extractor.extract(&css)),
            Err(e) => {
                debug!("Import '{}' contributes no selectors: {}", spec.raw, e);
            }
        }
    }
    selectors
}
