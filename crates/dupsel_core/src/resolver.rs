use log::trace;
use path_clean::clean;
use std::path::{Path, PathBuf};

use crate::constants::{
    DEPENDENCY_DIR, PACKAGE_MARKER, PARTIAL_PREFIX, PARTIALS_DIR, SCSS_SUFFIX, TILDE_PREFIX,
};

/// Resolves an `@import` specifier found in `from_file` to a root-relative stylesheet path.
///
/// `from_file` must itself be relative to the project root. Resolution is purely
/// lexical and total: the returned path is never checked for existence.
///
/// Rules, first match wins:
/// 1. Package reference (contains `@`): `node_modules/<request without leading ~>`.
/// 2. Explicit `.scss` file: relative to the directory of `from_file`.
/// 3. Bare module path (`mixins/colors`): relative to the root, `.scss` appended.
/// 4. Bare partial name (`global`): `styles/_global.scss`.
/// 5. Anything else (`./shared`, `../shared`): relative to the directory of
///    `from_file`, `.scss` appended.
pub fn resolve(request: &str, from_file: &Path) -> PathBuf {
    trace!("Resolving: '{}' from {}", request, from_file.display());

    let resolved = if request.contains(PACKAGE_MARKER) {
        trace!("Resolving as package reference: '{}'", request);
        let package = request.strip_prefix(TILDE_PREFIX).unwrap_or(request);
        clean(Path::new(DEPENDENCY_DIR).join(with_scss_suffix(package)))
    } else if has_scss_suffix(request) {
        trace!("Resolving as explicit stylesheet: '{}'", request);
        clean(base_dir(from_file).join(request))
    } else if !is_relative(request) && request.contains('/') {
        trace!("Resolving as root module path: '{}'", request);
        clean(with_scss_suffix(request))
    } else if !is_relative(request) {
        trace!("Resolving as partial name: '{}'", request);
        Path::new(PARTIALS_DIR).join(format!("{PARTIAL_PREFIX}{request}{SCSS_SUFFIX}"))
    } else {
        trace!("Resolving as relative import: '{}'", request);
        append_scss_suffix(clean(base_dir(from_file).join(request)))
    };

    trace!("Resolved '{}' to {}", request, resolved.display());
    resolved
}

fn base_dir(from_file: &Path) -> &Path {
    from_file.parent().unwrap_or(Path::new(""))
}

// `../x` counts as relative as well as `./x`
fn is_relative(request: &str) -> bool {
    request.contains("./")
}

fn has_scss_suffix(request: &str) -> bool {
    request.ends_with(SCSS_SUFFIX)
}

fn with_scss_suffix(request: &str) -> String {
    if has_scss_suffix(request) { request.to_string() } else { format!("{request}{SCSS_SUFFIX}") }
}

fn append_scss_suffix(path: PathBuf) -> PathBuf {
    let mut raw = path.into_os_string();
    raw.push(SCSS_SUFFIX);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(request: &str, from: &str, expected: &str) {
        assert_eq!(
            resolve(request, Path::new(from)),
            PathBuf::from(expected),
            "resolving '{}' from '{}'",
            request,
            from
        );
    }

    #[test]
    fn test_relative_import() {
        check("./shared", "a/item.scss", "a/shared.scss");
        check("./shared", "test/mock/item.scss", "test/mock/shared.scss");
    }

    #[test]
    fn test_relative_import_from_root_file() {
        check("./shared", "item.scss", "shared.scss");
    }

    #[test]
    fn test_parent_relative_import() {
        check("../base/reset", "a/b/item.scss", "a/base/reset.scss");
    }

    #[test]
    fn test_parent_relative_import_above_root() {
        check("../../outside", "a/item.scss", "../outside.scss");
    }

    #[test]
    fn test_tilde_package_import() {
        check("~@scope/pkg/index", "a/item.scss", "node_modules/@scope/pkg/index.scss");
        check("~@ux/intents/lib/index", "test/mock/item.scss", "node_modules/@ux/intents/lib/index.scss");
    }

    #[test]
    fn test_bare_package_import_matches_tilde() {
        check("@scope/pkg/index", "a/item.scss", "node_modules/@scope/pkg/index.scss");
        assert_eq!(
            resolve("@scope/pkg/index", Path::new("a/item.scss")),
            resolve("~@scope/pkg/index", Path::new("a/item.scss"))
        );
    }

    #[test]
    fn test_package_import_with_extension_wins_over_explicit_file() {
        check("~@scope/pkg/theme.scss", "a/item.scss", "node_modules/@scope/pkg/theme.scss");
        check("@scope/pkg/theme.scss", "a/b/item.scss", "node_modules/@scope/pkg/theme.scss");
    }

    #[test]
    fn test_explicit_scss_file() {
        check("./shared.scss", "a/item.scss", "a/shared.scss");
        check("shared.scss", "a/item.scss", "a/shared.scss");
        check("../shared.scss", "a/b/item.scss", "a/shared.scss");
    }

    #[test]
    fn test_bare_module_path_is_root_relative() {
        check("mixins/colors", "a/b/item.scss", "mixins/colors.scss");
    }

    #[test]
    fn test_bare_partial_name() {
        check("global", "a/item.scss", "styles/_global.scss");
        check("global", "item.scss", "styles/_global.scss");
    }

    #[test]
    fn test_resolution_ignores_disk() {
        // Nothing exists on disk here; resolution is still total
        check("./does-not-exist", "nowhere/item.scss", "nowhere/does-not-exist.scss");
    }
}
