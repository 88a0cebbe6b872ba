//! Naming conventions shared by discovery, resolution and compilation.

/// Extension of the stylesheet sources that are scanned
pub const SCSS_EXTENSION: &str = "scss";

/// Suffix appended to extensionless import specifiers
pub const SCSS_SUFFIX: &str = ".scss";

/// Conventional dependency directory, skipped during discovery and used for package imports
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Directory holding bare-name partials (`@import 'global'` -> `styles/_global.scss`)
pub const PARTIALS_DIR: &str = "styles";

/// Prefix of a Sass partial file name
pub const PARTIAL_PREFIX: &str = "_";

/// Marker that identifies a scoped package reference
pub const PACKAGE_MARKER: char = '@';

/// Webpack-style prefix for package references (`~@scope/pkg`)
pub const TILDE_PREFIX: char = '~';
