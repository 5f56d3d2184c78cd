//! Fixed names the tree printer relies on.

/// Pattern file read from every directory of the tree.
pub const PATTERN_FILE: &str = ".gitignore";
