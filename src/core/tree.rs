//! Indented tree output for a directory, filtered through a [`PatternIndex`].

use std::fs;
use std::io::Write;
use std::path::Path;

use walkdir::WalkDir;

use crate::core::error::TreeError;
use crate::core::index::PatternIndex;

const INDENT: &str = "   ";
const BRANCH: &str = "├──";

/// One output line for an entry `depth` components below the root (depth >= 1).
pub fn format_line(depth: usize, name: &str) -> String {
    format!("{}{}{}", INDENT.repeat(depth.saturating_sub(1)), BRANCH, name)
}

/// Write `root` and every non-excluded entry beneath it, pre-order, siblings by name.
///
/// With `header`, a `Directory tree for:` line comes first, once the root is
/// known to exist. Excluded directories are not pruned: their children are
/// still walked and each one is checked on its own.
pub fn render<W: Write>(
    root: &Path,
    index: &PatternIndex,
    header: bool,
    out: &mut W,
) -> Result<(), TreeError> {
    fs::metadata(root).map_err(|source| TreeError::RootMetadata {
        path: root.to_path_buf(),
        source,
    })?;

    if header {
        writeln!(out, "Directory tree for: {}", root.display())?;
    }

    if index.is_excluded(root) {
        log::debug!("Root {} is excluded; nothing to print", root.display());
        return Ok(());
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());
    writeln!(out, "{}", root_name)?;

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if index.is_excluded(entry.path()) {
            continue;
        }
        let depth = entry
            .path()
            .strip_prefix(root)
            .map(|rel| rel.components().count())
            .unwrap_or_else(|_| entry.depth());
        writeln!(
            out,
            "{}",
            format_line(depth, &entry.file_name().to_string_lossy())
        )?;
    }

    out.flush()?;
    Ok(())
}
