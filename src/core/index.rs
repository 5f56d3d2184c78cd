//! Directory → pattern set index and the upward exclusion check.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::error::TreeError;
use crate::core::patterns::PatternSet;

/// Pattern sets for every directory under a root, keyed by directory path.
///
/// Directories without a pattern file are present with an empty set.
#[derive(Debug, Default)]
pub struct PatternIndex {
    sets: HashMap<PathBuf, PatternSet>,
}

impl PatternIndex {
    /// Walk `root` pre-order and read `pattern_file` from each directory.
    ///
    /// The first walk error or unreadable pattern file aborts the build.
    pub fn build(root: &Path, pattern_file: &str) -> Result<Self, TreeError> {
        let mut sets = HashMap::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let set = PatternSet::read(&entry.path().join(pattern_file))?;
            sets.insert(entry.into_path(), set);
        }

        log::debug!(
            "Indexed {} director{} under {}",
            sets.len(),
            if sets.len() == 1 { "y" } else { "ies" },
            root.display()
        );
        Ok(Self { sets })
    }

    pub fn get(&self, dir: &Path) -> Option<&PatternSet> {
        self.sets.get(dir)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Indexed directories, sorted.
    #[cfg(test)]
    pub fn dirs(&self) -> Vec<&Path> {
        let mut dirs: Vec<&Path> = self.sets.keys().map(PathBuf::as_path).collect();
        dirs.sort();
        dirs
    }

    /// Whether `path` is hidden by a pattern of its parent or any further ancestor.
    ///
    /// Only the base name of `path` is tested. A path with no base name is never excluded.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };

        let mut dir = path.parent();
        while let Some(current) = dir {
            if let Some(set) = self.get(current)
                && set.is_match(name)
            {
                log::trace!("{} excluded by {}", path.display(), current.display());
                return true;
            }
            dir = current.parent();
        }
        false
    }
}
