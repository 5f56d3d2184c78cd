//! Pattern files: one shell glob per line, matched against an entry's base name.
//!
//! Blank lines and lines starting with `#` are skipped. There is no negation,
//! no anchoring, and no directory-only suffix: every retained line is a plain
//! glob tested against the final path component.

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};

use crate::core::error::TreeError;

/// Outcome of testing one pattern against a base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternMatch {
    Matched,
    NotMatched,
    /// The pattern failed to compile; it can never match.
    Invalid,
}

/// A single glob line from a pattern file.
#[derive(Debug, Clone)]
pub struct Pattern {
    raw: String,
    matcher: Option<GlobMatcher>,
}

impl Pattern {
    pub fn new(raw: &str) -> Self {
        let matcher = match GlobBuilder::new(raw).literal_separator(true).build() {
            Ok(glob) => Some(glob.compile_matcher()),
            Err(e) => {
                log::warn!("Ignoring invalid pattern {:?}: {}", raw, e);
                None
            }
        };
        Self {
            raw: raw.to_string(),
            matcher,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn matches(&self, name: &OsStr) -> PatternMatch {
        match &self.matcher {
            None => PatternMatch::Invalid,
            Some(m) if m.is_match(Path::new(name)) => PatternMatch::Matched,
            Some(_) => PatternMatch::NotMatched,
        }
    }
}

/// Patterns declared by one directory's pattern file, in file order.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Parse pattern file contents: trim each line, drop blanks and `#` comments.
    pub fn parse(text: &str) -> Self {
        let patterns = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(Pattern::new)
            .collect();
        Self { patterns }
    }

    /// Read a pattern file. A missing file is an empty set.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected.
    pub fn read(path: &Path) -> Result<Self, TreeError> {
        match fs::read(path) {
            Ok(bytes) => {
                let set = Self::parse(&String::from_utf8_lossy(&bytes));
                if !set.is_empty() && log::log_enabled!(log::Level::Debug) {
                    log::debug!("Loaded {:?} from {}", set.patterns(), path.display());
                }
                Ok(set)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(TreeError::PatternFile {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Raw pattern strings in declaration order.
    pub fn patterns(&self) -> Vec<&str> {
        self.patterns.iter().map(Pattern::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any pattern matches `name`. Invalid patterns count as non-matching.
    pub fn is_match(&self, name: &OsStr) -> bool {
        self.patterns
            .iter()
            .any(|p| p.matches(name) == PatternMatch::Matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_blank_and_comment_lines() {
        let set = PatternSet::parse("*.log\n\n# comment\nbuild\n");
        assert_eq!(set.patterns(), vec!["*.log", "build"]);
    }

    #[test]
    fn parse_trims_whitespace_and_indented_comments() {
        let set = PatternSet::parse("  *.tmp  \r\n\t# note\n   \ntarget\t\n");
        assert_eq!(set.patterns(), vec!["*.tmp", "target"]);
    }

    #[test]
    fn glob_matches_base_name() {
        let set = PatternSet::parse("*.log\nbuild");
        assert!(set.is_match(OsStr::new("b.log")));
        assert!(set.is_match(OsStr::new("build")));
        assert!(!set.is_match(OsStr::new("a.txt")));
        assert!(!set.is_match(OsStr::new("builder")));
    }

    #[test]
    fn star_matches_leading_dot() {
        let set = PatternSet::parse("*.swp");
        assert!(set.is_match(OsStr::new(".main.rs.swp")));
    }

    #[test]
    fn character_class_and_question_mark() {
        let set = PatternSet::parse("file[0-9].?s");
        assert!(set.is_match(OsStr::new("file3.rs")));
        assert!(!set.is_match(OsStr::new("fileX.rs")));
    }

    #[test]
    fn invalid_pattern_is_tri_state_invalid() {
        let p = Pattern::new("[abc");
        assert_eq!(p.matches(OsStr::new("a")), PatternMatch::Invalid);
        assert_eq!(p.matches(OsStr::new("[abc")), PatternMatch::Invalid);
    }

    #[test]
    fn invalid_pattern_does_not_exclude_and_does_not_hide_others() {
        let set = PatternSet::parse("[abc\n*.log");
        assert_eq!(set.len(), 2);
        assert!(!set.is_match(OsStr::new("a")));
        assert!(!set.is_match(OsStr::new("[abc")));
        assert!(set.is_match(OsStr::new("x.log")));
    }

    #[test]
    fn read_missing_file_is_empty() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let set = PatternSet::read(&tmp.path().join(".gitignore")).expect("read");
        assert!(set.is_empty());
    }

    #[test]
    fn read_existing_file() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join(".gitignore");
        fs::write(&path, "*.log\n\n# comment\nbuild\n").expect("write");
        let set = PatternSet::read(&path).expect("read");
        assert_eq!(set.patterns(), vec!["*.log", "build"]);
    }

    #[test]
    fn read_tolerates_invalid_utf8() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join(".gitignore");
        fs::write(&path, b"# caf\xe9 notes\n*.log\n").expect("write");
        let set = PatternSet::read(&path).expect("read");
        assert_eq!(set.patterns(), vec!["*.log"]);
        assert!(set.is_match(OsStr::new("x.log")));
    }

    #[test]
    fn read_directory_in_place_of_file_is_an_error() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let path = tmp.path().join(".gitignore");
        fs::create_dir(&path).expect("mkdir");
        let err = PatternSet::read(&path).expect_err("directory is not readable as text");
        assert!(matches!(err, TreeError::PatternFile { .. }));
    }
}
