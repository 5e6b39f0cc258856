//! Ignore pattern loading and matching
//!
//! Patterns are literal paths or path prefixes relative to the project root.
//! There is deliberately no glob or regex expansion: a pattern matches
//! itself and anything nested beneath it, nothing else.

use std::fs;
use std::path::Path;

/// Name of the per-project ignore configuration file.
pub const IGNORE_FILE_NAME: &str = ".overviewignore";

/// An immutable set of literal ignore patterns.
///
/// Always contains [`IGNORE_FILE_NAME`] as its first member so the config
/// file never shows up in its own output. Built once per run.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<String>,
}

impl PatternSet {
    /// Build a set from explicit patterns (the config-file seed is added
    /// automatically). Absolute paths can never match a root-relative path
    /// and are dropped here rather than stored as dead weight.
    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = vec![IGNORE_FILE_NAME.to_string()];
        for pattern in patterns {
            let pattern = pattern.into();
            if !pattern.is_empty() && !Path::new(&pattern).is_absolute() {
                all.push(pattern);
            }
        }
        Self { patterns: all }
    }

    /// Load the pattern set for a project root.
    ///
    /// Reads `<root>/.overviewignore` if present. Leading/trailing
    /// whitespace is trimmed; blank lines and `#` comments are skipped.
    /// A missing or unreadable file yields the seed-only set.
    pub fn load(root: &Path) -> Self {
        let contents = fs::read_to_string(root.join(IGNORE_FILE_NAME)).unwrap_or_default();
        Self::from_patterns(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        )
    }

    /// Check whether a root-relative path is ignored.
    ///
    /// True iff the path equals some pattern exactly, or some pattern names
    /// one of its ancestor directories. Case-sensitive, first match wins.
    pub fn is_ignored(&self, relative: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            match relative.strip_prefix(pattern.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with('/'),
                None => false,
            }
        })
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::from_patterns(std::iter::empty::<String>())
    }
}
