//! Recursive directory traversal

use std::io;
use std::path::{Path, PathBuf};

use crate::ignore::PatternSet;

/// Indent unit appended for each directory level.
pub const INDENT_UNIT: &str = "│   ";

/// Connector glyph in front of every entry.
pub const CONNECTOR: &str = "├── ";

/// Callback for walk output - receives one call per rendered entry, in
/// final output order.
pub trait TreeSink {
    fn entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()>;
}

/// Depth-first walker over a project tree.
///
/// At every level, children are sorted by name, non-ignored regular files
/// are emitted first, then non-ignored directories, each recursed into with
/// the indent extended by one [`INDENT_UNIT`]. Ignored directories are
/// pruned without being entered, so their contents are never read.
/// Directories that cannot be listed (permissions) contribute no entries.
///
/// Symlinks are treated as whatever the filesystem reports them to be;
/// there is no cycle detection, so a symlink loop will not terminate.
pub struct TreeWalker<'a> {
    root: PathBuf,
    patterns: &'a PatternSet,
}

impl<'a> TreeWalker<'a> {
    pub fn new(root: &Path, patterns: &'a PatternSet) -> Self {
        Self {
            root: root.to_path_buf(),
            patterns,
        }
    }

    /// Walk the whole tree, feeding one call per rendered line into `sink`.
    /// Sink errors abort the walk; filesystem errors during listing do not.
    pub fn walk<S: TreeSink>(&self, sink: &mut S) -> io::Result<()> {
        self.walk_dir(&self.root, "", sink)
    }

    fn walk_dir<S: TreeSink>(&self, dir: &Path, prefix: &str, sink: &mut S) -> io::Result<()> {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            // Unreadable directories are skipped, not fatal
            Err(_) => return Ok(()),
        };

        let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
        entries.sort_by_key(|e| e.file_name());

        // Files first, directories second; both passes in name order.
        for entry in &entries {
            let path = entry.path();
            if path.is_dir() || self.is_ignored(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            sink.entry(prefix, &name, false)?;
        }

        let child_prefix = format!("{prefix}{INDENT_UNIT}");
        for entry in &entries {
            let path = entry.path();
            if !path.is_dir() || self.is_ignored(&path) {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            sink.entry(prefix, &name, true)?;
            self.walk_dir(&path, &child_prefix, sink)?;
        }

        Ok(())
    }

    /// Match a path against the pattern set by its root-relative,
    /// `/`-separated form.
    fn is_ignored(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.root) else {
            return false;
        };
        let relative = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        self.patterns.is_ignored(&relative)
    }
}
