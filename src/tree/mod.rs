//! Directory tree walking logic
//!
//! `TreeWalker` enumerates a project tree depth-first and feeds rendered
//! entries into a `TreeSink`, which keeps traversal separate from output
//! formatting.

mod walker;

pub use walker::{CONNECTOR, INDENT_UNIT, TreeSink, TreeWalker};
