//! Overview - snapshot a project's directory structure as a tree
//!
//! Walks the project root depth-first, excluding paths listed in
//! `.overviewignore` (literal path / path-prefix matching only), renders
//! the remaining structure with hierarchy connectors, writes it to
//! `proj_structure.txt`, and echoes the same content to stdout.

pub mod ignore;
pub mod output;
pub mod setup;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ignore::{IGNORE_FILE_NAME, PatternSet};
pub use output::{ARTIFACT_NAME, OutputConfig, TreeFormatter};
pub use tree::{TreeSink, TreeWalker};
