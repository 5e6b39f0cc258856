//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `tree` - Buffered formatter that writes the artifact file and echoes
//!   it to stdout

mod config;
mod tree;

pub use config::OutputConfig;
pub use tree::{ARTIFACT_NAME, TreeFormatter};
