//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Colorize directory names on the stdout echo. Never affects the
    /// artifact file, which is always plain text.
    pub use_color: bool,
}
