//! Buffered tree formatter and artifact sink
//!
//! `TreeFormatter` collects the walk output under a two-line header, writes
//! the complete artifact to `proj_structure.txt`, and only then echoes the
//! same content to stdout. Materializing the whole artifact first keeps the
//! file and the console in lockstep.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{CONNECTOR, TreeSink};

use super::config::OutputConfig;

/// File the rendered tree is persisted to, in the project root.
/// Overwritten on every run.
pub const ARTIFACT_NAME: &str = "proj_structure.txt";

/// One rendered entry below the header.
#[derive(Debug, Clone)]
struct RenderLine {
    prefix: String,
    name: String,
    is_dir: bool,
}

impl RenderLine {
    fn text(&self) -> String {
        let slash = if self.is_dir { "/" } else { "" };
        format!("{}{}{}{}", self.prefix, CONNECTOR, self.name, slash)
    }
}

/// Formatter that buffers the full tree before writing it anywhere.
pub struct TreeFormatter {
    config: OutputConfig,
    root_name: String,
    lines: Vec<RenderLine>,
}

impl TreeFormatter {
    pub fn new(root_name: impl Into<String>, config: OutputConfig) -> Self {
        Self {
            config,
            root_name: root_name.into(),
            lines: Vec::new(),
        }
    }

    /// Full artifact contents: `<root>/`, a `│` separator, then one line
    /// per visited entry.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.root_name);
        out.push_str("/\n│\n");
        for line in &self.lines {
            out.push_str(&line.text());
            out.push('\n');
        }
        out
    }

    /// Write the artifact into `root`, replacing any previous run's file.
    /// Failure here is fatal for the run and propagates to the caller.
    pub fn write_artifact(&self, root: &Path) -> io::Result<()> {
        fs::write(root.join(ARTIFACT_NAME), self.render())
    }

    /// Echo the artifact content to stdout, in artifact order, coloring
    /// directory names when enabled.
    pub fn print(&self) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        writeln!(stdout, "{}/", self.root_name)?;
        writeln!(stdout, "│")?;
        for line in &self.lines {
            write!(stdout, "{}{}", line.prefix, CONNECTOR)?;
            if line.is_dir {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(stdout, "{}", line.name)?;
                stdout.reset()?;
                writeln!(stdout, "/")?;
            } else {
                writeln!(stdout, "{}", line.name)?;
            }
        }
        Ok(())
    }
}

impl TreeSink for TreeFormatter {
    fn entry(&mut self, prefix: &str, name: &str, is_dir: bool) -> io::Result<()> {
        self.lines.push(RenderLine {
            prefix: prefix.to_string(),
            name: name.to_string(),
            is_dir,
        });
        Ok(())
    }
}
