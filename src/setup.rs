//! First-run creation of the ignore configuration file
//!
//! Runs only when `.overviewignore` is absent. The prompt is written over
//! generic reader/writer handles so tests can drive it with in-memory
//! buffers.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::ignore::IGNORE_FILE_NAME;

/// Patterns every freshly created config file starts with.
pub const DEFAULT_PATTERNS: [&str; 2] = [".git", ".gitignore"];

/// Offer to create `<root>/.overviewignore` with the default patterns plus
/// any user-supplied ones (one per line, empty line to finish).
///
/// Returns true if the file was created. Declining is not an error; the
/// caller proceeds with the seed-only pattern set and the offer repeats on
/// the next run. An empty answer (or EOF) counts as yes.
pub fn run_setup<R: BufRead, W: Write>(
    root: &Path,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    write!(
        output,
        "No {IGNORE_FILE_NAME} found. Create one with default patterns? [Y/n] "
    )?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if !answer.is_empty()
        && !answer.eq_ignore_ascii_case("y")
        && !answer.eq_ignore_ascii_case("yes")
    {
        return Ok(false);
    }

    let mut contents = String::from(
        "# Paths listed here are excluded from the structure overview.\n\
         # One literal path or path prefix per line, relative to the project root.\n",
    );
    for pattern in DEFAULT_PATTERNS {
        contents.push_str(pattern);
        contents.push('\n');
    }

    writeln!(
        output,
        "Add ignore patterns, one per line (empty line to finish):"
    )?;
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF ends the pattern list
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        contents.push_str(line);
        contents.push('\n');
    }

    fs::write(root.join(IGNORE_FILE_NAME), contents)?;
    writeln!(output, "Wrote {IGNORE_FILE_NAME}.")?;
    Ok(true)
}
