//! CLI entry point for overview

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use overview::setup::run_setup;
use overview::{IGNORE_FILE_NAME, OutputConfig, PatternSet, TreeFormatter, TreeWalker};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "overview")]
#[command(about = "Print a project's directory tree to proj_structure.txt and stdout")]
#[command(version)]
struct Args {
    /// Project root to snapshot
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    if !root.is_dir() {
        eprintln!(
            "overview: cannot access '{}': No such file or directory",
            args.path.display()
        );
        process::exit(1);
    }

    // First run in this project: offer to create the ignore file. Declining
    // is fine; the walk proceeds with the seed-only pattern set.
    if !root.join(IGNORE_FILE_NAME).exists() {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        if let Err(e) = run_setup(&root, &mut input, &mut output) {
            eprintln!("overview: failed to create {}: {}", IGNORE_FILE_NAME, e);
            process::exit(1);
        }
    }

    let patterns = PatternSet::load(&root);

    let root_name = root
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());

    let config = OutputConfig {
        use_color: should_use_color(args.color),
    };
    let mut formatter = TreeFormatter::new(root_name, config);
    let walker = TreeWalker::new(&root, &patterns);

    // Artifact first, echo second: stdout always reflects a fully written file.
    let result = walker
        .walk(&mut formatter)
        .and_then(|_| formatter.write_artifact(&root))
        .and_then(|_| formatter.print());

    if let Err(e) = result {
        eprintln!("overview: error writing output: {}", e);
        process::exit(1);
    }
}
