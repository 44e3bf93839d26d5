//! CLI entry point for folder-structure

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use folder_structure::output::{print_cancelled, print_saved};
use folder_structure::{
    OverwritePolicy, Result, SaveOutcome, ScanConfig, generate_report, print_json,
};
use tracing_subscriber::EnvFilter;

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
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "folder-structure")]
#[command(about = "Save a project's folder tree, file statistics and key files to folder_structure.md")]
#[command(version)]
struct Args {
    /// Project root to summarize
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Overwrite an existing folder_structure.md without asking
    #[arg(short, long)]
    force: bool,

    /// Print the report to stdout instead of writing it
    #[arg(long = "stdout", conflicts_with = "json")]
    stdout: bool,

    /// Print the analysis as JSON instead of writing the report
    #[arg(long = "json", conflicts_with = "stdout")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log every directory visited (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

/// Install the stderr log subscriber. Diagnostics about skipped entries go here.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Ask on the terminal whether an existing report may be replaced.
fn confirm_overwrite(path: &Path) -> bool {
    eprint!("{} already exists. Overwrite? [y/N] ", path.display());
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn overwrite_policy(force: bool) -> OverwritePolicy {
    if force {
        OverwritePolicy::Overwrite
    } else if io::stdin().is_terminal() {
        OverwritePolicy::Ask
    } else {
        OverwritePolicy::Refuse
    }
}

fn run(args: &Args, use_color: bool) -> Result<()> {
    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()?.join(&args.path)
    };
    // Resolve `.` and `..` so the project title is a real directory name.
    // Unresolvable paths are passed on for generate_report to reject.
    let root = fs::canonicalize(&root).unwrap_or(root);

    let report = generate_report(&root, &ScanConfig::default())?;

    if args.json {
        return print_json(&report.analysis);
    }
    if args.stdout {
        print!("{}", report.text);
        return Ok(());
    }

    match report.save(overwrite_policy(args.force), confirm_overwrite)? {
        SaveOutcome::Saved(path) => print_saved(&path, &report.analysis, use_color)?,
        SaveOutcome::Cancelled(path) => print_cancelled(&path, use_color)?,
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args, should_use_color(args.color)) {
        eprintln!("folder-structure: {}", e);
        process::exit(1);
    }
}
