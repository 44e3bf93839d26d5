//! Short colored status lines for the terminal

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::analysis::ProjectAnalysis;

/// Write the "saved" status line and a one-line summary of the analysis.
pub fn write_saved<W: WriteColor>(
    out: &mut W,
    path: &Path,
    analysis: &ProjectAnalysis,
) -> io::Result<()> {
    let mut green = ColorSpec::new();
    green.set_fg(Some(Color::Green)).set_bold(true);
    out.set_color(&green)?;
    write!(out, "✔ ")?;
    out.reset()?;
    writeln!(out, "Folder structure saved to {}", path.display())?;

    let mut dim = ColorSpec::new();
    dim.set_fg(Some(Color::Cyan));
    out.set_color(&dim)?;
    write!(
        out,
        "  {} files, {} folders, max depth {}",
        analysis.total_files, analysis.total_folders, analysis.max_depth
    )?;
    if !analysis.tech_stack.is_empty() {
        write!(out, " · {}", analysis.tech_stack.join(", "))?;
    }
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

/// Print the "saved" status to stdout.
pub fn print_saved(path: &Path, analysis: &ProjectAnalysis, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    write_saved(&mut stdout, path, analysis)
}

/// Print a notice that an existing report was left untouched.
pub fn print_cancelled(path: &Path, use_color: bool) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color_choice(use_color));
    let mut yellow = ColorSpec::new();
    yellow.set_fg(Some(Color::Yellow));
    stdout.set_color(&yellow)?;
    write!(stdout, "Cancelled: ")?;
    stdout.reset()?;
    writeln!(stdout, "{} was not overwritten", path.display())?;
    Ok(())
}

fn color_choice(use_color: bool) -> ColorChoice {
    if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}
