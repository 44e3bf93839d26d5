//! JSON output of the analysis

use crate::analysis::ProjectAnalysis;
use crate::error::Result;

/// Print the analysis as pretty-printed JSON to stdout.
pub fn print_json(analysis: &ProjectAnalysis) -> Result<()> {
    let json = serde_json::to_string_pretty(analysis)?;
    println!("{}", json);
    Ok(())
}
