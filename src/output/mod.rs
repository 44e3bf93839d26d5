//! Report formatting and display
//!
//! - `report` - the Markdown report written to `folder_structure.md`
//! - `json` - the analysis as JSON
//! - `summary` - colored status lines for the terminal

mod json;
mod report;
mod summary;

pub use json::print_json;
pub use report::ReportRenderer;
pub use summary::{print_cancelled, print_saved, write_saved};
