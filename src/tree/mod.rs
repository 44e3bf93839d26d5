//! Directory tree walking and rendering
//!
//! - `filter` - exclusion of entries by exact name
//! - `config` - `ScanConfig` shared by every pass over a root
//! - `traversal` - the single directory-listing routine both passes use
//! - `walker` - `TreeWalker`, which renders the tree diagram

mod config;
mod filter;
mod traversal;
mod walker;

pub use config::ScanConfig;
pub use filter::{EXCLUDED_NAMES, ExclusionFilter, REPORT_FILE_NAME};
pub use traversal::{DirectoryEntry, EntryKind, Traversal};
pub use walker::{BRANCH, ERROR_LEAF, INDENT_GUIDE, LAST_BRANCH, TreeWalker};
