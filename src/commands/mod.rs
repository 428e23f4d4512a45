//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod collect;
pub mod utils;

// Re-export main command functions
pub use collect::{execute_collect, validate_args, CollectArgs};
pub use utils::{display_version, validate_report_file};
