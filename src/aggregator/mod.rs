//! Aggregation of per-radio BSSID rows into the inventory.
//!
//! This module turns a device session into records:
//! - Discovering APs and their locations
//! - Querying every (AP, band) pair in a fixed order
//! - Joining BSSID rows with AP locations
//! - Summarizing the finished run

pub mod driver;
pub mod summary;

// Re-export main types and functions
pub use driver::{
    collect_inventory, distinct_bands, work_items, AggregationDriver, Inventory, RunState, SkippedUnit, WorkItem,
};
pub use summary::{summarize, InventorySummary};
