//! Command output parsing and the inventory data model.
//!
//! This module handles:
//! - Splitting whitespace-aligned CLI tables into rows
//! - Building the AP directory from `show ap summary`
//! - Extracting BSSIDs from `show ap wlan`
//! - Defining the record types

pub mod bssid;
pub mod directory;
pub mod schema;
pub mod table;

// Re-export main types
pub use bssid::{parse_wlan_table, IndexedRowRecognizer, WlanBinding};
pub use directory::{parse_ap_summary, Directory, SummaryRowRecognizer};
pub use schema::{AccessPoint, BssidEntry, RadioBand};
pub use table::{FieldSplit, RowRecognizer, TableLayout};
