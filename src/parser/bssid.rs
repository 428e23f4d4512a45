//! BSSID extraction from `show ap wlan <band> <ap>` output.
//!
//! The WLAN table of that command lists one row per SSID bound to the
//! radio:
//!
//! ```text
//! WLAN ID          Interface          BSSID
//! -------         -----------        --------------------------
//! 1               management          00:11:22:33:44:5f
//! 2               guest net           00:11:22:33:44:5e
//! ```
//!
//! Rows start with the numeric WLAN index. The extractor knows nothing
//! about the AP or band the text came from; the caller supplies that.

use super::table::{FieldSplit, RowRecognizer, TableLayout};

const INTERFACE_FIELD: usize = 1;
const BSSID_FIELD: usize = 2;

/// Recognizes rows starting with an index followed by whitespace
///
/// The index must be at the very start of the line; indented lines are
/// treated as banner text.
#[derive(Debug, Clone, Copy, Default)]
pub struct IndexedRowRecognizer;

impl RowRecognizer for IndexedRowRecognizer {
    fn recognizes(&self, line: &str) -> bool {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        digits > 0
            && line[digits..]
                .chars()
                .next()
                .is_some_and(char::is_whitespace)
    }
}

/// One (interface, BSSID) pair from the WLAN table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlanBinding {
    pub interface_name: String,
    pub bssid: String,
}

impl WlanBinding {
    pub fn new(interface_name: impl Into<String>, bssid: impl Into<String>) -> Self {
        Self {
            interface_name: interface_name.into(),
            bssid: bssid.into(),
        }
    }
}

/// Extract the WLAN bindings of one radio, in row order
///
/// BSSIDs are passed through as printed; no MAC format check is made.
pub fn parse_wlan_table(output: &str) -> Vec<WlanBinding> {
    let layout = TableLayout::new(IndexedRowRecognizer, FieldSplit::Columns, BSSID_FIELD + 1);

    layout
        .rows(output)
        .map(|fields| WlanBinding::new(fields[INTERFACE_FIELD], fields[BSSID_FIELD]))
        .collect()
}
