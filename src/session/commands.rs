//! Command templates for the controller dialect in scope.

use crate::parser::RadioBand;

/// One-shot AP listing
pub fn ap_summary_command() -> &'static str {
    "show ap summary"
}

/// WLAN/BSSID table of one AP radio
pub fn ap_wlan_command(band: RadioBand, ap_name: &str) -> String {
    format!("show ap wlan {} {}", band, ap_name)
}
