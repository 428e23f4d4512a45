//! Data model shared by the extractors, the driver and the record sink.

use crate::utils::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radio band queried per access point
///
/// The set is closed: these are the two legacy band names the
/// controller's `show ap wlan` command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RadioBand {
    #[serde(rename = "802.11a")]
    Dot11A,
    #[serde(rename = "802.11b")]
    Dot11B,
}

impl RadioBand {
    /// Default band set, in query order
    pub const ALL: [RadioBand; 2] = [RadioBand::Dot11A, RadioBand::Dot11B];

    /// Band name as used on the controller CLI and in reports
    pub fn as_str(&self) -> &'static str {
        match self {
            RadioBand::Dot11A => "802.11a",
            RadioBand::Dot11B => "802.11b",
        }
    }
}

impl fmt::Display for RadioBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RadioBand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "802.11a" | "a" => Ok(RadioBand::Dot11A),
            "802.11b" | "b" => Ok(RadioBand::Dot11B),
            _ => Err(ParseError::UnknownBand(s.to_string())),
        }
    }
}

/// An access point discovered from the AP summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPoint {
    pub name: String,
    /// Empty when the controller reported no location
    pub location: String,
}

/// One BSSID broadcast by an access point on one band and interface
///
/// `ap_name` refers to an [`AccessPoint`] by name; `location` is a copy
/// taken when the entry was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BssidEntry {
    pub ap_name: String,
    pub location: String,
    pub band: RadioBand,
    pub interface_name: String,
    pub bssid: String,
}
