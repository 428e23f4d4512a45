//! Statistics over a finished inventory run.

use super::driver::Inventory;
use crate::parser::RadioBand;
use std::collections::HashSet;

/// Counts reported to the operator after a run
///
/// **Public** - returned from summarize
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// Total BSSID records
    pub records: usize,

    /// Access points in the directory
    pub access_points: usize,

    /// Records per band, in first-seen band order
    pub per_band: Vec<(RadioBand, usize)>,

    /// Records per AP, in discovery order (APs with no records included)
    pub per_ap: Vec<(String, usize)>,

    /// Distinct BSSID strings across all records
    pub distinct_bssids: usize,

    /// (AP, band) query units whose command failed
    pub skipped_units: usize,
}

impl InventorySummary {
    /// One-line summary for logging
    pub fn summary(&self) -> String {
        let bands: Vec<String> = self
            .per_band
            .iter()
            .map(|(band, count)| format!("{}: {}", band, count))
            .collect();

        format!(
            "{} records from {} APs ({}), {} distinct BSSIDs, {} query units skipped",
            self.records,
            self.access_points,
            if bands.is_empty() { "no bands".to_string() } else { bands.join(", ") },
            self.distinct_bssids,
            self.skipped_units
        )
    }
}

/// Compute run statistics
pub fn summarize(inventory: &Inventory) -> InventorySummary {
    let mut per_band: Vec<(RadioBand, usize)> = Vec::new();
    for entry in &inventory.entries {
        match per_band.iter().position(|(band, _)| *band == entry.band) {
            Some(i) => per_band[i].1 += 1,
            None => per_band.push((entry.band, 1)),
        }
    }

    let per_ap = inventory
        .directory
        .names()
        .iter()
        .map(|name| {
            let count = inventory
                .entries
                .iter()
                .filter(|e| &e.ap_name == name)
                .count();
            (name.clone(), count)
        })
        .collect();

    let distinct_bssids = inventory
        .entries
        .iter()
        .map(|e| e.bssid.as_str())
        .collect::<HashSet<_>>()
        .len();

    InventorySummary {
        records: inventory.record_count(),
        access_points: inventory.access_point_count(),
        per_band,
        per_ap,
        distinct_bssids,
        skipped_units: inventory.skipped_count(),
    }
}
