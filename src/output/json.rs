//! JSON inventory report writer.
//!
//! Writes the records together with run metadata (AP list, skipped query
//! units, generation time) as a single pretty-printed document.

use super::{calculate_file_size, prepare_output_path};
use crate::aggregator::{Inventory, SkippedUnit};
use crate::parser::schema::{AccessPoint, BssidEntry};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Controller the inventory was taken from
    pub controller: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// Access points in discovery order
    pub access_points: Vec<AccessPoint>,

    pub records: Vec<BssidEntry>,

    /// Query units that contributed no records because their command failed
    #[serde(default)]
    pub skipped: Vec<SkippedUnit>,
}

/// Build a report from a finished run
pub fn to_report(inventory: &Inventory, controller: &str) -> InventoryReport {
    InventoryReport {
        version: SCHEMA_VERSION.to_string(),
        controller: controller.to_string(),
        generated_at: chrono::Utc::now().to_rfc3339(),
        access_points: inventory.directory.access_points().collect(),
        records: inventory.entries.clone(),
        skipped: inventory.skipped.clone(),
    }
}

/// Write a report to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_report(report: &InventoryReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report).map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!(
        "Report written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a report from a JSON file
///
/// **Public** - useful for validation and testing
pub fn read_report(input_path: impl AsRef<Path>) -> Result<InventoryReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;

    let report: InventoryReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, {} records",
        report.version,
        report.records.len()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Directory, RadioBand};
    use tempfile::NamedTempFile;

    fn create_test_inventory() -> Inventory {
        let mut directory = Directory::default();
        directory.insert("AP1", "Floor1");

        Inventory {
            directory,
            entries: vec![BssidEntry {
                ap_name: "AP1".to_string(),
                location: "Floor1".to_string(),
                band: RadioBand::Dot11A,
                interface_name: "intf-a".to_string(),
                bssid: "AA:BB:CC:DD:EE:01".to_string(),
            }],
            skipped: vec![SkippedUnit {
                ap_name: "AP1".to_string(),
                band: RadioBand::Dot11B,
                reason: "timeout".to_string(),
            }],
        }
    }

    #[test]
    fn test_write_and_read_report() {
        let report = to_report(&create_test_inventory(), "https://wlc.example");
        let temp_file = NamedTempFile::new().unwrap();

        write_report(&report, temp_file.path()).unwrap();
        let loaded = read_report(temp_file.path()).unwrap();

        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.controller, "https://wlc.example");
        assert_eq!(loaded.records, report.records);
        assert_eq!(loaded.skipped, report.skipped);
        assert_eq!(loaded.access_points[0].location, "Floor1");
    }

    #[test]
    fn test_report_complete_when_write_returns() {
        let temp_file = NamedTempFile::new().unwrap();
        let report = to_report(&create_test_inventory(), "replay");

        write_report(&report, temp_file.path()).unwrap();

        let text = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(text.trim_end().ends_with('}'));
        assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/report.json");

        let report = to_report(&create_test_inventory(), "replay");
        write_report(&report, &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
