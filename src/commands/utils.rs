use crate::output::{read_records, read_report, OutputFormat};
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Validate a CSV record file or JSON report
///
/// Returns the number of records found.
pub fn validate_report_file(file_path: &Path) -> Result<usize> {
    println!("Validating inventory: {}", file_path.display());

    let (records, skipped) = match OutputFormat::from_path(file_path) {
        OutputFormat::Csv => {
            let records = read_records(file_path).context("Invalid CSV record file")?;
            (records, None)
        }
        OutputFormat::Json => {
            let report = read_report(file_path).context("Invalid JSON report")?;
            println!("  Version: {}", report.version);
            println!("  Controller: {}", report.controller);
            println!("  Generated: {}", report.generated_at);
            (report.records, Some(report.skipped.len()))
        }
    };

    let access_points: HashSet<&str> = records.iter().map(|r| r.ap_name.as_str()).collect();

    println!("✓ Valid inventory");
    println!("  Records: {}", records.len());
    println!("  APs with BSSIDs: {}", access_points.len());
    if let Some(skipped) = skipped {
        println!("  Skipped query units: {}", skipped);
    }

    Ok(records.len())
}

/// Display version information
pub fn display_version() {
    println!("WLC BSSID Inventory v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Lists the BSSIDs broadcast by every AP of a wireless LAN controller.");
}
