//! CSV record writer and reader.
//!
//! One row per BSSID entry under the fixed header
//! `AP Name,Location,Band,Interface Name,BSSID`. Fields containing the
//! delimiter, quotes or line breaks are quoted.

use super::{calculate_file_size, prepare_output_path};
use crate::parser::schema::{BssidEntry, RadioBand};
use crate::utils::config::CSV_HEADER;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Row layout of the CSV file, in column order
#[derive(Debug, Serialize, Deserialize)]
struct CsvRow {
    #[serde(rename = "AP Name")]
    ap_name: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Band")]
    band: RadioBand,
    #[serde(rename = "Interface Name")]
    interface_name: String,
    #[serde(rename = "BSSID")]
    bssid: String,
}

impl From<&BssidEntry> for CsvRow {
    fn from(entry: &BssidEntry) -> Self {
        Self {
            ap_name: entry.ap_name.clone(),
            location: entry.location.clone(),
            band: entry.band,
            interface_name: entry.interface_name.clone(),
            bssid: entry.bssid.clone(),
        }
    }
}

impl From<CsvRow> for BssidEntry {
    fn from(row: CsvRow) -> Self {
        Self {
            ap_name: row.ap_name,
            location: row.location,
            band: row.band,
            interface_name: row.interface_name,
            bssid: row.bssid,
        }
    }
}

/// Write records to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` / `OutputError::Csv` - I/O error during write
pub fn write_records(entries: &[BssidEntry], output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} records to: {}", entries.len(), output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    write_records_to(entries, BufWriter::new(file))?;

    info!(
        "Records written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Write the header and records to any writer
///
/// The header is written even when `entries` is empty.
pub fn write_records_to<W: Write>(entries: &[BssidEntry], writer: W) -> Result<(), OutputError> {
    let mut wtr = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for entry in entries {
        wtr.serialize(CsvRow::from(entry))?;
    }
    wtr.flush()?;

    Ok(())
}

/// Read records back from a CSV file
///
/// **Public** - used by the validate command and tests
pub fn read_records(input_path: impl AsRef<Path>) -> Result<Vec<BssidEntry>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading records from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    read_records_from(file)
}

/// Read records from any reader, checking the header first
pub fn read_records_from<R: Read>(reader: R) -> Result<Vec<BssidEntry>, OutputError> {
    let mut rdr = ::csv::Reader::from_reader(reader);

    let headers = rdr.headers()?;
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(OutputError::InvalidHeader(headers.iter().collect::<Vec<_>>().join(",")));
    }

    let entries = rdr
        .deserialize::<CsvRow>()
        .map(|row| row.map(BssidEntry::from))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Loaded {} records", entries.len());

    Ok(entries)
}
