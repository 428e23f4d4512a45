//! Aggregation driver: discovery, per-band querying and the location join.
//!
//! A run moves through
//!
//! ```text
//! Idle -> DirectoryLoaded -> PerAp(ap, band)* -> Complete
//!   \__________________\________________________-> Aborted
//! ```
//!
//! The work items are every (AP, band) pair, APs in discovery order and
//! bands in the order supplied. Entries are folded out of that sequence in
//! order, so the output ordering is AP order, then band order, then row
//! order within one command's output.

use crate::parser::{parse_ap_summary, parse_wlan_table, BssidEntry, Directory, RadioBand};
use crate::session::{ap_summary_command, ap_wlan_command, DeviceSession};
use crate::utils::error::{CollectError, SessionError};
use log::{debug, info, warn};

/// Where the driver is in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    DirectoryLoaded,
    PerAp { ap_name: String, band: RadioBand },
    Complete,
    Aborted,
}

/// One (AP, band) pair needing its own command dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub ap_name: String,
    pub band: RadioBand,
}

/// A work item whose command failed; it contributed no entries
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SkippedUnit {
    pub ap_name: String,
    pub band: RadioBand,
    pub reason: String,
}

/// Result of a completed run
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub directory: Directory,
    pub entries: Vec<BssidEntry>,
    pub skipped: Vec<SkippedUnit>,
}

impl Inventory {
    pub fn record_count(&self) -> usize {
        self.entries.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn access_point_count(&self) -> usize {
        self.directory.len()
    }
}

/// Bands in caller order with repeats removed (first occurrence kept)
pub fn distinct_bands(bands: &[RadioBand]) -> Vec<RadioBand> {
    bands.iter().fold(Vec::new(), |mut distinct, &band| {
        if !distinct.contains(&band) {
            distinct.push(band);
        }
        distinct
    })
}

/// Work items in query order: each AP in discovery order, every distinct band per AP
pub fn work_items(directory: &Directory, bands: &[RadioBand]) -> Vec<WorkItem> {
    let bands = distinct_bands(bands);
    directory
        .names()
        .iter()
        .flat_map(|name| {
            bands.iter().map(move |&band| WorkItem {
                ap_name: name.clone(),
                band,
            })
        })
        .collect()
}

/// Drives one inventory run over a device session
pub struct AggregationDriver<'s, S: DeviceSession + ?Sized> {
    session: &'s mut S,
    bands: Vec<RadioBand>,
    state: RunState,
}

impl<'s, S: DeviceSession + ?Sized> AggregationDriver<'s, S> {
    pub fn new(session: &'s mut S, bands: &[RadioBand]) -> Self {
        Self {
            session,
            bands: distinct_bands(bands),
            state: RunState::Idle,
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Connect, discover APs and collect every BSSID
    ///
    /// Per-unit command failures are recorded in [`Inventory::skipped`] and
    /// do not stop the run.
    ///
    /// # Errors
    /// * `CollectError::Connect` - the session could not be opened
    /// * `CollectError::DirectoryUnavailable` - the AP summary command failed
    /// * `CollectError::EmptyDirectory` - no AP rows in the summary
    /// * `CollectError::NoBands` - nothing to query per AP
    pub fn run(&mut self) -> Result<Inventory, CollectError> {
        let result = self.collect();
        self.state = match &result {
            Ok(_) => RunState::Complete,
            Err(_) => RunState::Aborted,
        };
        result
    }

    fn collect(&mut self) -> Result<Inventory, CollectError> {
        if self.bands.is_empty() {
            return Err(CollectError::NoBands);
        }

        info!("Connecting to controller...");
        self.session.connect().map_err(CollectError::Connect)?;

        let directory = self.load_directory()?;
        self.state = RunState::DirectoryLoaded;

        let items = work_items(&directory, &self.bands);
        debug!("{} query units to dispatch", items.len());

        let (entries, skipped) = items.into_iter().fold(
            (Vec::<BssidEntry>::new(), Vec::<SkippedUnit>::new()),
            |(mut entries, mut skipped), item| {
                match self.query(&item) {
                    Ok(output) => {
                        let location = directory.location(&item.ap_name).unwrap_or_default();
                        entries.extend(parse_wlan_table(&output).into_iter().map(|binding| {
                            BssidEntry {
                                ap_name: item.ap_name.clone(),
                                location: location.to_string(),
                                band: item.band,
                                interface_name: binding.interface_name,
                                bssid: binding.bssid,
                            }
                        }));
                    }
                    Err(e) => {
                        warn!("Skipping {} {}: {}", item.ap_name, item.band, e);
                        skipped.push(SkippedUnit {
                            ap_name: item.ap_name,
                            band: item.band,
                            reason: e.to_string(),
                        });
                    }
                }
                (entries, skipped)
            },
        );

        info!(
            "Collected {} BSSIDs from {} APs ({} query units skipped)",
            entries.len(),
            directory.len(),
            skipped.len()
        );

        Ok(Inventory {
            directory,
            entries,
            skipped,
        })
    }

    fn load_directory(&mut self) -> Result<Directory, CollectError> {
        info!("Fetching AP summary...");
        let summary = self
            .session
            .execute(ap_summary_command())
            .map_err(CollectError::DirectoryUnavailable)?;

        parse_ap_summary(&summary)
    }

    /// Dispatch the radio command of one work item
    fn query(&mut self, item: &WorkItem) -> Result<String, SessionError> {
        if self.bands.first() == Some(&item.band) {
            info!("Processing AP: {}", item.ap_name);
        }
        debug!("  Checking {}...", item.band);

        self.state = RunState::PerAp {
            ap_name: item.ap_name.clone(),
            band: item.band,
        };

        self.session.execute(&ap_wlan_command(item.band, &item.ap_name))
    }
}

/// Run a full inventory over `session` for `bands`
///
/// **Public** - library entry point; the session is connected here.
pub fn collect_inventory<S: DeviceSession + ?Sized>(
    session: &mut S,
    bands: &[RadioBand],
) -> Result<Inventory, CollectError> {
    AggregationDriver::new(session, bands).run()
}
