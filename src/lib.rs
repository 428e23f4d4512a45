//! WLC BSSID Inventory
//!
//! Inventories the access points managed by a wireless LAN controller and
//! the BSSIDs each AP broadcasts per radio band and WLAN interface.
//!
//! The pipeline is:
//! raw CLI text → [`parser`] → [`aggregator`] → [`output`].
//! Talking to the controller goes through the [`session::DeviceSession`]
//! trait, so the core runs equally against a live relay or captured output.
//!
//! ## Getting Started
//!
//! ```bash
//! wlc-bssid collect --url https://wlc.example/command-api --username admin
//! wlc-bssid collect --replay captures/ --output bssid.csv
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use wlc_bssid_inventory::aggregator::collect_inventory;
//! use wlc_bssid_inventory::parser::RadioBand;
//! use wlc_bssid_inventory::session::ReplaySession;
//!
//! let mut session = ReplaySession::new("captures");
//! let inventory = collect_inventory(&mut session, &RadioBand::ALL)?;
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod session;
pub mod utils;
