//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use wlc_bssid_inventory::parser::RadioBand;
use wlc_bssid_inventory::session::{ap_summary_command, ap_wlan_command, DeviceSession};
use wlc_bssid_inventory::utils::error::SessionError;

/// In-memory session answering from a script and recording every dispatch
#[derive(Debug, Default)]
pub struct ScriptedSession {
    responses: HashMap<String, Result<String, String>>,
    connect_error: Option<String>,
    pub dispatched: Vec<String>,
}

impl ScriptedSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_output(mut self, command: &str, output: &str) -> Self {
        self.responses
            .insert(command.to_string(), Ok(output.to_string()));
        self
    }

    pub fn with_failure(mut self, command: &str, reason: &str) -> Self {
        self.responses
            .insert(command.to_string(), Err(reason.to_string()));
        self
    }

    pub fn refusing_connect(mut self, reason: &str) -> Self {
        self.connect_error = Some(reason.to_string());
        self
    }

    /// Dispatches other than the AP summary
    pub fn radio_dispatches(&self) -> usize {
        self.dispatched
            .iter()
            .filter(|c| c.as_str() != ap_summary_command())
            .count()
    }
}

impl DeviceSession for ScriptedSession {
    fn connect(&mut self) -> Result<(), SessionError> {
        match &self.connect_error {
            Some(reason) => Err(SessionError::ConnectionFailed(reason.clone())),
            None => Ok(()),
        }
    }

    fn execute(&mut self, command: &str) -> Result<String, SessionError> {
        self.dispatched.push(command.to_string());
        match self.responses.get(command) {
            Some(Ok(output)) => Ok(output.clone()),
            Some(Err(reason)) => Err(SessionError::DispatchFailed {
                command: command.to_string(),
                reason: reason.clone(),
            }),
            None => Err(SessionError::DispatchFailed {
                command: command.to_string(),
                reason: "no scripted output".to_string(),
            }),
        }
    }
}

/// One `show ap summary` row in the controller's column layout
pub fn summary_row(name: &str, location: &str) -> String {
    format!(
        "{:<20}2     AIR-AP2802I-B-K9  00:11:22:33:44:55  {:<16}US    10.0.0.5         3       [0 ,0 ,0 ]",
        name, location
    )
}

/// Full `show ap summary` output with banner and header lines
pub fn summary_output(aps: &[(&str, &str)]) -> String {
    let mut text = String::from(
        "Number of APs.................................... 3\n\
         Global AP User Name.............................. admin\n\n\
         AP Name             Slots  AP Model          Ethernet MAC       Location        Country  IP Address   Clients  DSE Location\n\
         ------------------  -----  ----------------  -----------------  --------------  -------  -----------  -------  ------------\n",
    );
    for (name, location) in aps {
        text.push_str(&summary_row(name, location));
        text.push('\n');
    }
    text
}

/// `show ap wlan` output with `rows` WLAN rows
pub fn wlan_output(ap: &str, band: RadioBand, rows: usize) -> String {
    let mut text = String::from(
        "Site Name........................................ default-group\n\
         Site Description................................. \n\
         WLAN ID          Interface          BSSID\n\
         -------         -----------        --------------------------\n",
    );
    for i in 0..rows {
        text.push_str(&format!(
            "{:<16}{:<20}{}\n",
            i + 1,
            format!("wlan-{}", i + 1),
            bssid(ap, band, i)
        ));
    }
    text
}

/// Deterministic fake BSSID for a fixture row
pub fn bssid(ap: &str, band: RadioBand, row: usize) -> String {
    let ap_byte = ap.bytes().fold(0u8, |acc, b| acc.wrapping_add(b));
    let band_byte = match band {
        RadioBand::Dot11A => 0xa0,
        RadioBand::Dot11B => 0xb0,
    };
    format!("00:11:22:{:02x}:{:02x}:{:02x}", ap_byte, band_byte, row)
}

/// Session scripted with `aps`, each radio answering `rows` WLAN rows
pub fn scripted_controller(aps: &[(&str, &str)], rows: usize) -> ScriptedSession {
    let mut session = ScriptedSession::new().with_output(ap_summary_command(), &summary_output(aps));
    for (name, _) in aps {
        for band in RadioBand::ALL {
            session = session.with_output(
                &ap_wlan_command(band, name),
                &wlan_output(name, band, rows),
            );
        }
    }
    session
}
