//! Device sessions: the only place the inventory touches the network.
//!
//! The driver needs two operations from a controller session, expressed by
//! [`DeviceSession`]. Two implementations ship with the crate:
//! - [`HttpCliSession`] relays CLI commands over JSON-RPC/HTTP
//! - [`ReplaySession`] serves previously captured command output from disk

pub mod commands;
pub mod http;
pub mod replay;
pub mod types;

use crate::utils::error::SessionError;

/// A command-line session to a wireless LAN controller
pub trait DeviceSession {
    /// Open the session
    ///
    /// Failure here is fatal to a run.
    fn connect(&mut self) -> Result<(), SessionError>;

    /// Run one CLI command and return its raw text output
    fn execute(&mut self, command: &str) -> Result<String, SessionError>;
}

impl<S: DeviceSession + ?Sized> DeviceSession for Box<S> {
    fn connect(&mut self) -> Result<(), SessionError> {
        (**self).connect()
    }

    fn execute(&mut self, command: &str) -> Result<String, SessionError> {
        (**self).execute(command)
    }
}

// Re-export main types
pub use commands::{ap_summary_command, ap_wlan_command};
pub use http::{HttpCliSession, HttpSessionConfig};
pub use replay::ReplaySession;
