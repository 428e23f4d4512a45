//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by a device session on connect or command dispatch
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Connection to controller failed: {0}")]
    ConnectionFailed(String),

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Command '{command}' failed: {reason}")]
    DispatchFailed { command: String, reason: String },

    #[error("Command '{command}' rejected by controller: {reason}")]
    CommandRejected { command: String, reason: String },

    #[error("Invalid controller response: {0}")]
    InvalidResponse(String),

    #[error("Session is not connected")]
    NotConnected,
}

/// Fatal conditions that abort an inventory run
#[derive(Error, Debug)]
pub enum CollectError {
    #[error("Cannot connect to controller")]
    Connect(#[source] SessionError),

    #[error("AP summary command failed")]
    DirectoryUnavailable(#[source] SessionError),

    #[error("No APs found in AP summary output")]
    EmptyDirectory,

    #[error("Band set is empty")]
    NoBands,
}

/// Errors that can occur while interpreting command output or names
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown radio band: {0} (expected 802.11a or 802.11b)")]
    UnknownBand(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Unexpected CSV header: {0}")]
    InvalidHeader(String),
}
