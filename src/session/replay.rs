//! Offline session replaying captured command output.
//!
//! Each command maps to one file in the capture directory, named after the
//! command with whitespace replaced by underscores. `%`, `/` and `\` inside
//! a word are percent-escaped so distinct AP names never share a file:
//!
//! ```text
//! captures/show_ap_summary.txt
//! captures/show_ap_wlan_802.11a_AP-Lobby.txt
//! ```

use super::DeviceSession;
use crate::utils::config::REPLAY_FILE_EXTENSION;
use crate::utils::error::SessionError;
use log::debug;
use std::path::{Path, PathBuf};

/// Session backed by a directory of captured outputs
#[derive(Debug, Clone)]
pub struct ReplaySession {
    dir: PathBuf,
    connected: bool,
}

impl ReplaySession {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            connected: false,
        }
    }

    /// Path of the capture file for `command`
    pub fn capture_path(&self, command: &str) -> PathBuf {
        self.dir.join(capture_file_name(command))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// File name a command's output is captured under
pub fn capture_file_name(command: &str) -> String {
    let stem: Vec<String> = command
        .split_whitespace()
        .map(escape_word)
        .collect();
    format!("{}.{}", stem.join("_"), REPLAY_FILE_EXTENSION)
}

/// Percent-escape the characters that cannot appear in a file name
fn escape_word(word: &str) -> String {
    word.chars().fold(String::with_capacity(word.len()), |mut out, c| {
        match c {
            '%' => out.push_str("%25"),
            '/' => out.push_str("%2F"),
            '\\' => out.push_str("%5C"),
            _ => out.push(c),
        }
        out
    })
}

impl DeviceSession for ReplaySession {
    fn connect(&mut self) -> Result<(), SessionError> {
        if !self.dir.is_dir() {
            return Err(SessionError::ConnectionFailed(format!(
                "capture directory not found: {}",
                self.dir.display()
            )));
        }

        debug!("Replaying captures from {}", self.dir.display());
        self.connected = true;
        Ok(())
    }

    fn execute(&mut self, command: &str) -> Result<String, SessionError> {
        if !self.connected {
            return Err(SessionError::NotConnected);
        }

        let path = self.capture_path(command);
        std::fs::read_to_string(&path).map_err(|e| SessionError::DispatchFailed {
            command: command.to_string(),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}
