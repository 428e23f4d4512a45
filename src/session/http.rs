//! HTTP session relaying CLI commands to the controller.

use super::types::{CommandOutput, JsonRpcError, JsonRpcRequest, JsonRpcResponse};
use super::DeviceSession;
use crate::utils::config::{DEFAULT_DISPATCH_TIMEOUT, PROBE_COMMAND};
use crate::utils::error::SessionError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::time::Duration;

/// Connection settings for [`HttpCliSession`]
#[derive(Debug, Clone)]
pub struct HttpSessionConfig {
    /// Relay endpoint URL
    pub url: String,

    pub username: Option<String>,
    pub password: Option<String>,

    /// Timeout applied to every command dispatch
    pub timeout: Duration,

    /// Accept self-signed controller certificates
    pub accept_invalid_certs: bool,
}

impl Default for HttpSessionConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: None,
            password: None,
            timeout: DEFAULT_DISPATCH_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

/// Session that sends each command as a JSON-RPC `runCmds` call
pub struct HttpCliSession {
    config: HttpSessionConfig,
    client: Option<Client>,
    next_id: u64,
}

impl HttpCliSession {
    /// Create a session; nothing is sent until [`connect`](DeviceSession::connect)
    pub fn new(config: HttpSessionConfig) -> Self {
        Self {
            config,
            client: None,
            next_id: 1,
        }
    }

    /// Send one command and return its text output
    fn dispatch(&mut self, command: &str) -> Result<String, SessionError> {
        let client = self.client.as_ref().ok_or(SessionError::NotConnected)?;

        let request = JsonRpcRequest::run_command(command, self.next_id);
        self.next_id += 1;

        debug!("RPC request: {:?}", request);

        let mut builder = client.post(&self.config.url).json(&request);
        if let Some(username) = &self.config.username {
            builder = builder.basic_auth(username, self.config.password.as_ref());
        }

        let response = builder.send().map_err(|e| SessionError::DispatchFailed {
            command: command.to_string(),
            reason: e.to_string(),
        })?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(SessionError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let rpc_response: JsonRpcResponse<Vec<CommandOutput>> =
            response.json().map_err(SessionError::RequestFailed)?;

        if let Some(error) = rpc_response.error {
            return Err(map_rpc_error(error, command));
        }

        rpc_response
            .result
            .and_then(|outputs| outputs.into_iter().next())
            .map(|out| out.output)
            .ok_or_else(|| SessionError::InvalidResponse("Missing result field".to_string()))
    }
}

impl DeviceSession for HttpCliSession {
    fn connect(&mut self) -> Result<(), SessionError> {
        info!("Connecting to controller at {}", self.config.url);

        let client = Client::builder()
            .timeout(self.config.timeout)
            .danger_accept_invalid_certs(self.config.accept_invalid_certs)
            .build()
            .map_err(SessionError::RequestFailed)?;
        self.client = Some(client);

        if let Err(e) = self.dispatch(PROBE_COMMAND) {
            self.client = None;
            return Err(SessionError::ConnectionFailed(e.to_string()));
        }

        debug!("Controller relay answered probe command");
        Ok(())
    }

    fn execute(&mut self, command: &str) -> Result<String, SessionError> {
        self.dispatch(command)
    }
}

/// Map JSON-RPC error to our error type
fn map_rpc_error(error: JsonRpcError, command: &str) -> SessionError {
    match error.code {
        // Invalid or incomplete CLI command
        1002 | 1003 => SessionError::CommandRejected {
            command: command.to_string(),
            reason: error.message,
        },
        -32601 => SessionError::InvalidResponse("runCmds not supported by endpoint".to_string()),
        _ => SessionError::DispatchFailed {
            command: command.to_string(),
            reason: format!("{}: {}", error.code, error.message),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_before_connect() {
        let mut session = HttpCliSession::new(HttpSessionConfig {
            url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        });

        assert!(matches!(
            session.execute("show ap summary"),
            Err(SessionError::NotConnected)
        ));
    }

    #[test]
    fn test_map_rpc_error_rejected_command() {
        let error = JsonRpcError {
            code: 1002,
            message: "Incorrect usage".to_string(),
            data: None,
        };

        assert!(matches!(
            map_rpc_error(error, "show ap wlan 802.11a X"),
            SessionError::CommandRejected { .. }
        ));
    }

    #[test]
    fn test_map_rpc_error_other() {
        let error = JsonRpcError {
            code: -32000,
            message: "session lost".to_string(),
            data: None,
        };

        let mapped = map_rpc_error(error, "show ap summary");
        assert!(mapped.to_string().contains("session lost"));
    }
}
