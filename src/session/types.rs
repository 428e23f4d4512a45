//! Types for JSON-RPC communication with a controller CLI relay.
//!
//! The relay accepts `runCmds` requests carrying plain CLI commands and
//! answers with the text each command printed.

use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: RunCmdsParams,
    pub id: u64,
}

/// Parameters of a `runCmds` call
#[derive(Debug, Clone, Serialize)]
pub struct RunCmdsParams {
    pub version: u32,
    pub cmds: Vec<String>,
    pub format: String,
}

impl JsonRpcRequest {
    /// Create a `runCmds` request for a single command with text output
    ///
    /// # Arguments
    /// * `command` - CLI command to run
    /// * `id` - Request ID (for response correlation)
    pub fn run_command(command: &str, id: u64) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            method: "runCmds".to_string(),
            params: RunCmdsParams {
                version: 1,
                cmds: vec![command.to_string()],
                format: "text".to_string(),
            },
            id,
        }
    }
}

/// JSON-RPC 2.0 response structure
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub jsonrpc: String,
    pub id: u64,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Text output of one command
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOutput {
    #[serde(default)]
    pub output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = JsonRpcRequest::run_command("show ap summary", 7);
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["method"], "runCmds");
        assert_eq!(value["params"]["cmds"][0], "show ap summary");
        assert_eq!(value["params"]["format"], "text");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn test_response_with_error() {
        let response: JsonRpcResponse<Vec<CommandOutput>> = serde_json::from_str(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":1002,"message":"invalid command"}}"#,
        )
        .unwrap();

        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, 1002);
    }
}
