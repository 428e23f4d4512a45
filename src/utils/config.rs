//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for a single command dispatch
pub const DEFAULT_DISPATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default output file for the collect command
pub const DEFAULT_OUTPUT_FILE: &str = "bssid.csv";

/// Column header of the CSV record file, in field order
pub const CSV_HEADER: [&str; 5] = ["AP Name", "Location", "Band", "Interface Name", "BSSID"];

/// Extension of captured command output files used by the replay session
pub const REPLAY_FILE_EXTENSION: &str = "txt";

/// Command used by the HTTP session to verify the relay answers before any real work
pub const PROBE_COMMAND: &str = "show sysinfo";
