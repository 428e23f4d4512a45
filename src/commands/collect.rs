//! Collect command implementation.
//!
//! The collect command:
//! 1. Opens a session to the controller (HTTP relay or replay captures)
//! 2. Discovers APs from the AP summary
//! 3. Queries every AP radio for its BSSIDs
//! 4. Writes the records (CSV or JSON report)

use crate::aggregator::{collect_inventory, summarize, InventorySummary};
use crate::output::{to_report, write_records, write_report, OutputFormat};
use crate::parser::RadioBand;
use crate::session::{DeviceSession, HttpCliSession, HttpSessionConfig, ReplaySession};
use crate::utils::config::{DEFAULT_DISPATCH_TIMEOUT, DEFAULT_OUTPUT_FILE};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Arguments for the collect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CollectArgs {
    /// Controller CLI relay URL
    pub controller_url: Option<String>,

    /// Directory of captured command output (offline mode)
    pub replay_dir: Option<PathBuf>,

    pub username: Option<String>,
    pub password: Option<String>,

    /// Timeout for each command dispatch
    pub timeout: Duration,

    /// Accept self-signed controller certificates
    pub insecure: bool,

    /// Output file path
    pub output: PathBuf,

    pub format: OutputFormat,

    /// Bands queried per AP, in order
    pub bands: Vec<RadioBand>,

    /// Print per-band and per-AP counts to stdout
    pub print_summary: bool,
}

impl Default for CollectArgs {
    fn default() -> Self {
        Self {
            controller_url: None,
            replay_dir: None,
            username: None,
            password: None,
            timeout: DEFAULT_DISPATCH_TIMEOUT,
            insecure: false,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            format: OutputFormat::Csv,
            bands: RadioBand::ALL.to_vec(),
            print_summary: false,
        }
    }
}

impl CollectArgs {
    /// Human-readable name of the session source
    pub fn source_label(&self) -> String {
        match (&self.controller_url, &self.replay_dir) {
            (Some(url), _) => url.clone(),
            (None, Some(dir)) => format!("replay:{}", dir.display()),
            (None, None) => "<none>".to_string(),
        }
    }

    /// Build the session described by these arguments
    fn build_session(&self) -> Result<Box<dyn DeviceSession>> {
        match (&self.controller_url, &self.replay_dir) {
            (Some(url), None) => Ok(Box::new(HttpCliSession::new(HttpSessionConfig {
                url: url.clone(),
                username: self.username.clone(),
                password: self.password.clone(),
                timeout: self.timeout,
                accept_invalid_certs: self.insecure,
            }))),
            (None, Some(dir)) => Ok(Box::new(ReplaySession::new(dir))),
            _ => anyhow::bail!("Specify exactly one of a controller URL or a replay directory"),
        }
    }
}

/// Execute the collect command
///
/// **Public** - main entry point called from main.rs
///
/// Nothing is written when the run aborts (connect failure, failed or
/// empty AP summary). Per-unit command failures only reduce the output.
///
/// # Returns
/// Statistics of the finished run
pub fn execute_collect(args: CollectArgs) -> Result<InventorySummary> {
    let start_time = Instant::now();

    info!("Starting BSSID inventory from: {}", args.source_label());
    debug!("Bands: {:?}", args.bands);

    let mut session = args.build_session()?;

    let inventory = collect_inventory(&mut session, &args.bands)
        .with_context(|| format!("Inventory of {} aborted", args.source_label()))?;

    match args.format {
        OutputFormat::Csv => {
            write_records(&inventory.entries, &args.output)
                .context("Failed to write CSV records")?;
        }
        OutputFormat::Json => {
            let report = to_report(&inventory, &args.source_label());
            write_report(&report, &args.output).context("Failed to write JSON report")?;
        }
    }

    let summary = summarize(&inventory);

    info!(
        "✓ {} records written to {} ({} query units skipped)",
        summary.records,
        args.output.display(),
        summary.skipped_units
    );

    if args.print_summary {
        print_summary(&summary);
    }

    let elapsed = start_time.elapsed();
    info!("Inventory completed in {:.2}s", elapsed.as_secs_f64());

    Ok(summary)
}

/// Print per-band and per-AP counts
///
/// **Private** - internal helper for execute_collect
fn print_summary(summary: &InventorySummary) {
    println!("\n{}", "=".repeat(60));
    println!("BSSID INVENTORY SUMMARY");
    println!("{}", "=".repeat(60));
    println!("{}", summary.summary());
    println!();
    for (band, count) in &summary.per_band {
        println!("  {:<10} {:>6}", band.as_str(), count);
    }
    println!();
    for (ap, count) in &summary.per_ap {
        println!("  {:<40} {:>6}", ap, count);
    }
    println!("{}", "=".repeat(60));
}

/// Validate collect arguments
///
/// **Public** - can be called before execute_collect for early validation
pub fn validate_args(args: &CollectArgs) -> Result<()> {
    match (&args.controller_url, &args.replay_dir) {
        (Some(_), Some(_)) => {
            anyhow::bail!("Controller URL and replay directory are mutually exclusive")
        }
        (None, None) => anyhow::bail!("Either a controller URL or a replay directory is required"),
        _ => {}
    }

    if let Some(url) = &args.controller_url {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("Controller URL must start with http:// or https://");
        }
    }

    if args.password.is_some() && args.username.is_none() {
        anyhow::bail!("A password was given without a username");
    }

    if args.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    if args.bands.is_empty() {
        anyhow::bail!("At least one band is required");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}
