//! WLC BSSID Inventory CLI
//!
//! Lists every BSSID broadcast by the access points of a wireless LAN
//! controller and writes them as CSV or a JSON report.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use wlc_bssid_inventory::commands::{
    display_version, execute_collect, validate_args, validate_report_file, CollectArgs,
};
use wlc_bssid_inventory::output::OutputFormat;
use wlc_bssid_inventory::parser::RadioBand;
use wlc_bssid_inventory::utils::config::DEFAULT_OUTPUT_FILE;

/// WLC BSSID Inventory - BSSIDs per AP, band and interface
#[derive(Parser, Debug)]
#[command(name = "wlc-bssid")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Output format flag
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Json,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Collect the BSSID inventory from a controller
    Collect {
        /// Controller CLI relay URL
        #[arg(short, long, env = "WLC_URL", conflicts_with = "replay")]
        url: Option<String>,

        /// Replay captured command output from this directory instead of connecting
        #[arg(long)]
        replay: Option<PathBuf>,

        /// Controller username
        #[arg(long, env = "WLC_USERNAME")]
        username: Option<String>,

        /// Controller password
        #[arg(long, env = "WLC_PASSWORD", hide_env_values = true)]
        password: Option<String>,

        /// Per-command timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,

        /// Accept self-signed controller certificates
        #[arg(long)]
        insecure: bool,

        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Output format (defaults to the output file extension)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Bands to query, comma separated (default: 802.11a,802.11b)
        #[arg(short, long = "band", value_delimiter = ',')]
        bands: Vec<RadioBand>,

        /// Print per-band and per-AP counts to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a CSV record file or JSON report
    Validate {
        /// Path to the inventory file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Collect {
            url,
            replay,
            username,
            password,
            timeout,
            insecure,
            output,
            format,
            bands,
            summary,
        } => {
            let format = match format {
                Some(FormatArg::Csv) => OutputFormat::Csv,
                Some(FormatArg::Json) => OutputFormat::Json,
                None => OutputFormat::from_path(&output),
            };

            let bands = if bands.is_empty() {
                RadioBand::ALL.to_vec()
            } else {
                bands
            };

            let args = CollectArgs {
                controller_url: url,
                replay_dir: replay,
                username,
                password,
                timeout: Duration::from_secs(timeout),
                insecure,
                output,
                format,
                bands,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_collect(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
