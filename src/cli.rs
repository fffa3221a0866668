//! CLI argument parsing module for softup

use crate::config::DEFAULT_CONFIG_FILE;
use crate::registry::MAX_RETRIES;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-fetch timeout in seconds
const DEFAULT_TIMEOUT_SECS: &str = "30";

/// Parse a positive number of seconds
fn parse_timeout(s: &str) -> Result<Duration, String> {
    let secs: u64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid number of seconds: {}", s))?;
    if secs == 0 {
        return Err("timeout must be at least 1 second".to_string());
    }
    Ok(Duration::from_secs(secs))
}

/// Check tracked packages for new upstream releases
#[derive(Parser, Debug, Clone)]
#[command(
    name = "softup",
    version,
    about = "Check tracked packages for new upstream releases"
)]
pub struct CliArgs {
    /// Package configuration file (JSON)
    #[arg(default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Timeout for each upstream request, in seconds
    #[arg(long, value_name = "SECONDS", default_value = DEFAULT_TIMEOUT_SECS, value_parser = parse_timeout)]
    pub timeout: Duration,

    /// Retries for rate-limited or failed requests
    #[arg(long, default_value_t = MAX_RETRIES)]
    pub retries: u32,

    /// Output the report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Enable quiet mode - summary only
    #[arg(short, long)]
    pub quiet: bool,

    /// Do not draw a progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl CliArgs {
    /// Check if the progress bar should be drawn
    pub fn show_progress(&self) -> bool {
        !self.no_progress && !self.quiet && !self.json
    }
}
