//! softup - upstream release checker CLI
//!
//! Reads a JSON file of tracked packages, checks each one on its upstream
//! registry and reports new stable and pre-release versions.

use clap::Parser;
use softup::cli::CliArgs;
use softup::config::PackageConfig;
use softup::error::AppError;
use softup::logging::init_cli_logger;
use softup::orchestrator::Orchestrator;
use softup::output::{create_formatter, OutputConfig};
use softup::registry::{HttpClient, Registry};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let output_config = OutputConfig::from_cli(args.json, args.verbose, args.quiet);
    init_cli_logger(output_config.verbosity);

    match run(args, output_config).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs, output_config: OutputConfig) -> anyhow::Result<ExitCode> {
    let (mut config, orchestrator) = prepare(&args)?;
    let report = orchestrator.run(&mut config.packages).await;

    let formatter = create_formatter(output_config);
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    if report.has_failures() {
        // Partial success - some packages could not be checked
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Load the configuration and build the runner; any failure here is fatal
fn prepare(args: &CliArgs) -> Result<(PackageConfig, Orchestrator), AppError> {
    debug!(config = %args.config.display(), "loading configuration");
    let config = PackageConfig::load(&args.config)?;

    let client = HttpClient::with_timeout(args.timeout)?.with_max_retries(args.retries);
    let orchestrator =
        Orchestrator::new(Registry::new(client)).with_progress(args.show_progress());

    Ok((config, orchestrator))
}
