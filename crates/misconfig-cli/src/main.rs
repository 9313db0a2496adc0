//! misconfig policy generator
//!
//! Reads a JSON or YAML configuration file, validates it and writes a
//! security policy with one rule per top-level key.

use anyhow::Result;
use clap::Parser;
use misconfig_policy::PolicyGenerator;
use std::process::ExitCode;
use tracing::{debug, error};

mod cli;

use cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose)?;
    debug!(
        "input={} output={} format={}",
        cli.input.display(),
        cli.output.display(),
        cli.format
    );

    match PolicyGenerator::default().run(&cli.input, &cli.output, cli.format) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            error!(kind = e.kind(), "An error occurred: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Initialize tracing subscriber, writing to stderr
fn init_tracing(verbose: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("misconfig=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("misconfig=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}
