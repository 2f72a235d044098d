//! # protoc-gen-gogapic
//!
//! Entry point: parse flags, set up stderr logging, load configuration,
//! then run one generation pass from stdin to stdout. Any failure exits
//! non-zero with nothing on stdout.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use protoc_gen_gogapic::cli::Args;
use protoc_gen_gogapic::config::Config;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Initialize logging
    if args.log_json {
        gogapic_common::init_logging_json(&args.log_level)?;
    } else {
        gogapic_common::init_logging(&args.log_level)?;
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting protoc-gen-gogapic"
    );

    // Load configuration
    let config = match &args.config {
        Some(config_path) => match Config::load(config_path) {
            Ok(cfg) => {
                info!(config_path = %config_path, "Configuration loaded");
                cfg.with_cli_overrides(&args)
            }
            Err(e) => {
                error!(error = %e, path = %config_path, "Failed to load configuration");
                return Err(e);
            }
        },
        None => Config::default().with_cli_overrides(&args),
    };

    config.validate().map_err(anyhow::Error::msg)?;

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    if let Err(e) = protoc_gen_gogapic::run(stdin, stdout, &config) {
        error!(error = %e, "Generation failed");
        return Err(e);
    }

    Ok(())
}
