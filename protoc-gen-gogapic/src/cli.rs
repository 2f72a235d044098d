//! Command-line argument parsing.
//!
//! protoc starts plugins without arguments, so every flag here is optional
//! and the defaults reproduce plain plugin behavior.

use clap::Parser;

/// protoc-gen-gogapic - Go GAPIC client generator plugin for protoc
#[derive(Parser, Debug, Default)]
#[command(name = "protoc-gen-gogapic")]
#[command(about = "protoc plugin generating Go GAPIC client wrappers")]
#[command(version)]
pub struct Args {
    /// Path to a YAML configuration file
    #[arg(short, long, env = "GOGAPIC_CONFIG")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error). Logs go to stderr.
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Go package declared in generated files
    #[arg(long)]
    pub package_name: Option<String>,

    /// Year stamped into the license banner (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,
}
