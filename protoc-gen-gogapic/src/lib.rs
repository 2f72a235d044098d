//! # protoc-gen-gogapic
//!
//! protoc plugin that generates Go GAPIC client wrappers. protoc writes a
//! serialized `CodeGeneratorRequest` to stdin and reads a serialized
//! `CodeGeneratorResponse` from stdout.
//!
//! ## Usage
//! ```bash
//! protoc --plugin=protoc-gen-gogapic --gogapic_out=out/dir foo.proto
//! ```

use anyhow::{Context, Result};
use std::io::{Read, Write};
use tracing::info;

pub mod cli;
pub mod config;

use config::Config;

/// Read a request from `input`, generate, and write the response to
/// `output`. Nothing is written unless generation succeeds.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, config: &Config) -> Result<()> {
    let mut request = Vec::new();
    input
        .read_to_end(&mut request)
        .context("Failed to read request")?;

    let response = gogapic_codegen::process(
        &request,
        &config.classifier(),
        &config.generator_options(),
    )
    .context("Failed to generate clients")?;

    output
        .write_all(&response)
        .and_then(|_| output.flush())
        .context("Failed to write response")?;

    info!(
        request_bytes = request.len(),
        response_bytes = response.len(),
        "Response written"
    );

    Ok(())
}
