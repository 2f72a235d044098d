//! # gogapic Common
//!
//! Shared utilities for the gogapic generator components.
//!
//! ## Logging
//!
//! A protoc plugin owns stdout for its response, so every subscriber
//! installed here writes to stderr.
//!
//! ```rust,no_run
//! use gogapic_common::init_logging;
//!
//! init_logging("warn").unwrap();
//! tracing::info!("generator ready");
//! ```

pub mod logging;

pub use logging::{init_logging, init_logging_json};
