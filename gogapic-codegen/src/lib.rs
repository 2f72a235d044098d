//! # gogapic Codegen
//!
//! Turns protobuf service descriptors into Go GAPIC client wrappers.
//!
//! One run is a single synchronous pass:
//!
//! 1. [`index::DescriptorIndex`] indexes every file of the request once.
//! 2. Each service of each requested file goes through
//!    [`generator::generate_service`], which emits the client scaffolding,
//!    one wrapper per method (unary or long-running), and the companion
//!    operation types.
//! 3. [`assembler::commit`] wraps the result into a header and a body.
//!
//! [`plugin::process`] drives the whole thing from serialized request bytes
//! to serialized response bytes.

pub mod printer;

pub mod assembler;
pub mod classify;
pub mod error;
pub mod generator;
pub mod imports;
pub mod index;
pub mod naming;
pub mod plugin;

pub use assembler::{GeneratedFile, GeneratorOptions};
pub use classify::{MethodClassifier, OutputTypeMarker, LONG_RUNNING_OPERATION};
pub use error::{CodegenError, Result};
pub use imports::{ImportGrouping, ImportSpec};
pub use plugin::{generate, process, to_response};
