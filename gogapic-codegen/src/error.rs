//! Error types for descriptor-to-source generation.

use thiserror::Error;

/// Errors that can occur while turning a descriptor set into client code.
///
/// All of these point at a request that a well-behaved protobuf compiler
/// would never produce; the generator rejects such input wholesale.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A method references a message absent from the type table.
    #[error("Unknown type reference: {0}")]
    UnknownType(String),

    /// A message or service has no owning file in the index.
    #[error("No owning file for descriptor: {0}")]
    MissingOwner(String),

    /// The owning file declares no `go_package` option.
    #[error("File {0} is missing the go_package option")]
    MissingGoPackage(String),

    /// A source location path points past the end of a descriptor list.
    #[error("Source location {path:?} out of range in file {file}")]
    LocationOutOfRange { file: String, path: Vec<i32> },

    /// The request bytes are not a valid `CodeGeneratorRequest`.
    #[error("Failed to decode request: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The response could not be serialized.
    #[error("Failed to encode response: {0}")]
    Encode(#[from] prost::EncodeError),
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, CodegenError>;
