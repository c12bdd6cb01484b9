//! protoc-gen-prost-setters library
//!
//! This crate provides the code generation logic for emitting setter,
//! append and map-entry mutators for the structs prost generates from
//! Protocol Buffer definitions.

#![deny(warnings)]
#![deny(missing_docs)]

pub mod codegen;
pub mod config;
pub mod generator;
pub mod naming;
pub mod types;

use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use thiserror::Error;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Failed to decode the protobuf request
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The descriptor set could not be resolved into a descriptor pool
    #[error("Invalid descriptor set: {0}")]
    DescriptorError(String),

    /// Invalid plugin configuration or parameters
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A map field whose entry message does not have exactly two fields
    #[error("Malformed map entry for field `{field}` of message `{message}`: expected 2 fields, found {count}")]
    MalformedMapEntry {
        /// Full name of the message declaring the map field
        message: String,
        /// Name of the map field
        field: String,
        /// Number of fields found in the entry message
        count: usize,
    },

    /// A field that violates a descriptor invariant
    #[error("Invalid field `{field}`: {reason}")]
    InvalidField {
        /// Full name of the field
        field: String,
        /// What is wrong with it
        reason: String,
    },

    /// A rendered mutator failed to parse as Rust
    #[error("Failed to render mutator for `{message}.{field}` in {file}: {reason}")]
    RenderError {
        /// Proto file being generated
        file: String,
        /// Full name of the message
        message: String,
        /// Field the mutator was rendered for
        field: String,
        /// Underlying parse error
        reason: String,
    },
}

/// Generate setters from a protobuf CodeGeneratorRequest
///
/// This is the main entry point for the code generator.
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate(request)
}

/// Generate setters from raw protobuf bytes
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    generator::generate_from_bytes(bytes)
}
