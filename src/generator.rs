//! Main code generation orchestration
//!
//! Builds a descriptor pool from the request, then writes one setters file
//! per proto file that protoc asked us to generate.

use crate::codegen::MessageWalker;
use crate::config::Config;
use crate::types::TypeResolver;
use crate::GeneratorError;
use prost::Message;
use prost_reflect::{DescriptorPool, FileDescriptor};
use prost_types::compiler::code_generator_response::{Feature, File};
use prost_types::compiler::{CodeGeneratorRequest, CodeGeneratorResponse};
use prost_types::FileDescriptorSet;

/// Marker line at the top of every generated file
pub const GENERATED_MARKER: &str = "// Code generated by protoc-gen-prost-setters. DO NOT EDIT.";

/// Generate setter files from a CodeGeneratorRequest
pub fn generate(request: CodeGeneratorRequest) -> Result<CodeGeneratorResponse, GeneratorError> {
    let config = Config::parse(request.parameter.as_deref())?;

    let pool = DescriptorPool::from_file_descriptor_set(FileDescriptorSet {
        file: request.proto_file,
    })
    .map_err(|e| GeneratorError::DescriptorError(e.to_string()))?;

    let mut files = Vec::new();
    for name in &request.file_to_generate {
        let file = pool.get_file_by_name(name).ok_or_else(|| {
            GeneratorError::InvalidConfig(format!("file `{}` is not part of the request", name))
        })?;

        if let Some(generated) = generate_file(&file, &config)? {
            files.push(generated);
        }
    }

    Ok(CodeGeneratorResponse {
        file: files,
        supported_features: Some(Feature::Proto3Optional as u64),
        ..Default::default()
    })
}

/// Generate setter files from raw CodeGeneratorRequest bytes
pub fn generate_from_bytes(bytes: &[u8]) -> Result<CodeGeneratorResponse, GeneratorError> {
    let request = CodeGeneratorRequest::decode(bytes)
        .map_err(|e| GeneratorError::DecodeError(e.to_string()))?;
    generate(request)
}

/// Generate the setters file for one proto file
///
/// Returns None if the file declares no messages.
pub fn generate_file(
    file: &FileDescriptor,
    config: &Config,
) -> Result<Option<File>, GeneratorError> {
    if file.messages().next().is_none() {
        tracing::debug!(file = file.name(), "no messages, skipping");
        return Ok(None);
    }

    let resolver = TypeResolver::new(file.package_name(), config.map_type);
    let mut walker = MessageWalker::new(file.name(), resolver);
    for message in file.messages() {
        walker.walk(&message)?;
    }

    let syntax = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: walker.into_items(),
    };

    let mut content = String::new();
    content.push_str(GENERATED_MARKER);
    content.push('\n');
    content.push_str(&format!("// source: {}\n", file.name()));
    content.push_str(&format!("// package: {}\n", file.package_name()));
    if !syntax.items.is_empty() {
        content.push('\n');
        content.push_str(&prettyplease::unparse(&syntax));
    }

    let name = output_name(file.name(), &config.file_suffix);
    tracing::info!(file = file.name(), output = %name, "generated setters");

    Ok(Some(File {
        name: Some(name),
        content: Some(content),
        ..Default::default()
    }))
}

/// Name of the generated file, e.g. `foo/bar.proto` -> `foo/bar.setters.rs`
pub fn output_name(proto_name: &str, suffix: &str) -> String {
    let stem = proto_name.strip_suffix(".proto").unwrap_or(proto_name);
    format!("{}{}", stem, suffix)
}
