//! protoc-gen-prost-setters - A protoc plugin for generating prost setters
//!
//! This binary reads a CodeGeneratorRequest from stdin and writes a
//! CodeGeneratorResponse to stdout, following the protoc plugin protocol.

use prost::Message;
use prost_types::compiler::CodeGeneratorResponse;
use std::io::{self, Read, Write};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter directives
const LOG_ENV: &str = "PROTOC_GEN_PROST_SETTERS_LOG";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("protoc-gen-prost-setters: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    // stdout carries the response, so logs go to stderr
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;

    let response = protoc_gen_prost_setters::generate_from_bytes(&buf).unwrap_or_else(|e| {
        tracing::error!(error = %e, "generation failed");
        CodeGeneratorResponse {
            error: Some(e.to_string()),
            ..Default::default()
        }
    });

    tracing::info!(files = response.file.len(), "writing response");
    for f in &response.file {
        tracing::debug!(name = f.name.as_deref().unwrap_or("<unnamed>"), "generated file");
    }

    let mut out = Vec::new();
    response.encode(&mut out)?;
    io::stdout().write_all(&out)?;

    Ok(())
}
