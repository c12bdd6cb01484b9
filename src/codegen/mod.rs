//! Code generation modules for message mutators
//!
//! This module contains the walker that visits every message of a file and
//! collects one `impl` block of mutators per message.

pub mod mutator;
pub mod oneof;
pub mod render;

use crate::naming;
use crate::types::TypeResolver;
use crate::GeneratorError;
use mutator::Mutator;
use prost_reflect::MessageDescriptor;
use std::collections::HashSet;

/// Walks the messages of one file, emitting each message at most once
pub struct MessageWalker<'a> {
    file: &'a str,
    resolver: TypeResolver<'a>,
    visited: HashSet<String>,
    items: Vec<syn::Item>,
}

impl<'a> MessageWalker<'a> {
    /// Create a walker for `file`, resolving types through `resolver`
    pub fn new(file: &'a str, resolver: TypeResolver<'a>) -> Self {
        Self {
            file,
            resolver,
            visited: HashSet::new(),
            items: Vec::new(),
        }
    }

    /// Visit a message: nested messages first, then oneof members, then
    /// plain fields.
    pub fn walk(&mut self, message: &MessageDescriptor) -> Result<(), GeneratorError> {
        if !self.visited.insert(message.full_name().to_string()) {
            tracing::debug!(message = message.full_name(), "already visited");
            return Ok(());
        }

        for child in message.child_messages() {
            if child.is_map_entry() {
                continue;
            }
            self.walk(&child)?;
        }

        let mut mutators = Vec::new();

        for info in oneof::extract_oneofs(message, self.resolver.package()) {
            for field in &info.fields {
                mutators.push(mutator::plan_oneof_member(&self.resolver, &info, field)?);
            }
        }

        for field in message.fields() {
            if oneof::is_oneof_field(&field) {
                continue;
            }
            mutators.extend(mutator::plan_field(&self.resolver, &field)?);
        }

        if mutators.is_empty() {
            tracing::debug!(message = message.full_name(), "no mutators");
            return Ok(());
        }

        let item = self.render(message, &mutators)?;
        self.items.push(item);
        Ok(())
    }

    fn render(
        &self,
        message: &MessageDescriptor,
        mutators: &[Mutator],
    ) -> Result<syn::Item, GeneratorError> {
        let error = |field: &str, e: syn::Error| GeneratorError::RenderError {
            file: self.file.to_string(),
            message: message.full_name().to_string(),
            field: field.to_string(),
            reason: e.to_string(),
        };

        let mut methods = Vec::with_capacity(mutators.len());
        for m in mutators {
            tracing::debug!(
                message = message.full_name(),
                field = %m.proto_field,
                shape = m.shape.tag(),
                method = %m.method,
                "rendering mutator"
            );
            methods.push(render::render_mutator(m).map_err(|e| error(m.proto_field.as_str(), e))?);
        }

        let path = naming::resolve_path(self.resolver.package(), message.full_name());
        render::render_impl(&path, methods).map_err(|e| error("", e))
    }

    /// The rendered `impl` blocks, in visit order
    pub fn into_items(self) -> Vec<syn::Item> {
        self.items
    }
}
