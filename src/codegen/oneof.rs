//! Oneof extraction
//!
//! prost turns every real oneof into an enum named after the oneof, placed
//! in the module of its message, and stores it in an `Option` field of the
//! message struct. Synthetic oneofs (created by protoc for proto3
//! `optional` fields) are not unions and are skipped here.

use crate::naming;
use crate::types::{has_optional_keyword, in_real_oneof};
use prost_reflect::{FieldDescriptor, MessageDescriptor, OneofDescriptor};

/// Information about a oneof and its union members
#[derive(Debug)]
pub struct OneofInfo {
    /// Name of the oneof
    pub name: String,
    /// Struct field holding the active case, e.g. `choice`
    pub struct_field: String,
    /// Path of the generated enum, e.g. `sample::Choice`
    pub enum_path: String,
    /// Members, excluding fields declared with `optional`
    pub fields: Vec<FieldDescriptor>,
}

/// Whether every member carries the proto3 `optional` keyword
pub fn is_synthetic(oneof: &OneofDescriptor) -> bool {
    oneof.fields().all(|f| has_optional_keyword(&f))
}

/// Extract real oneofs from a message, in declaration order
pub fn extract_oneofs(message: &MessageDescriptor, package: &str) -> Vec<OneofInfo> {
    message
        .oneofs()
        .filter(|oneof| !is_synthetic(oneof))
        .map(|oneof| OneofInfo {
            name: oneof.name().to_string(),
            struct_field: naming::to_snake(oneof.name()),
            enum_path: naming::oneof_enum_path(package, message.full_name(), oneof.name()),
            fields: oneof.fields().filter(|f| !has_optional_keyword(f)).collect(),
        })
        .collect()
}

/// Check if a field belongs to a real oneof
pub fn is_oneof_field(field: &FieldDescriptor) -> bool {
    in_real_oneof(field)
}
