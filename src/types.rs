//! Type resolution from protobuf fields to the Rust types prost generates
//!
//! A field resolves to a [`ResolvedType`]: the element type computed from
//! the field kind, wrapped once as a list or map, plus whether the setter
//! parameter is presence-wrapped in `Option`.

use crate::config::MapType;
use crate::naming;
use crate::GeneratorError;
use prost_reflect::{Cardinality, FieldDescriptor, Kind, MessageDescriptor};
use std::collections::HashSet;

/// Fixed-width scalar types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar {
    /// `bool`
    Bool,
    /// `i32` (int32, sint32, sfixed32)
    I32,
    /// `u32` (uint32, fixed32)
    U32,
    /// `i64` (int64, sint64, sfixed64)
    I64,
    /// `u64` (uint64, fixed64)
    U64,
    /// `f32`
    F32,
    /// `f64`
    F64,
}

impl Scalar {
    /// Rust spelling of the scalar
    pub fn rust_type(self) -> &'static str {
        match self {
            Scalar::Bool => "bool",
            Scalar::I32 => "i32",
            Scalar::U32 => "u32",
            Scalar::I64 => "i64",
            Scalar::U64 => "u64",
            Scalar::F32 => "f32",
            Scalar::F64 => "f64",
        }
    }
}

/// The type of a single value, before list/map wrapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementType {
    /// Placeholder for weak fields
    Unit,
    /// Fixed-width scalar
    Scalar(Scalar),
    /// UTF-8 string
    String,
    /// Byte sequence
    Bytes,
    /// Enum, accepted by type and stored as `i32`
    Enum {
        /// Rust path relative to the package module
        path: String,
    },
    /// Message or group
    Message {
        /// Rust path relative to the package module
        path: String,
        /// prost stores the field as `Box<_>` to break a recursive cycle
        boxed: bool,
    },
}

impl ElementType {
    /// Rust type of one element as accepted by a setter
    pub fn rust_type(&self) -> String {
        match self {
            ElementType::Unit => "()".to_string(),
            ElementType::Scalar(scalar) => scalar.rust_type().to_string(),
            ElementType::String => "::prost::alloc::string::String".to_string(),
            ElementType::Bytes => "::prost::alloc::vec::Vec<u8>".to_string(),
            ElementType::Enum { path } | ElementType::Message { path, .. } => path.clone(),
        }
    }

    /// Whether prost stores this element as a raw `i32`
    pub fn is_enum(&self) -> bool {
        matches!(self, ElementType::Enum { .. })
    }
}

/// Wrapping applied to the element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A singular field
    Single(ElementType),
    /// A repeated field
    List(ElementType),
    /// A map field
    Map {
        /// Key type
        key: ElementType,
        /// Value type
        value: ElementType,
        /// Map collection prost generates
        kind: MapType,
    },
}

/// Resolved setter type of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    /// Element type and wrapping
    pub shape: Shape,
    /// The parameter is `Option<T>` because the field tracks presence
    pub by_reference: bool,
}

impl ResolvedType {
    fn single(element: ElementType, by_reference: bool) -> Self {
        Self {
            shape: Shape::Single(element),
            by_reference,
        }
    }

    /// Rust type of the whole-field setter parameter
    pub fn param_type(&self) -> String {
        match &self.shape {
            Shape::Single(ElementType::Message { path, .. }) => {
                format!("::core::option::Option<{}>", path)
            }
            Shape::Single(element) if self.by_reference => {
                format!("::core::option::Option<{}>", element.rust_type())
            }
            Shape::Single(element) => element.rust_type(),
            Shape::List(element) => format!("::prost::alloc::vec::Vec<{}>", element.rust_type()),
            Shape::Map { key, value, kind } => {
                let map = match kind {
                    MapType::HashMap => "::std::collections::HashMap",
                    MapType::BTreeMap => "::prost::alloc::collections::BTreeMap",
                };
                format!("{}<{}, {}>", map, key.rust_type(), value.rust_type())
            }
        }
    }

    /// The element type of a singular field
    pub fn element(&self) -> Option<&ElementType> {
        match &self.shape {
            Shape::Single(element) => Some(element),
            _ => None,
        }
    }
}

/// Whether the field is declared `[weak = true]`
pub fn is_weak(field: &FieldDescriptor) -> bool {
    field
        .field_descriptor_proto()
        .options
        .as_ref()
        .map(|o| o.weak())
        .unwrap_or(false)
}

/// Whether the field was declared with the proto3 `optional` keyword
pub fn has_optional_keyword(field: &FieldDescriptor) -> bool {
    field.field_descriptor_proto().proto3_optional()
}

/// Whether the field is a member of a real (non-synthetic) oneof
pub fn in_real_oneof(field: &FieldDescriptor) -> bool {
    field.containing_oneof().is_some() && !has_optional_keyword(field)
}

/// Resolves field types relative to one package module
#[derive(Debug, Clone)]
pub struct TypeResolver<'a> {
    package: &'a str,
    map_type: MapType,
}

impl<'a> TypeResolver<'a> {
    /// Create a resolver for the module generated for `package`
    pub fn new(package: &'a str, map_type: MapType) -> Self {
        Self { package, map_type }
    }

    /// The package the resolver writes paths relative to
    pub fn package(&self) -> &str {
        self.package
    }

    /// Resolve the setter type of a field
    pub fn resolve(&self, field: &FieldDescriptor) -> Result<ResolvedType, GeneratorError> {
        if is_weak(field) {
            return Ok(ResolvedType::single(ElementType::Unit, false));
        }

        if field.is_map() {
            return self.resolve_map(field);
        }

        let (element, by_reference) = self.element(field);

        if field.is_list() {
            return Ok(ResolvedType {
                shape: Shape::List(element),
                by_reference: false,
            });
        }

        let element = match element {
            ElementType::Message { path, .. } => {
                let boxed = match field.kind() {
                    Kind::Message(target) => {
                        is_recursive(&target, field.parent_message().full_name())
                    }
                    _ => false,
                };
                ElementType::Message { path, boxed }
            }
            other => other,
        };

        Ok(ResolvedType::single(element, by_reference))
    }

    /// Compute the element type and presence flag of a field
    fn element(&self, field: &FieldDescriptor) -> (ElementType, bool) {
        let mut by_reference = field.cardinality() == Cardinality::Optional
            && field.supports_presence()
            && !in_real_oneof(field);

        let element = match field.kind() {
            Kind::Bool => ElementType::Scalar(Scalar::Bool),
            Kind::Int32 | Kind::Sint32 | Kind::Sfixed32 => ElementType::Scalar(Scalar::I32),
            Kind::Uint32 | Kind::Fixed32 => ElementType::Scalar(Scalar::U32),
            Kind::Int64 | Kind::Sint64 | Kind::Sfixed64 => ElementType::Scalar(Scalar::I64),
            Kind::Uint64 | Kind::Fixed64 => ElementType::Scalar(Scalar::U64),
            Kind::Float => ElementType::Scalar(Scalar::F32),
            Kind::Double => ElementType::Scalar(Scalar::F64),
            Kind::String => ElementType::String,
            Kind::Bytes => ElementType::Bytes,
            Kind::Enum(target) => ElementType::Enum {
                path: naming::resolve_path(self.package, target.full_name()),
            },
            Kind::Message(target) => {
                by_reference = false;
                ElementType::Message {
                    path: naming::resolve_path(self.package, target.full_name()),
                    boxed: false,
                }
            }
        };

        (element, by_reference)
    }

    fn resolve_map(&self, field: &FieldDescriptor) -> Result<ResolvedType, GeneratorError> {
        let malformed = |count| GeneratorError::MalformedMapEntry {
            message: field.parent_message().full_name().to_string(),
            field: field.name().to_string(),
            count,
        };

        let Kind::Message(entry) = field.kind() else {
            return Err(malformed(0));
        };

        let entry_fields: Vec<FieldDescriptor> = entry.fields().collect();
        let [key, value] = entry_fields.as_slice() else {
            return Err(malformed(entry_fields.len()));
        };

        // Map keys and values are never presence-wrapped or boxed
        let (key, _) = self.element(key);
        let (value, _) = self.element(value);

        Ok(ResolvedType {
            shape: Shape::Map {
                key,
                value,
                kind: self.map_type,
            },
            by_reference: false,
        })
    }
}

/// Whether `parent` is reachable from `target` through singular message
/// fields, in which case prost boxes the field.
pub fn is_recursive(target: &MessageDescriptor, parent: &str) -> bool {
    let mut visited = HashSet::new();
    let mut stack = vec![target.clone()];

    while let Some(message) = stack.pop() {
        if message.full_name() == parent {
            return true;
        }
        if !visited.insert(message.full_name().to_string()) {
            continue;
        }
        for field in message.fields() {
            if field.is_list() || field.is_map() {
                continue;
            }
            if let Kind::Message(next) = field.kind() {
                stack.push(next);
            }
        }
    }

    false
}
