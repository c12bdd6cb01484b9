//! Mutator planning
//!
//! Decides which mutators a field gets. The result is a list of structured
//! [`Mutator`] values; turning them into Rust is left to [`super::render`].

use super::oneof::OneofInfo;
use crate::naming;
use crate::types::{ElementType, ResolvedType, Shape, TypeResolver};
use crate::GeneratorError;
use prost_reflect::FieldDescriptor;

/// A mutator to emit for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutator {
    /// Proto name of the field the mutator was planned for
    pub proto_field: String,
    /// Method name, e.g. `set_name`
    pub method: String,
    /// What the method does
    pub shape: MutatorShape,
}

/// The mutator shapes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutatorShape {
    /// `set_<field>(value)` overwriting the stored value
    Set {
        /// Struct field identifier
        target: String,
        /// Resolved type of the whole field
        ty: ResolvedType,
    },
    /// `append_<field>(values)` extending a repeated field
    Append {
        /// Struct field identifier
        target: String,
        /// Element type of the list
        element: ElementType,
    },
    /// `set_<field>_key(key, val)` inserting one map entry
    MapEntry {
        /// Struct field identifier
        target: String,
        /// Key type
        key: ElementType,
        /// Value type
        value: ElementType,
    },
    /// `set_<field>(value)` storing a oneof case
    OneofCase {
        /// Struct field holding the oneof
        target: String,
        /// Path of the oneof enum
        enum_path: String,
        /// Variant for this member
        variant: String,
        /// Payload type
        payload: ElementType,
    },
}

impl MutatorShape {
    /// Short tag used in logs
    pub fn tag(&self) -> &'static str {
        match self {
            MutatorShape::Set { .. } => "set",
            MutatorShape::Append { .. } => "append",
            MutatorShape::MapEntry { .. } => "map-entry",
            MutatorShape::OneofCase { .. } => "oneof-case",
        }
    }
}

/// Plan the mutators of a field outside any real oneof
pub fn plan_field(
    resolver: &TypeResolver<'_>,
    field: &FieldDescriptor,
) -> Result<Vec<Mutator>, GeneratorError> {
    let ty = resolver.resolve(field)?;
    let stem = naming::method_stem(field.name());
    let target = naming::to_snake(field.name());
    let mut mutators = Vec::new();

    // prost already generates `set_<field>` for singular enum fields
    if matches!(ty.shape, Shape::Single(ElementType::Enum { .. })) {
        tracing::debug!(field = field.full_name(), "skipping enum field covered by prost");
        return Ok(mutators);
    }

    let extra = match &ty.shape {
        Shape::List(element) => Some(Mutator {
            proto_field: field.name().to_string(),
            method: format!("append_{}", stem),
            shape: MutatorShape::Append {
                target: target.clone(),
                element: element.clone(),
            },
        }),
        Shape::Map { key, value, .. } => Some(Mutator {
            proto_field: field.name().to_string(),
            method: format!("set_{}_key", stem),
            shape: MutatorShape::MapEntry {
                target: target.clone(),
                key: key.clone(),
                value: value.clone(),
            },
        }),
        Shape::Single(_) => None,
    };

    mutators.push(Mutator {
        proto_field: field.name().to_string(),
        method: format!("set_{}", stem),
        shape: MutatorShape::Set { target, ty },
    });
    mutators.extend(extra);

    Ok(mutators)
}

/// Plan the case setter of a oneof member
pub fn plan_oneof_member(
    resolver: &TypeResolver<'_>,
    oneof: &OneofInfo,
    field: &FieldDescriptor,
) -> Result<Mutator, GeneratorError> {
    let ty = resolver.resolve(field)?;
    let payload = match ty.shape {
        Shape::Single(element) => element,
        // protoc rejects repeated and map members
        _ => {
            return Err(GeneratorError::InvalidField {
                field: field.full_name().to_string(),
                reason: format!("member of oneof `{}` must be singular", oneof.name),
            })
        }
    };

    Ok(Mutator {
        proto_field: field.name().to_string(),
        method: format!("set_{}", naming::method_stem(field.name())),
        shape: MutatorShape::OneofCase {
            target: oneof.struct_field.clone(),
            enum_path: oneof.enum_path.clone(),
            variant: naming::to_upper_camel(field.name()),
            payload,
        },
    })
}
