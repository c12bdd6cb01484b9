//! Descriptor builders shared by the integration tests

#![allow(dead_code)]

use prost_types::field_descriptor_proto::{Label, Type};
use prost_types::{
    compiler::CodeGeneratorRequest, DescriptorProto, EnumDescriptorProto,
    EnumValueDescriptorProto, FieldDescriptorProto, FileDescriptorProto, MessageOptions,
    OneofDescriptorProto,
};

/// A singular field of a scalar type
pub fn scalar(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Optional.into()),
        r#type: Some(ty.into()),
        ..Default::default()
    }
}

/// A repeated field of a scalar type
pub fn repeated(name: &str, number: i32, ty: Type) -> FieldDescriptorProto {
    FieldDescriptorProto {
        label: Some(Label::Repeated.into()),
        ..scalar(name, number, ty)
    }
}

/// A singular field referencing a message or enum by fully-qualified name
pub fn reference(name: &str, number: i32, ty: Type, type_name: &str) -> FieldDescriptorProto {
    FieldDescriptorProto {
        type_name: Some(type_name.to_string()),
        ..scalar(name, number, ty)
    }
}

/// A proto3 `optional` field; `oneof_index` must point at its synthetic oneof
pub fn optional(name: &str, number: i32, ty: Type, oneof_index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(oneof_index),
        proto3_optional: Some(true),
        ..scalar(name, number, ty)
    }
}

/// A member of a real oneof
pub fn member(name: &str, number: i32, ty: Type, oneof_index: i32) -> FieldDescriptorProto {
    FieldDescriptorProto {
        oneof_index: Some(oneof_index),
        ..scalar(name, number, ty)
    }
}

/// A oneof declaration
pub fn oneof(name: &str) -> OneofDescriptorProto {
    OneofDescriptorProto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

/// A map field plus the entry message it needs, nested in `parent`
pub fn map(
    parent: &str,
    name: &str,
    number: i32,
    key: FieldDescriptorProto,
    value: FieldDescriptorProto,
) -> (FieldDescriptorProto, DescriptorProto) {
    let entry_name = format!("{}Entry", heck::AsUpperCamelCase(name));
    let field = FieldDescriptorProto {
        name: Some(name.to_string()),
        number: Some(number),
        label: Some(Label::Repeated.into()),
        r#type: Some(Type::Message.into()),
        type_name: Some(format!("{}.{}", parent, entry_name)),
        ..Default::default()
    };
    let entry = DescriptorProto {
        name: Some(entry_name),
        field: vec![key, value],
        options: Some(MessageOptions {
            map_entry: Some(true),
            ..Default::default()
        }),
        ..Default::default()
    };
    (field, entry)
}

/// A message with the given fields
pub fn message(name: &str, field: Vec<FieldDescriptorProto>) -> DescriptorProto {
    DescriptorProto {
        name: Some(name.to_string()),
        field,
        ..Default::default()
    }
}

/// A proto3 file
pub fn file(name: &str, package: &str, message_type: Vec<DescriptorProto>) -> FileDescriptorProto {
    FileDescriptorProto {
        name: Some(name.to_string()),
        package: Some(package.to_string()),
        message_type,
        syntax: Some("proto3".to_string()),
        ..Default::default()
    }
}

/// A request generating the first file, with the rest as dependencies
pub fn request(files: Vec<FileDescriptorProto>) -> CodeGeneratorRequest {
    CodeGeneratorRequest {
        file_to_generate: vec![files[0].name.clone().unwrap_or_default()],
        proto_file: files,
        ..Default::default()
    }
}

/// `example/sample.proto`:
///
/// ```proto
/// message Sample {
///   string name = 1;
///   repeated string tags = 2;
///   map<string, string> attrs = 3;
///   oneof choice { int32 a = 4; string b = 5; }
/// }
/// ```
pub fn sample_file() -> FileDescriptorProto {
    let (attrs, attrs_entry) = map(
        ".example.Sample",
        "attrs",
        3,
        scalar("key", 1, Type::String),
        scalar("value", 2, Type::String),
    );

    let mut sample = message(
        "Sample",
        vec![
            scalar("name", 1, Type::String),
            repeated("tags", 2, Type::String),
            attrs,
            member("a", 4, Type::Int32, 0),
            member("b", 5, Type::String, 0),
        ],
    );
    sample.nested_type.push(attrs_entry);
    sample.oneof_decl.push(oneof("choice"));

    file("example/sample.proto", "example", vec![sample])
}

/// `inventory/node.proto`:
///
/// ```proto
/// enum Color { COLOR_UNSPECIFIED = 0; COLOR_RED = 1; COLOR_BLUE = 2; }
///
/// message Node {
///   Node parent = 1;
///   optional uint32 weight = 2;
///   optional bytes data = 3;
///   Leaf leaf = 4;
///   repeated Color colors = 5;
///   map<string, Color> palette = 6;
///   oneof kind { Color color = 7; Leaf detail = 8; }
///   Color shade = 9;
/// }
///
/// message Leaf { string label = 1; }
/// ```
pub fn inventory_file() -> FileDescriptorProto {
    let (palette, palette_entry) = map(
        ".inventory.Node",
        "palette",
        6,
        scalar("key", 1, Type::String),
        reference("value", 2, Type::Enum, ".inventory.Color"),
    );

    let mut node = message(
        "Node",
        vec![
            reference("parent", 1, Type::Message, ".inventory.Node"),
            optional("weight", 2, Type::Uint32, 1),
            optional("data", 3, Type::Bytes, 2),
            reference("leaf", 4, Type::Message, ".inventory.Leaf"),
            FieldDescriptorProto {
                label: Some(Label::Repeated.into()),
                ..reference("colors", 5, Type::Enum, ".inventory.Color")
            },
            palette,
            FieldDescriptorProto {
                type_name: Some(".inventory.Color".to_string()),
                ..member("color", 7, Type::Enum, 0)
            },
            FieldDescriptorProto {
                type_name: Some(".inventory.Leaf".to_string()),
                ..member("detail", 8, Type::Message, 0)
            },
            reference("shade", 9, Type::Enum, ".inventory.Color"),
        ],
    );
    node.nested_type.push(palette_entry);
    node.oneof_decl
        .extend([oneof("kind"), oneof("_weight"), oneof("_data")]);

    let mut inventory = file(
        "inventory/node.proto",
        "inventory",
        vec![node, message("Leaf", vec![scalar("label", 1, Type::String)])],
    );
    inventory.enum_type.push(EnumDescriptorProto {
        name: Some("Color".to_string()),
        value: ["COLOR_UNSPECIFIED", "COLOR_RED", "COLOR_BLUE"]
            .into_iter()
            .zip(0..)
            .map(|(name, number)| EnumValueDescriptorProto {
                name: Some(name.to_string()),
                number: Some(number),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    });
    inventory
}

/// Remove formatting differences: whitespace and trailing commas
pub fn normalize(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .replace(",)", ")")
        .replace(",>", ">")
        .replace(",}", "}")
}
