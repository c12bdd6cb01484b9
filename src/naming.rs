//! Rust identifiers and type paths matching prost's generated code
//!
//! Setters are written into the module prost generates for a package, so
//! every type path is resolved relative to that package module.

use heck::{ToSnakeCase, ToUpperCamelCase};
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Keywords that must be written as raw identifiers
static RAW_KEYWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
        "dyn", "else", "enum", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
        "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
        "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
        "unsized", "use", "virtual", "where", "while", "yield",
    ]
    .into_iter()
    .collect()
});

/// Keywords that cannot be raw identifiers and get a trailing underscore
const SUFFIXED_KEYWORDS: &[&str] = &["self", "Self", "super", "extern", "crate"];

/// Snake-case a proto name into a field or module identifier
pub fn to_snake(name: &str) -> String {
    let mut ident = name.to_snake_case();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    escape(ident)
}

/// UpperCamelCase a proto name into a type or variant identifier
pub fn to_upper_camel(name: &str) -> String {
    escape(name.to_upper_camel_case())
}

/// Snake-case a proto name without keyword escaping, for method name suffixes
pub fn method_stem(name: &str) -> String {
    name.to_snake_case()
}

fn escape(mut ident: String) -> String {
    if SUFFIXED_KEYWORDS.contains(&ident.as_str()) {
        ident.push('_');
    } else if RAW_KEYWORDS.contains(ident.as_str()) {
        ident.insert_str(0, "r#");
    }
    ident
}

/// Resolve a fully-qualified proto type name into a Rust path relative to
/// the module generated for `local_package`.
///
/// `.pkg.Outer.Inner` seen from `pkg` becomes `outer::Inner`; seen from
/// `other` it becomes `super::pkg::outer::Inner`.
pub fn resolve_path(local_package: &str, full_name: &str) -> String {
    let full_name = full_name.trim_start_matches('.');
    let mut local_path = local_package.split('.').filter(|s| !s.is_empty()).peekable();

    let mut ident_path = full_name.split('.').filter(|s| !s.is_empty());
    let ident_type = ident_path.next_back().unwrap_or_default();
    let mut ident_path = ident_path.peekable();

    while local_path.peek().is_some() && local_path.peek() == ident_path.peek() {
        local_path.next();
        ident_path.next();
    }

    local_path
        .map(|_| "super".to_string())
        .chain(ident_path.map(to_snake))
        .chain(std::iter::once(to_upper_camel(ident_type)))
        .collect::<Vec<_>>()
        .join("::")
}

/// Path of the enum prost generates for a oneof, e.g. `sample::Choice`
pub fn oneof_enum_path(local_package: &str, message_full_name: &str, oneof_name: &str) -> String {
    resolve_path(
        local_package,
        &format!("{}.{}", message_full_name.trim_start_matches('.'), oneof_name),
    )
}
