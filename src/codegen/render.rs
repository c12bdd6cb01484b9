//! Rendering of mutators into Rust
//!
//! Each shape has its own pure render function; [`render_mutator`] picks one
//! by shape. Paths and identifiers are parsed with `syn`, so a bad name
//! surfaces as an error instead of malformed output.

use super::mutator::{Mutator, MutatorShape};
use crate::types::{ElementType, ResolvedType, Shape};
use proc_macro2::TokenStream;
use quote::quote;

/// Render one mutator as an inherent method
pub fn render_mutator(mutator: &Mutator) -> syn::Result<syn::ImplItemFn> {
    let method: syn::Ident = syn::parse_str(&mutator.method)?;
    let tokens = match &mutator.shape {
        MutatorShape::Set { target, ty } => render_set(&method, target, ty)?,
        MutatorShape::Append { target, element } => render_append(&method, target, element)?,
        MutatorShape::MapEntry { target, key, value } => {
            render_map_entry(&method, target, key, value)?
        }
        MutatorShape::OneofCase {
            target,
            enum_path,
            variant,
            payload,
        } => render_oneof_case(&method, target, enum_path, variant, payload)?,
    };
    syn::parse2(tokens)
}

/// Render the `impl` block of a message
pub fn render_impl(message_path: &str, methods: Vec<syn::ImplItemFn>) -> syn::Result<syn::Item> {
    let self_ty: syn::Type = syn::parse_str(message_path)?;
    syn::parse2(quote! {
        impl #self_ty {
            #(#methods)*
        }
    })
}

fn render_set(method: &syn::Ident, target: &str, ty: &ResolvedType) -> syn::Result<TokenStream> {
    let target: syn::Ident = syn::parse_str(target)?;
    let param: syn::Type = syn::parse_str(&ty.param_type())?;

    let value = match &ty.shape {
        Shape::Single(ElementType::Unit) => {
            return Ok(quote! {
                pub fn #method(&mut self, _value: #param) {}
            });
        }
        Shape::Single(ElementType::Message { boxed: true, .. }) => {
            quote!(value.map(::prost::alloc::boxed::Box::new))
        }
        Shape::Single(element) if !ty.by_reference => store(element, quote!(value)),
        Shape::List(element) if element.is_enum() => {
            quote!(value.into_iter().map(|v| v as i32).collect())
        }
        Shape::Map { value, .. } if value.is_enum() => {
            quote!(value.into_iter().map(|(k, v)| (k, v as i32)).collect())
        }
        _ => quote!(value),
    };

    Ok(quote! {
        pub fn #method(&mut self, value: #param) {
            self.#target = #value;
        }
    })
}

fn render_append(
    method: &syn::Ident,
    target: &str,
    element: &ElementType,
) -> syn::Result<TokenStream> {
    let target: syn::Ident = syn::parse_str(target)?;
    let item: syn::Type = syn::parse_str(&element.rust_type())?;

    let values = if element.is_enum() {
        quote!(values.into_iter().map(|v| v as i32))
    } else {
        quote!(values)
    };

    Ok(quote! {
        pub fn #method(&mut self, values: impl ::core::iter::IntoIterator<Item = #item>) {
            self.#target.extend(#values);
        }
    })
}

fn render_map_entry(
    method: &syn::Ident,
    target: &str,
    key: &ElementType,
    value: &ElementType,
) -> syn::Result<TokenStream> {
    let target: syn::Ident = syn::parse_str(target)?;
    let key_ty: syn::Type = syn::parse_str(&key.rust_type())?;
    let value_ty: syn::Type = syn::parse_str(&value.rust_type())?;
    let val = store(value, quote!(val));

    Ok(quote! {
        pub fn #method(&mut self, key: #key_ty, val: #value_ty) {
            self.#target.insert(key, #val);
        }
    })
}

fn render_oneof_case(
    method: &syn::Ident,
    target: &str,
    enum_path: &str,
    variant: &str,
    payload: &ElementType,
) -> syn::Result<TokenStream> {
    let target: syn::Ident = syn::parse_str(target)?;
    let enum_path: syn::Path = syn::parse_str(enum_path)?;
    let variant: syn::Ident = syn::parse_str(variant)?;
    let param: syn::Type = syn::parse_str(&payload.rust_type())?;

    if *payload == ElementType::Unit {
        return Ok(quote! {
            pub fn #method(&mut self, _value: #param) {}
        });
    }

    let value = store(payload, quote!(value));
    Ok(quote! {
        pub fn #method(&mut self, value: #param) {
            self.#target = ::core::option::Option::Some(#enum_path::#variant(#value));
        }
    })
}

/// Convert an accepted element into the representation prost stores
fn store(element: &ElementType, value: TokenStream) -> TokenStream {
    match element {
        ElementType::Enum { .. } => quote!(#value as i32),
        ElementType::Message { boxed: true, .. } => {
            quote!(::prost::alloc::boxed::Box::new(#value))
        }
        _ => value,
    }
}
