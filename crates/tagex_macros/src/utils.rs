//! Shared helpers for the derive.

use syn::{punctuated::Punctuated, token::Comma, Data, DeriveInput, Field, Fields};

/// Validate that the input is a struct with named fields, returning the fields.
pub fn validate_struct_with_named_fields<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(&fields.named),
            Fields::Unit => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive needs a struct with named fields, found a unit struct"),
            )),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                format!("{macro_name} derive only supports structs with named fields"),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            input,
            format!("{macro_name} derive only supports structs"),
        )),
    }
}

/// Capture group names are word identifiers: a letter or `_`, then Unicode
/// letters, digits or `_`.
///
/// Kept in step with `tagex::is_valid_group_name`.
pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
