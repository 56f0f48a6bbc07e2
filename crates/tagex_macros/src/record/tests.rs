//! Tests for the Record derive expansion.

#![allow(
    clippy::unwrap_used,
    reason = "test code uses unwrap for concise assertions"
)]

use super::*;
use syn::parse_quote;

#[test]
fn unicode_ident_is_a_group_name() {
    let input: DeriveInput = parse_quote! {
        #[tagex(template = "{{größe}}")]
        struct Size { größe: i64 }
    };
    let tokens = derive_record_impl(&input).unwrap().to_string();
    assert!(tokens.contains("größe"), "{tokens}");
}

#[test]
fn ident_outside_group_name_rules_is_rejected() {
    // U+203F continues a Rust identifier but is not a word character.
    let input: DeriveInput = syn::parse_str("struct S { a\u{203F}b: i64 }").unwrap();
    let err = derive_record_impl(&input).unwrap_err();
    assert!(
        err.to_string().contains("not a valid capture group name"),
        "{err}"
    );
}

#[test]
fn explicit_name_covers_an_unusable_ident() {
    let input: DeriveInput =
        syn::parse_str("struct S { #[tagex(name = \"ab\")] a\u{203F}b: i64 }").unwrap();
    assert!(derive_record_impl(&input).is_ok());
}

#[test]
fn skipped_fields_emit_nothing() {
    let input: DeriveInput = parse_quote! {
        struct S {
            #[tagex(skip)]
            ratio: f64,
        }
    };
    let tokens = derive_record_impl(&input).unwrap().to_string();
    assert!(!tokens.contains("ratio"), "{tokens}");
}
