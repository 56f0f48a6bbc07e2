//! Record derive macro implementation.
//!
//! Generates `tagex::Record` and `tagex::Target` implementations. The field
//! list is fixed at expansion time: every non-skipped field either flattens
//! a nested record or contributes one `FieldSpec` plus one storage slot, in
//! declaration order.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, DeriveInput, Field};

use crate::attrs::{parse_field_attrs, parse_record_attrs, FieldAttrs};
use crate::utils::{is_valid_group_name, validate_struct_with_named_fields};

/// Main entry point for the Record derive macro.
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

pub(crate) fn derive_record_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let record_attrs = parse_record_attrs(&input.attrs)?;
    let fields = validate_struct_with_named_fields(input, "Record")?;

    let template = match &record_attrs.template {
        Some(template) => quote! { ::core::option::Option::Some(#template) },
        None => quote! { ::core::option::Option::None },
    };

    let mut describe = Vec::new();
    let mut slots = Vec::new();
    for field in fields {
        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let (spec, slot) = generate_field(field, &attrs)?;
        describe.push(spec);
        slots.push(slot);
    }

    Ok(quote! {
        impl #impl_generics ::tagex::Record for #name #ty_generics #where_clause {
            fn template() -> ::core::option::Option<&'static str> {
                #template
            }

            #[allow(unused_variables)]
            fn describe(fields: &mut ::std::vec::Vec<::tagex::FieldSpec>) {
                #(#describe)*
            }

            #[allow(unused_variables)]
            fn slots<'__tagex>(
                &'__tagex mut self,
                out: &mut ::std::vec::Vec<&'__tagex mut dyn ::tagex::Convert>,
            ) {
                #(#slots)*
            }
        }

        impl #impl_generics ::tagex::Target for #name #ty_generics #where_clause {
            fn kind(&self) -> ::tagex::Kind {
                ::tagex::Kind::Record
            }

            fn as_record(&mut self) -> ::core::option::Option<&mut dyn ::tagex::DynRecord> {
                ::core::option::Option::Some(self)
            }
        }
    })
}

/// Generate the `describe` and `slots` statements for one field.
fn generate_field(field: &Field, attrs: &FieldAttrs) -> syn::Result<(TokenStream2, TokenStream2)> {
    let ident = field
        .ident
        .as_ref()
        .ok_or_else(|| syn::Error::new_spanned(field, "expected named field"))?;
    let ty = &field.ty;

    if attrs.flatten {
        return Ok((
            quote! { <#ty as ::tagex::Record>::describe(fields); },
            quote! { ::tagex::Record::slots(&mut self.#ident, out); },
        ));
    }

    let ident_str = ident.unraw().to_string();
    if attrs.name.is_none() && !is_valid_group_name(&ident_str) {
        return Err(syn::Error::new_spanned(
            ident,
            format!("`{ident_str}` is not a valid capture group name; add `#[tagex(name = \"...\")]`"),
        ));
    }
    let name = option_tokens(attrs.name.as_ref());
    let pattern = option_tokens(attrs.pattern.as_ref());

    Ok((
        quote! {
            fields.push(::tagex::FieldSpec::new::<#ty>(#ident_str, #name, #pattern));
        },
        quote! { out.push(&mut self.#ident); },
    ))
}

fn option_tokens(value: Option<&syn::LitStr>) -> TokenStream2 {
    match value {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    }
}

#[cfg(test)]
mod tests;
