//! `#[tagex(...)]` attribute parsing.
//!
//! Struct level: `template = "..."`.
//! Field level: `name = "..."`, `pattern = "..."`, `flatten`, `skip`.
//! Several `#[tagex]` attributes on one item are merged; repeating a key is
//! an error.

use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Token};

use crate::utils::is_valid_group_name;

const ATTR: &str = "tagex";

/// Struct-level tags.
#[derive(Default)]
pub struct RecordAttrs {
    pub template: Option<LitStr>,
}

/// Field-level tags.
#[derive(Default)]
pub struct FieldAttrs {
    pub name: Option<LitStr>,
    pub pattern: Option<LitStr>,
    pub flatten: bool,
    pub skip: bool,
}

/// Parse the struct-level `#[tagex(template = "...")]`.
pub fn parse_record_attrs(attrs: &[Attribute]) -> syn::Result<RecordAttrs> {
    let mut parsed = RecordAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_args_with(|input: ParseStream| {
            while !input.is_empty() {
                let key: Ident = input.parse()?;
                match key.to_string().as_str() {
                    "template" => {
                        let value = parse_value(input)?;
                        set_once(&mut parsed.template, value, &key)?;
                    }
                    other => {
                        return Err(syn::Error::new(
                            key.span(),
                            format!("unknown record attribute: `{other}` (expected `template`)"),
                        ))
                    }
                }
                if !parse_separator(input)? {
                    break;
                }
            }
            Ok(())
        })?;
    }

    Ok(parsed)
}

/// Parse and validate the `#[tagex(...)]` attributes of one field.
pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        attr.parse_args_with(|input: ParseStream| {
            while !input.is_empty() {
                let key: Ident = input.parse()?;
                match key.to_string().as_str() {
                    "name" => {
                        let value = parse_value(input)?;
                        if !is_valid_group_name(&value.value()) {
                            return Err(syn::Error::new(
                                value.span(),
                                format!(
                                    "`{}` is not a valid capture group name",
                                    value.value()
                                ),
                            ));
                        }
                        set_once(&mut parsed.name, value, &key)?;
                    }
                    "pattern" => {
                        let value = parse_value(input)?;
                        set_once(&mut parsed.pattern, value, &key)?;
                    }
                    "flatten" => set_flag(&mut parsed.flatten, &key)?,
                    "skip" => set_flag(&mut parsed.skip, &key)?,
                    other => {
                        return Err(syn::Error::new(
                            key.span(),
                            format!(
                                "unknown field attribute: `{other}` \
                                 (expected `name`, `pattern`, `flatten` or `skip`)"
                            ),
                        ))
                    }
                }
                if !parse_separator(input)? {
                    break;
                }
            }
            Ok(())
        })?;
    }

    validate_field_attrs(&parsed, attrs)?;
    Ok(parsed)
}

fn validate_field_attrs(parsed: &FieldAttrs, attrs: &[Attribute]) -> syn::Result<()> {
    let Some(span_attr) = attrs.iter().find(|a| a.path().is_ident(ATTR)) else {
        return Ok(());
    };
    let has_tags = parsed.name.is_some() || parsed.pattern.is_some();

    if parsed.skip && (parsed.flatten || has_tags) {
        return Err(syn::Error::new_spanned(
            span_attr,
            "`skip` cannot be combined with other tagex attributes",
        ));
    }
    if parsed.flatten && has_tags {
        return Err(syn::Error::new_spanned(
            span_attr,
            "`flatten` fields take their names and patterns from the nested record",
        ));
    }
    Ok(())
}

fn parse_value(input: ParseStream) -> syn::Result<LitStr> {
    let _: Token![=] = input.parse()?;
    input.parse()
}

/// Consume an optional trailing comma; `false` once the list is done.
fn parse_separator(input: ParseStream) -> syn::Result<bool> {
    if input.is_empty() {
        return Ok(false);
    }
    let _: Token![,] = input.parse()?;
    Ok(true)
}

fn set_once(slot: &mut Option<LitStr>, value: LitStr, key: &Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            key.span(),
            format!("duplicate `{key}` attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

fn set_flag(flag: &mut bool, key: &Ident) -> syn::Result<()> {
    if *flag {
        return Err(syn::Error::new(
            key.span(),
            format!("duplicate `{key}` attribute"),
        ));
    }
    *flag = true;
    Ok(())
}
