//! Pattern composition.
//!
//! Splices each field's named capture group into the record template at its
//! `{{name}}` placeholder, then compiles the result.
//!
//! ```text
//! template:  {{cc}}-{{ac}}
//! fields:    cc: i64, ac: i64
//! composed:  (?P<cc>[[:digit:]]+)-(?P<ac>[[:digit:]]+)
//! ```

use regex::{Regex, RegexBuilder};
use rustc_hash::FxHashSet;

use crate::errors::PatternError;
use crate::field::FieldSpec;
use crate::parser::ParseConfig;

/// Substitute every field's capture group into `template`.
///
/// Each field replaces the first remaining occurrence of its placeholder.
/// Fields whose placeholder is absent contribute nothing. Duplicate or
/// malformed group names and placeholders left without a field are errors.
pub fn compose_pattern<'a>(
    template: &str,
    fields: impl IntoIterator<Item = &'a FieldSpec>,
) -> Result<String, PatternError> {
    let mut seen = FxHashSet::default();
    let mut pattern = template.to_owned();

    for field in fields {
        if !is_valid_group_name(field.name) {
            return Err(PatternError::InvalidGroupName {
                name: field.name.to_owned(),
            });
        }
        if !seen.insert(field.name) {
            return Err(PatternError::DuplicateGroup {
                name: field.name.to_owned(),
            });
        }

        let placeholder = field.placeholder();
        if pattern.contains(&placeholder) {
            pattern = pattern.replacen(&placeholder, &field.named_capture_group(), 1);
        } else {
            tracing::debug!(
                group = field.name,
                "no placeholder for field; it will not be populated"
            );
        }
    }

    if let Some(name) = find_placeholder(&pattern) {
        return Err(PatternError::UnboundPlaceholder {
            name: name.to_owned(),
        });
    }

    Ok(pattern)
}

/// Compile a composed pattern with the engine.
pub fn compile(pattern: &str, config: &ParseConfig) -> Result<Regex, PatternError> {
    let mut builder = RegexBuilder::new(pattern);
    if let Some(limit) = config.size_limit {
        builder.size_limit(limit);
    }
    builder.build().map_err(|source| PatternError::Compile {
        pattern: pattern.to_owned(),
        source,
    })
}

/// Compose and compile in one step.
pub fn compose<'a>(
    template: &str,
    fields: impl IntoIterator<Item = &'a FieldSpec>,
    config: &ParseConfig,
) -> Result<Regex, PatternError> {
    let pattern = compose_pattern(template, fields)?;
    compile(&pattern, config)
}

/// Capture group names are word identifiers: a letter or `_`, then letters,
/// digits or `_`. Letters and digits are Unicode, as in the regex engine.
pub fn is_valid_group_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Name of the first `{{identifier}}` placeholder in `pattern`.
fn find_placeholder(pattern: &str) -> Option<&str> {
    let mut rest = pattern;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        if let Some(end) = after.find("}}") {
            let name = &after[..end];
            if is_valid_group_name(name) {
                return Some(name);
            }
        }
        rest = after;
    }
    None
}
