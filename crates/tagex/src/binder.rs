//! Binding captured text into record fields.

use regex::Regex;

use crate::errors::{Error, Result};
use crate::field::FieldDescriptor;

/// Match `expression` against `text` and write every participating group
/// into its field.
///
/// Groups that did not take part in the match leave their field untouched.
/// The first failing field aborts the call; fields written before it keep
/// their new values.
pub fn bind(
    text: &str,
    type_name: &'static str,
    expression: &Regex,
    descriptors: Vec<FieldDescriptor<'_>>,
) -> Result<()> {
    let Some(captures) = expression.captures(text) else {
        return Err(Error::NoMatch { type_name });
    };

    for descriptor in descriptors {
        let group = descriptor.group_name();
        let Some(matched) = captures.name(group) else {
            tracing::trace!(group, "group did not participate in the match");
            continue;
        };

        let input = matched.as_str();
        descriptor
            .slot
            .convert(input)
            .map_err(|err| Error::from_convert(group, input, err))?;
        tracing::trace!(group, input, "bound field");
    }

    Ok(())
}
