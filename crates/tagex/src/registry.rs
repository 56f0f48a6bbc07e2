//! Type conversion registry.
//!
//! Maps the primitive field kinds to a default sub-pattern and a converter
//! from captured text to value. The table is fixed; other types take part
//! through [`Convert`](crate::Convert) instead.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConvertError;

/// Default sub-pattern for boolean fields.
///
/// Mirrors the literal tokens accepted by [`parse_bool`].
pub const DEFAULT_BOOL_PATTERN: &str = "1|t|T|TRUE|true|True|0|f|F|FALSE|false|False";

/// Default sub-pattern for signed integer fields.
pub const DEFAULT_INT_PATTERN: &str = "[[:digit:]]+";

/// Default sub-pattern for text fields.
pub const DEFAULT_TEXT_PATTERN: &str = "[[:print:]]+";

/// Field kinds with a registry entry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Primitive {
    Bool,
    Int,
    Text,
}

impl Primitive {
    /// Sub-pattern used when a field carries no `pattern` override.
    pub fn default_pattern(self) -> &'static str {
        match self {
            Self::Bool => DEFAULT_BOOL_PATTERN,
            Self::Int => DEFAULT_INT_PATTERN,
            Self::Text => DEFAULT_TEXT_PATTERN,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Default sub-pattern for an optional kind; custom conversions have none.
pub fn pattern_for(kind: Option<Primitive>) -> &'static str {
    kind.map_or("", Primitive::default_pattern)
}

/// Parse a boolean literal.
///
/// Accepts exactly the tokens of [`DEFAULT_BOOL_PATTERN`].
pub fn parse_bool(text: &str) -> Result<bool, ConvertError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ConvertError::invalid(format!(
            "invalid boolean literal `{other}`"
        ))),
    }
}

/// Parse a signed decimal integer into any width.
///
/// Overflow and non-digit content are conversion errors.
pub fn parse_int<T>(text: &str) -> Result<T, ConvertError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    text.parse::<T>().map_err(|err| {
        ConvertError::invalid(format!(
            "invalid integer `{text}` for {}: {err}",
            std::any::type_name::<T>()
        ))
    })
}

/// Text conversion is the identity.
pub fn parse_text(text: &str) -> String {
    text.to_owned()
}

#[cfg(test)]
mod tests;
