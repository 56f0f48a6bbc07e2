//! Error types for record parsing.
//!
//! Every failure is terminal for the call that produced it. Fields bound
//! before a conversion failure stay written; callers needing all-or-nothing
//! semantics parse into a scratch value (see [`from_str`](crate::from_str)).

use crate::target::Kind;

/// Boxed error reported by a conversion.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a parse call.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level parse failure.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target is not a record.
    #[error("object to parse is not a record, is {kind}")]
    NotRecord { kind: Kind },

    /// The record type carries no `template` marker.
    #[error("record `{type_name}` has no template (missing #[tagex(template = \"...\")])")]
    MissingMarker { type_name: &'static str },

    /// The composed expression was rejected.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// The composed expression does not match the input.
    #[error("expression for `{type_name}` has no match in the input")]
    NoMatch { type_name: &'static str },

    /// A matched field's storage could not be written.
    #[error("field `{field}` of type `{type_name}` cannot be set")]
    InvalidTarget {
        field: String,
        type_name: &'static str,
    },

    /// A captured substring could not be converted into its field.
    #[error("field `{field}` could not convert `{input}`: {source}")]
    Conversion {
        field: String,
        input: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Attach a failed field conversion to its capture group.
    pub(crate) fn from_convert(field: &str, input: &str, err: ConvertError) -> Self {
        match err {
            ConvertError::Unsettable { type_name } => Self::InvalidTarget {
                field: field.to_owned(),
                type_name,
            },
            ConvertError::Invalid(source) => Self::Conversion {
                field: field.to_owned(),
                input: input.to_owned(),
                source,
            },
        }
    }
}

/// Failure to compose or compile a record's expression.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// Two fields of one record declare the same capture group.
    #[error("capture group `{name}` is declared by more than one field")]
    DuplicateGroup { name: String },

    /// A capture group name the engine would not accept.
    #[error("`{name}` is not a valid capture group name")]
    InvalidGroupName { name: String },

    /// A `{{name}}` placeholder with no field behind it.
    #[error("placeholder `{{{{{name}}}}}` has no matching field")]
    UnboundPlaceholder { name: String },

    /// The engine rejected the composed expression.
    #[error("composed expression `{pattern}` failed to compile: {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Failure reported by a [`Convert`](crate::Convert) implementation.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The storage behind an indirection layer cannot be reached for writing.
    #[error("value of type `{type_name}` cannot be set")]
    Unsettable { type_name: &'static str },

    /// The captured text is not a valid value.
    #[error(transparent)]
    Invalid(BoxError),
}

impl ConvertError {
    /// Wrap any error (or message) as an invalid-input failure.
    pub fn invalid(err: impl Into<BoxError>) -> Self {
        Self::Invalid(err.into())
    }

    /// The storage of type `T` cannot be written.
    pub fn unsettable<T: ?Sized>() -> Self {
        Self::Unsettable {
            type_name: std::any::type_name::<T>(),
        }
    }
}
