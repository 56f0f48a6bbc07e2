//! Tagex - parse text into typed records through tag-composed regular
//! expressions.
//!
//! A record declares a template expression with `{{name}}` placeholders and
//! tags its fields with capture-group names and sub-patterns. Parsing
//! composes one expression from those tags, matches it against the input
//! and converts each captured substring into its field.
//!
//! ```text
//! #[derive(Record, Default)]
//! #[tagex(template = "{{cc}}-{{ac}}-{{p}}-{{ln}}")]
//! struct Phone {
//!     cc: i64,
//!     ac: i64,
//!     p: i64,
//!     ln: i64,
//! }
//!
//! let phone: Phone = tagex::from_str("1-234-567-8900")?;
//! // composed: (?P<cc>[[:digit:]]+)-(?P<ac>[[:digit:]]+)-(?P<p>[[:digit:]]+)-(?P<ln>[[:digit:]]+)
//! ```
//!
//! # Tags
//!
//! - `#[tagex(template = "...")]` on the struct: the base expression. Types
//!   without it can only be flattened into other records.
//! - `#[tagex(name = "...")]`: capture group name (default: field ident).
//! - `#[tagex(pattern = "...")]`: sub-pattern (default: the registry pattern
//!   for `bool`, signed integers and `String`; none for custom conversions).
//! - `#[tagex(flatten)]`: expand a nested record's fields in place.
//! - `#[tagex(skip)]`: leave the field out.
//!
//! Every other field must implement [`Convert`]; this is checked at compile
//! time.
//!
//! # Pipeline
//!
//! ```text
//! Target ──▶ enumerate ──▶ compose ──▶ bind
//!            (descriptors)  (Regex)     (fields written)
//! ```

// Lets `#[derive(Record)]` paths resolve inside this crate's own tests.
#[allow(
    unused_extern_crates,
    reason = "only referenced by derive expansions in unit tests"
)]
extern crate self as tagex;

mod binder;
mod compose;
mod convert;
mod enumerate;
mod errors;
mod field;
mod parser;
pub mod registry;
mod target;

use std::sync::Once;

pub use compose::{compose, compose_pattern, is_valid_group_name};
pub use convert::Convert;
pub use enumerate::enumerate;
pub use errors::{BoxError, ConvertError, Error, PatternError, Result};
pub use field::{DynRecord, FieldDescriptor, FieldSpec, Record, Schema};
pub use parser::{ParseConfig, Parser};
pub use registry::Primitive;
pub use target::{Kind, Target};
pub use tagex_macros::Record;

/// Populate `target` from `text`, compiling the record's expression afresh.
///
/// See [`Parser::parse`] for the failure modes.
pub fn parse<T: Target + ?Sized>(text: &str, target: &mut T) -> Result<()> {
    Parser::default().parse(text, target)
}

/// Build a fresh record from `text`.
pub fn from_str<R: Record + Default>(text: &str) -> Result<R> {
    Parser::default().from_str(text)
}

/// The fully composed expression for `R`, without compiling it.
pub fn expression_for<R: Record>() -> Result<String> {
    let schema = Schema::of::<R>();
    let template = schema.template.ok_or(Error::MissingMarker {
        type_name: schema.type_name,
    })?;
    Ok(compose_pattern(template, &schema.fields)?)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=tagex=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // A subscriber installed elsewhere wins.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
