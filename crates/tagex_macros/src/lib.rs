//! Procedural macros for tagex.
//!
//! # Record Derive
//!
//! ```text
//! #[derive(Record)]
//! #[tagex(template = "^bool: {{B}}, int: {{integer}}, parsable: {{P}}")]
//! pub struct Example {
//!     #[tagex(name = "B")]
//!     pub flag: bool,
//!     #[tagex(name = "integer")]
//!     pub count: i64,
//!     #[tagex(name = "P", pattern = "[pP]ars(abl)?e")]
//!     pub parsable: Parsable,
//!     #[tagex(flatten)]
//!     pub nested: Nested,
//!     #[tagex(skip)]
//!     pub ratio: f64,
//! }
//! ```
//!
//! This generates `tagex::Record` (template, ordered field specs, storage
//! slots) and `tagex::Target` implementations.

mod attrs;
mod record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for records populated from a tag-composed expression.
///
/// # Attributes
///
/// ## Struct-level
/// - `#[tagex(template = "...")]` - Base expression with `{{name}}`
///   placeholders. Without it the type can only be used with `flatten`.
///
/// ## Field-level
/// - `#[tagex(name = "...")]` - Capture group name (default: field name).
/// - `#[tagex(pattern = "...")]` - Sub-pattern (default: registry pattern
///   of the field type).
/// - `#[tagex(flatten)]` - Field is a nested record; its fields join this
///   record's group namespace.
/// - `#[tagex(skip)]` - Field is not parsed.
///
/// Fields without `flatten` or `skip` must implement `tagex::Convert`.
#[proc_macro_derive(Record, attributes(tagex))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record(input)
}
