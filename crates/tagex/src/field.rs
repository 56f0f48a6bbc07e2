//! Record metadata and field descriptors.
//!
//! A [`Record`] exposes two views of itself:
//! - a static one, built once per type by `#[derive(Record)]`: the template
//!   and the ordered, flattened [`FieldSpec`] list;
//! - an instance one: the mutable storage cells of a particular value, in
//!   the same order.
//!
//! The enumerator zips the two into [`FieldDescriptor`]s for a single parse
//! call.

use std::fmt;

use crate::convert::Convert;
use crate::registry::{self, Primitive};

/// Static binding of one field: where it lives and how it is matched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Field identifier as declared on the struct.
    pub ident: &'static str,
    /// Capture group name; defaults to `ident`.
    pub name: &'static str,
    /// Sub-pattern spliced into the capture group.
    pub pattern: &'static str,
    /// Registry kind, `None` for custom conversions.
    pub kind: Option<Primitive>,
}

impl FieldSpec {
    /// Build the binding for a field of type `T`, applying tag overrides.
    pub fn new<T: Convert>(
        ident: &'static str,
        name: Option<&'static str>,
        pattern: Option<&'static str>,
    ) -> Self {
        let kind = T::kind();
        FieldSpec {
            ident,
            name: name.unwrap_or(ident),
            pattern: pattern.unwrap_or_else(|| registry::pattern_for(kind)),
            kind,
        }
    }

    /// The `(?P<name>pattern)` construct this field contributes.
    pub fn named_capture_group(&self) -> String {
        format!("(?P<{}>{})", self.name, self.pattern)
    }

    /// The `{{name}}` placeholder this field replaces.
    pub fn placeholder(&self) -> String {
        format!("{{{{{}}}}}", self.name)
    }
}

/// A field bound to the storage of one record instance.
pub struct FieldDescriptor<'a> {
    pub spec: FieldSpec,
    pub slot: &'a mut dyn Convert,
}

impl FieldDescriptor<'_> {
    /// Capture group name.
    pub fn group_name(&self) -> &'static str {
        self.spec.name
    }

    /// Effective sub-pattern.
    pub fn sub_pattern(&self) -> &'static str {
        self.spec.pattern
    }
}

impl fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// A type whose fields can be populated from a tag-composed expression.
///
/// Implemented by `#[derive(Record)]`; the order of [`Record::describe`] and
/// [`Record::slots`] must agree.
pub trait Record {
    /// Template expression carried by the type's marker, if any.
    fn template() -> Option<&'static str>
    where
        Self: Sized;

    /// Append this type's eligible fields, nested records flattened in place.
    fn describe(fields: &mut Vec<FieldSpec>)
    where
        Self: Sized;

    /// Append this instance's storage cells in `describe` order.
    fn slots<'a>(&'a mut self, out: &mut Vec<&'a mut dyn Convert>);
}

// Boxed records flatten like inline ones.
impl<R: Record> Record for Box<R> {
    fn template() -> Option<&'static str> {
        R::template()
    }

    fn describe(fields: &mut Vec<FieldSpec>) {
        R::describe(fields);
    }

    fn slots<'a>(&'a mut self, out: &mut Vec<&'a mut dyn Convert>) {
        (**self).slots(out);
    }
}

/// Static shape of a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    pub type_name: &'static str,
    pub template: Option<&'static str>,
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Collect the shape of `R`.
    pub fn of<R: Record>() -> Self {
        let mut fields = Vec::new();
        R::describe(&mut fields);
        Schema {
            type_name: std::any::type_name::<R>(),
            template: R::template(),
            fields,
        }
    }

    /// Look up a field by capture group name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Type-erased access to a record, used behind [`Target`](crate::Target).
pub trait DynRecord {
    /// Name of the concrete record type.
    fn type_name(&self) -> &'static str;

    /// Template of the concrete record type, without collecting its fields.
    fn template(&self) -> Option<&'static str>;

    /// Static shape of the concrete record type.
    fn schema(&self) -> Schema;

    /// Descriptors bound to this instance.
    fn descriptors(&mut self) -> Vec<FieldDescriptor<'_>>;
}

impl<R: Record> DynRecord for R {
    fn type_name(&self) -> &'static str {
        std::any::type_name::<R>()
    }

    fn template(&self) -> Option<&'static str> {
        R::template()
    }

    fn schema(&self) -> Schema {
        Schema::of::<R>()
    }

    fn descriptors(&mut self) -> Vec<FieldDescriptor<'_>> {
        crate::enumerate::enumerate(self)
    }
}
