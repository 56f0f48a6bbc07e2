//! Field enumeration.
//!
//! Turns a record instance into the ordered descriptor list for one parse
//! call: declaration order, nested records expanded depth-first at the point
//! of nesting, one flat group namespace. Enumeration never fails.

use crate::field::{FieldDescriptor, Record};

/// Descriptors for every eligible field of `record`, bound to its storage.
pub fn enumerate<R: Record>(record: &mut R) -> Vec<FieldDescriptor<'_>> {
    let mut specs = Vec::new();
    R::describe(&mut specs);

    let mut slots = Vec::with_capacity(specs.len());
    record.slots(&mut slots);
    debug_assert_eq!(
        specs.len(),
        slots.len(),
        "describe and slots disagree for {}",
        std::any::type_name::<R>()
    );

    specs
        .into_iter()
        .zip(slots)
        .map(|(spec, slot)| {
            if spec.pattern.is_empty() {
                tracing::warn!(
                    field = spec.ident,
                    group = spec.name,
                    "field has an empty sub-pattern and can only match empty input"
                );
            }
            FieldDescriptor { spec, slot }
        })
        .collect()
}
