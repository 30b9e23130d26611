use crate::prelude::*;

/// Decides whether a single field survives into the projection.
///
/// The skip marker dominates everything else. Plain fields always pass;
/// relation fields pass iff their kind is in the resolved include set.
#[must_use]
pub fn is_included(field: &FieldDescriptor, include: &IncludeSet) -> bool {
    if field.ignored {
        return false;
    }

    match field.relation {
        Some(kind) => include.contains(kind),
        None => true,
    }
}

/// Filters the introspected fields down to the projected set, preserving
/// declaration order.
#[must_use]
pub fn included_fields<'a>(
    fields: &'a [FieldDescriptor],
    include: &IncludeSet,
) -> Vec<&'a FieldDescriptor> {
    fields
        .iter()
        .filter(|field| is_included(field, include))
        .collect()
}

///
/// TESTS
///
