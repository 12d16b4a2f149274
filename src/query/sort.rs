use std::cmp::Ordering;

use crate::models::{CanonicalRecord, SortDirection, SortField};
use crate::parsers::time::to_minutes;

/// Sort records in place by `field` and `direction`.
///
/// [`SortField::Original`] orders purely by `original_index`. Every other field is
/// compared first (times through [`to_minutes`], code and name as plain strings), the
/// direction flips that comparison, and equal values fall back to ascending
/// `original_index`. The tie-break is explicit, so the result doesn't depend on the
/// stability of the sort routine.
pub fn sort_records(
    records: &mut [&CanonicalRecord],
    field: SortField,
    direction: SortDirection,
) {
    records.sort_by(|a, b| compare_records(a, b, field, direction));
}

pub fn compare_records(
    a: &CanonicalRecord,
    b: &CanonicalRecord,
    field: SortField,
    direction: SortDirection,
) -> Ordering {
    let by_field = match field {
        SortField::Original => a.original_index.cmp(&b.original_index),
        SortField::Code => a.code.cmp(&b.code),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Start => to_minutes(&a.start).cmp(&to_minutes(&b.start)),
        SortField::Finish => to_minutes(&a.finish).cmp(&to_minutes(&b.finish)),
    };

    let directed = match direction {
        SortDirection::Asc => by_field,
        SortDirection::Desc => by_field.reverse(),
    };

    directed.then_with(|| a.original_index.cmp(&b.original_index))
}
