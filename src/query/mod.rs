//! Filter and sort over canonical roster records.
//!
//! Filtering runs first, sorting second, and the input slice is never touched: every call
//! returns a fresh `Vec`. Both steps are pure and cheap, so callers can re-run a query on
//! every keystroke without caching.

pub mod filter;
pub mod sort;

use serde::Serialize;

pub use filter::apply_filter;
pub use sort::{compare_records, sort_records};

use crate::models::{CanonicalRecord, QuerySpec};

/// Result of a query plus the counts shown alongside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryView {
    pub records: Vec<CanonicalRecord>,
    /// Records parsed for the roster, before filtering
    pub total: usize,
    /// Records left after filtering
    pub shown: usize,
}

/// Filter `records` by `spec.filter_text`, then order them by `spec.sort_field`.
///
/// # Examples
///
/// ```
/// use roster_view::models::{QuerySpec, RawEntry, SortDirection, SortField};
/// use roster_view::parsers::parse_entries;
/// use roster_view::query::query;
///
/// let records = parse_entries(&[
///     RawEntry::text("French Marie 9am-5pm"),
///     RawEntry::object("ESL John Smith", "8am - 4pm"),
/// ]);
/// let spec = QuerySpec::new("").sorted_by(SortField::Start, SortDirection::Asc);
/// let view = query(&records, &spec);
/// assert_eq!(view[0].name, "John Smith");
/// ```
pub fn query(records: &[CanonicalRecord], spec: &QuerySpec) -> Vec<CanonicalRecord> {
    let mut matched = apply_filter(records, &spec.filter_text);
    sort_records(&mut matched, spec.sort_field, spec.sort_direction);
    matched.into_iter().cloned().collect()
}

/// [`query`] together with the total and shown counts
pub fn run_query(records: &[CanonicalRecord], spec: &QuerySpec) -> QueryView {
    let records_out = query(records, spec);
    let shown = records_out.len();
    tracing::debug!(
        "Query '{}' by {} {}: {} of {} records",
        spec.filter_text,
        spec.sort_field,
        spec.sort_direction,
        shown,
        records.len()
    );
    QueryView { records: records_out, total: records.len(), shown }
}
