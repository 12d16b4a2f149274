use crate::models::CanonicalRecord;

/// Records matching `filter_text`, in their input order
///
/// Blank filter text (after trimming) keeps every record. Otherwise a record is kept when
/// the trimmed, lowercased filter text appears in its lowercased code, name, start or
/// finish.
pub fn apply_filter<'a>(
    records: &'a [CanonicalRecord],
    filter_text: &str,
) -> Vec<&'a CanonicalRecord> {
    let needle = filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return records.iter().collect();
    }

    records.iter().filter(|record| matches_record(record, &needle)).collect()
}

/// `needle` must already be lowercased
fn matches_record(record: &CanonicalRecord, needle: &str) -> bool {
    [&record.code, &record.name, &record.start, &record.finish]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}
