use serde::Serialize;

/// A roster entry after normalization.
///
/// `start` and `finish` keep the text as it appeared in the source ("10:30am"), they
/// are only converted to minutes when sorting. `original_index` is the entry's
/// position in the scraper output and never changes once assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub code: String,
    pub name: String,
    pub start: String,
    pub finish: String,
    pub original_index: usize,
}

impl CanonicalRecord {
    /// Record with every text field empty, used for entries that could not be read
    pub fn empty(original_index: usize) -> Self {
        Self { original_index, ..Self::default() }
    }
}
