//! Roster entry normalization.
//!
//! Turns one [`RawEntry`] into a [`CanonicalRecord`]. Parsing is total: any fragment
//! that doesn't match (code prefix, time range) is left empty instead of failing.
//!
//! # Code prefixes
//!
//! Codes are found by trying an ordered list of [`CodeMatcher`]s and taking the first
//! hit. It is a linear scan, not a longest-match search, so the order of the lists below
//! decides the output: "French" is tried before the generic prefix, and "First Day"
//! before "French". Reordering them changes how real rosters parse.
//!
//! The generic prefix pattern keeps its `[A-Za-z]{1,5}|[A-Za-z]{2,5}` alternation. The
//! second branch can never match where the first doesn't, so it behaves as "1 to 5
//! letters followed by whitespace".

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::{CanonicalRecord, RawEntry};

static CODE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]{1,5}|[A-Za-z]{2,5})\s+").expect("valid code prefix regex")
});

static TIME_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)([0-9]{1,2}(?:[:.][0-9]{2})? ?[ap]m)",
        r"[^0-9]*",
        r"([0-9]{1,2}(?:[:.][0-9]{2})? ?[ap]m)",
    ))
    .expect("valid time range regex")
});

/// One attempt at recognizing a code at the start of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeMatcher {
    /// Case-sensitive literal prefix; any run of `-` or spaces after it is dropped
    Special(&'static str),
    /// Literal word that must be followed by a space
    Word(&'static str),
    /// 1 to 5 ASCII letters followed by whitespace
    Prefix,
}

/// Matchers for `{name, time}` entries, in priority order
pub const OBJECT_CODE_MATCHERS: [CodeMatcher; 4] = [
    CodeMatcher::Special("First Day"),
    CodeMatcher::Special("French"),
    CodeMatcher::Special("Turkish"),
    CodeMatcher::Prefix,
];

/// Matchers for single-string entries, in priority order
pub const TEXT_CODE_MATCHERS: [CodeMatcher; 2] = [CodeMatcher::Word("French"), CodeMatcher::Prefix];

#[derive(Debug, Clone, PartialEq, Eq)]
struct CodeMatch<'a> {
    code: &'a str,
    /// Text after the code, trimmed
    rest: &'a str,
}

impl CodeMatcher {
    fn try_match<'a>(&self, text: &'a str) -> Option<CodeMatch<'a>> {
        match *self {
            Self::Special(code) => {
                let rest = text.strip_prefix(code)?;
                Some(CodeMatch { code, rest: rest.trim_start_matches(['-', ' ']).trim() })
            }
            Self::Word(word) => {
                let rest = text.strip_prefix(word)?;
                if !rest.starts_with(' ') {
                    return None;
                }
                Some(CodeMatch { code: word, rest: rest.trim() })
            }
            Self::Prefix => {
                let caps = CODE_PREFIX_RE.captures(text)?;
                let code = caps.get(1)?.as_str();
                let matched = caps.get(0)?;
                Some(CodeMatch { code, rest: text[matched.end()..].trim() })
            }
        }
    }
}

/// First matcher in `matchers` that recognizes a code in `text`
fn match_code<'a>(matchers: &[CodeMatcher], text: &'a str) -> Option<CodeMatch<'a>> {
    matchers.iter().find_map(|matcher| matcher.try_match(text))
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TimeRange {
    span: Range<usize>,
    start: String,
    finish: String,
}

fn find_time_range(text: &str) -> Option<TimeRange> {
    let caps = TIME_RANGE_RE.captures(text)?;
    let span = caps.get(0)?.range();
    Some(TimeRange {
        span,
        start: strip_whitespace(&caps[1]),
        finish: strip_whitespace(&caps[2]),
    })
}

fn strip_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Parse one raw entry into a canonical record at position `original_index`.
///
/// # Examples
///
/// ```
/// use roster_view::models::RawEntry;
/// use roster_view::parsers::entry::parse_entry;
///
/// let record = parse_entry(&RawEntry::object("ESL John Smith", "10:30am - 11:30am"), 0);
/// assert_eq!(record.code, "ESL");
/// assert_eq!(record.name, "John Smith");
/// assert_eq!(record.start, "10:30am");
/// assert_eq!(record.finish, "11:30am");
/// ```
pub fn parse_entry(entry: &RawEntry, original_index: usize) -> CanonicalRecord {
    match entry {
        RawEntry::Object { name, time } => parse_object_entry(name, time, original_index),
        RawEntry::Text(text) => parse_text_entry(text, original_index),
        RawEntry::Unrecognized => CanonicalRecord::empty(original_index),
    }
}

/// Parse entries in order, numbering them from 0
pub fn parse_entries(entries: &[RawEntry]) -> Vec<CanonicalRecord> {
    entries.iter().enumerate().map(|(index, entry)| parse_entry(entry, index)).collect()
}

fn parse_object_entry(name: &str, time: &str, original_index: usize) -> CanonicalRecord {
    let (code, name) = match match_code(&OBJECT_CODE_MATCHERS, name) {
        Some(found) => (found.code.to_string(), found.rest.to_string()),
        None => (String::new(), name.to_string()),
    };

    let (start, finish) = match find_time_range(time) {
        Some(range) => (range.start, range.finish),
        None => (time.to_string(), String::new()),
    };

    CanonicalRecord { code, name, start, finish, original_index }
}

fn parse_text_entry(text: &str, original_index: usize) -> CanonicalRecord {
    let (code, rest) = match match_code(&TEXT_CODE_MATCHERS, text) {
        Some(found) => (found.code.to_string(), found.rest),
        None => (String::new(), text),
    };

    match find_time_range(rest) {
        Some(range) => {
            let mut name = String::with_capacity(rest.len());
            name.push_str(&rest[..range.span.start]);
            name.push_str(&rest[range.span.end..]);
            CanonicalRecord {
                code,
                name: name.trim().to_string(),
                start: range.start,
                finish: range.finish,
                original_index,
            }
        }
        None => CanonicalRecord {
            code,
            name: rest.trim().to_string(),
            original_index,
            ..CanonicalRecord::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(name: &str, time: &str) -> CanonicalRecord {
        parse_entry(&RawEntry::object(name, time), 0)
    }

    fn text(s: &str) -> CanonicalRecord {
        parse_entry(&RawEntry::text(s), 0)
    }

    #[test]
    fn test_object_generic_code() {
        let record = object("ESL John Smith", "10:30am - 11:30am");
        assert_eq!(record.code, "ESL");
        assert_eq!(record.name, "John Smith");
        assert_eq!(record.start, "10:30am");
        assert_eq!(record.finish, "11:30am");
    }

    #[test]
    fn test_object_special_code_without_time_range() {
        let record = object("First Day Alex", "noon");
        assert_eq!(record.code, "First Day");
        assert_eq!(record.name, "Alex");
        assert_eq!(record.start, "noon");
        assert_eq!(record.finish, "");
    }

    #[test]
    fn test_object_special_code_drops_separator() {
        let record = object("Turkish - Deniz", "9am to 5pm");
        assert_eq!(record.code, "Turkish");
        assert_eq!(record.name, "Deniz");
        assert_eq!(record.start, "9am");
        assert_eq!(record.finish, "5pm");
    }

    #[test]
    fn test_object_special_codes_are_prefix_scan() {
        // "French" is a plain prefix test, so it also claims words that merely start with it
        let record = object("Frenchie Bob", "9am-5pm");
        assert_eq!(record.code, "French");
        assert_eq!(record.name, "ie Bob");
    }

    #[test]
    fn test_object_special_code_is_case_sensitive() {
        let record = object("first day Alex", "9am-5pm");
        assert_eq!(record.code, "first");
        assert_eq!(record.name, "day Alex");
    }

    #[test]
    fn test_object_without_code_keeps_name_verbatim() {
        let record = object("Annabelle Lee ", "10am-2pm");
        assert_eq!(record.code, "");
        assert_eq!(record.name, "Annabelle Lee ");
    }

    #[test]
    fn test_object_time_variants() {
        let record = object("ESL Kim", "10.30 am till 6 PM");
        assert_eq!(record.start, "10.30am");
        assert_eq!(record.finish, "6PM");

        let record = object("ESL Kim", "Start: 9:15am | Finish: 3:45pm");
        assert_eq!(record.start, "9:15am");
        assert_eq!(record.finish, "3:45pm");
    }

    #[test]
    fn test_object_single_time_falls_into_start() {
        let record = object("ESL Kim", "from 9am");
        assert_eq!(record.start, "from 9am");
        assert_eq!(record.finish, "");
    }

    #[test]
    fn test_text_french_code() {
        let record = text("French Marie 9am-5pm");
        assert_eq!(record.code, "French");
        assert_eq!(record.name, "Marie");
        assert_eq!(record.start, "9am");
        assert_eq!(record.finish, "5pm");
    }

    #[test]
    fn test_text_french_requires_space() {
        // Not followed by a space, and too long for the generic prefix
        let record = text("French-Marie 9am-5pm");
        assert_eq!(record.code, "");
        assert_eq!(record.name, "French-Marie");
    }

    #[test]
    fn test_text_generic_code() {
        let record = text("VIP Sakura 10:30am - 6pm");
        assert_eq!(record.code, "VIP");
        assert_eq!(record.name, "Sakura");
        assert_eq!(record.start, "10:30am");
        assert_eq!(record.finish, "6pm");
    }

    #[test]
    fn test_text_short_first_name_reads_as_code() {
        let record = text("Yuki 11am-7pm");
        assert_eq!(record.code, "Yuki");
        assert_eq!(record.name, "");
        assert_eq!(record.start, "11am");
    }

    #[test]
    fn test_text_long_name_has_no_code() {
        let record = text("Natasha 11am-7pm");
        assert_eq!(record.code, "");
        assert_eq!(record.name, "Natasha");
    }

    #[test]
    fn test_text_time_in_middle_is_cut_out() {
        let record = text("Natasha 11 am - 7 pm (late)");
        assert_eq!(record.name, "Natasha  (late)");
        assert_eq!(record.start, "11am");
        assert_eq!(record.finish, "7pm");
    }

    #[test]
    fn test_text_without_time() {
        let record = text("  Natasha Romanova  ");
        assert_eq!(record.code, "");
        assert_eq!(record.name, "Natasha Romanova");
        assert_eq!(record.start, "");
        assert_eq!(record.finish, "");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(text(""), CanonicalRecord::empty(0));
    }

    #[test]
    fn test_unrecognized_entry() {
        let record = parse_entry(&RawEntry::Unrecognized, 4);
        assert_eq!(record, CanonicalRecord::empty(4));
    }

    #[test]
    fn test_parse_entries_assigns_positions() {
        let entries = vec![
            RawEntry::text("French Marie 9am-5pm"),
            RawEntry::Unrecognized,
            RawEntry::object("ESL John", "10am-2pm"),
        ];
        let records = parse_entries(&entries);
        let indexes: Vec<usize> = records.iter().map(|r| r.original_index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(records[2].name, "John");
    }

    #[test]
    fn test_parse_is_repeatable() {
        let entry = RawEntry::object("Turkish Deniz", "9am-5pm");
        assert_eq!(parse_entry(&entry, 2), parse_entry(&entry, 2));
    }

    #[test]
    fn test_match_code_order_matters() {
        let found = match_code(&OBJECT_CODE_MATCHERS, "French Marie").unwrap();
        assert_eq!(found.code, "French");

        let reversed = [CodeMatcher::Prefix, CodeMatcher::Special("First Day")];
        let found = match_code(&reversed, "First Day Alex").unwrap();
        assert_eq!(found.code, "First");
    }
}
