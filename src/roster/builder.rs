use chrono::{Duration, NaiveDateTime};

use crate::models::{CanonicalRecord, Day, Payload, Venue};
use crate::parsers::parse_entries;

/// Parse the roster `venue` published for `day`.
///
/// Records keep the scraper's emission order and are numbered from 0 in that order. A
/// venue missing from the payload gives an empty roster.
///
/// # Examples
///
/// ```
/// use roster_view::models::{Day, Venue};
/// use roster_view::parsers::parse_payload_str;
/// use roster_view::roster::build_roster;
///
/// let payload = parse_payload_str(
///     r#"{"ginza": {"rosters": [{"names": ["French Marie 9am-5pm"]}]}}"#,
/// )?;
/// let records = build_roster(&payload, Venue::Ginza, Day::Today);
/// assert_eq!(records[0].code, "French");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_roster(payload: &Payload, venue: Venue, day: Day) -> Vec<CanonicalRecord> {
    let Some(data) = payload.venue(venue) else {
        tracing::warn!("No roster data for {} ({})", venue.label(), venue.key());
        return Vec::new();
    };

    let entries = data.entries(day);
    let unrecognized = entries.iter().filter(|e| !e.is_recognized()).count();
    if unrecognized > 0 {
        tracing::debug!(
            "{} of {} entries for {} could not be read",
            unrecognized,
            entries.len(),
            venue.key()
        );
    }

    parse_entries(entries)
}

/// Heading for a day's roster, e.g. "Tomorrow's Roster (15/03/2025)"
///
/// Tomorrow's date is one day after `last_updated`. The date is left off when the payload
/// carries no timestamp or the date would fall outside the calendar range.
pub fn day_label(day: Day, last_updated: Option<NaiveDateTime>) -> String {
    let (heading, offset) = match day {
        Day::Today => ("Today's Roster", Duration::zero()),
        Day::Tomorrow => ("Tomorrow's Roster", Duration::days(1)),
    };

    match last_updated.and_then(|ts| ts.checked_add_signed(offset)) {
        Some(date) => format!("{} ({})", heading, date.format("%d/%m/%Y")),
        None => heading.to_string(),
    }
}
