//! 12-hour time tokens to minutes since midnight, for ordering start and finish times.

use std::sync::LazyLock;

use regex::Regex;

static TIME_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^([0-9]{1,2})?(?:[:.]([0-9]{2}))? ?([ap]m)$").expect("valid time token regex")
});

const MINUTES_PER_HOUR: u32 = 60;
const HALF_DAY_MINUTES: u32 = 12 * MINUTES_PER_HOUR;

/// Convert a token like `"9am"`, `"10:30pm"` or `"7.15 PM"` into minutes since midnight.
///
/// 12am is 0 and 12pm is 720. A missing hour counts as 0 and missing minutes as 0.
/// Tokens that don't read as a 12-hour time (`""`, `"noon"`, `"13pm"`) return 0, so they
/// sort as the earliest time rather than being rejected.
///
/// # Examples
///
/// ```
/// use roster_view::parsers::time::to_minutes;
///
/// assert_eq!(to_minutes("9am"), 540);
/// assert_eq!(to_minutes("1:00pm"), 780);
/// assert_eq!(to_minutes("noon"), 0);
/// ```
pub fn to_minutes(token: &str) -> u32 {
    parse_minutes(token.trim()).unwrap_or(0)
}

fn parse_minutes(token: &str) -> Option<u32> {
    let caps = TIME_TOKEN_RE.captures(token)?;

    let hour = match caps.get(1) {
        Some(h) => h.as_str().parse::<u32>().ok().filter(|h| (1..=12).contains(h))?,
        None => 0,
    };
    let minutes = match caps.get(2) {
        Some(m) => m.as_str().parse::<u32>().ok().filter(|m| *m < MINUTES_PER_HOUR)?,
        None => 0,
    };
    let is_pm = caps[3].eq_ignore_ascii_case("pm");

    let base = (hour % 12) * MINUTES_PER_HOUR + minutes;
    Some(if is_pm { base + HALF_DAY_MINUTES } else { base })
}
