use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Lenient timestamp deserializer for venue data.
///
/// Accepts ISO-8601 strings with or without an offset (the scraper writes local time
/// without one) and integer Unix timestamps in milliseconds. Anything else resolves to
/// `None` so a bad timestamp never costs the venue's roster.
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let parsed = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(ref s)) => parse_timestamp_str(s),
        Some(Value::Number(ref n)) => {
            n.as_i64().and_then(DateTime::from_timestamp_millis).map(|dt| dt.naive_utc())
        }
        Some(_) => None,
    };

    if parsed.is_none() {
        tracing::warn!("Ignoring unreadable roster timestamp: {:?}", value);
    }
    Ok(parsed)
}

/// Read a list that the scraper may write as `null` when a tab had nothing on it.
///
/// `null` becomes an empty `Vec`. The field itself stays required unless it is also
/// marked `#[serde(default)]`.
pub fn deserialize_nullable_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn parse_timestamp_str(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}
