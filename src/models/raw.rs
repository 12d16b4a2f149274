use serde::Deserialize;
use serde_json::Value;

/// One shift entry as emitted by the scraper.
///
/// The shape is decided once, when the entry is deserialized. Anything that is neither
/// a `{name, time}` object with both fields filled in nor a plain string becomes
/// [`RawEntry::Unrecognized`], which parses to an empty record instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum RawEntry {
    /// Name and time already split by the source. `name` may still carry a code prefix
    /// and `time` holds two time tokens with arbitrary text between them.
    Object { name: String, time: String },
    /// Code, name and time range run together in one string.
    Text(String),
    Unrecognized,
}

impl RawEntry {
    pub fn object(name: impl Into<String>, time: impl Into<String>) -> Self {
        Self::Object { name: name.into(), time: time.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl From<Value> for RawEntry {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => {
                let field = |key: &str| {
                    map.get(key)
                        .and_then(Value::as_str)
                        .filter(|s| !s.is_empty())
                        .map(str::to_owned)
                };
                match (field("name"), field("time")) {
                    (Some(name), Some(time)) => Self::Object { name, time },
                    _ => Self::Unrecognized,
                }
            }
            _ => Self::Unrecognized,
        }
    }
}
