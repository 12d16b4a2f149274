use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::models::{Payload, Venue, VenueData};
use crate::utils::open_results_file;

/// Load saved scrape results from `path`.
///
/// Venues are read independently: an unknown venue key or a venue whose data matches
/// neither roster shape is logged and skipped, the rest still load.
///
/// # Errors
///
/// Returns an error if the file can't be opened or read, is larger than 10MB, isn't a
/// JSON object, or is the `{"error": "..."}` reply written when no scrape has run yet.
pub fn load_payload(path: &Path) -> Result<Payload> {
    let mut file = open_results_file(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read results file: {}", path.display()))?;

    parse_payload_str(&content)
        .with_context(|| format!("Failed to load results from {}", path.display()))
}

/// Parse a results document already held in memory
pub fn parse_payload_str(content: &str) -> Result<Payload> {
    let value: Value = serde_json::from_str(content).context("Results are not valid JSON")?;

    let Value::Object(map) = value else {
        bail!("Results must be a JSON object keyed by venue");
    };

    if let Some(Value::String(message)) = map.get("error") {
        bail!("Results unavailable: {}", message);
    }

    let mut payload = Payload::new();
    let mut skipped = 0;

    for (key, data) in map {
        let Some(venue) = Venue::from_key(&key) else {
            tracing::warn!("Skipping unknown venue '{}' in results", key);
            skipped += 1;
            continue;
        };

        match serde_json::from_value::<VenueData>(data) {
            Ok(data) => payload.insert(venue, data),
            Err(e) => {
                tracing::warn!("Skipping venue '{}': unrecognized roster data ({})", key, e);
                skipped += 1;
            }
        }
    }

    if payload.is_empty() {
        tracing::warn!("Results contain no readable venues");
    }
    tracing::debug!("Loaded {} venues ({} skipped)", payload.venues().count(), skipped);

    Ok(payload)
}
