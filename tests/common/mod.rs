//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};
use tempfile::TempDir;

pub const TIMESTAMP: &str = "2025-03-14T08:30:00.123456";

/// Builder for a saved scrape results file in a temp directory
pub struct ResultsFileBuilder {
    temp_dir: TempDir,
    venues: Map<String, Value>,
}

impl ResultsFileBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, venues: Map::new() }
    }

    /// Add a venue that publishes `today` and `tomorrow` lists
    pub fn with_daily_venue(mut self, key: &str, today: Vec<Value>, tomorrow: Vec<Value>) -> Self {
        self.venues.insert(
            key.to_string(),
            json!({
                "title": "Marrickville",
                "today": today,
                "tomorrow": tomorrow,
                "timestamp": TIMESTAMP,
            }),
        );
        self
    }

    /// Add a venue that publishes roster blocks of plain strings
    pub fn with_block_venue(mut self, key: &str, blocks: &[&[&str]]) -> Self {
        let rosters: Vec<Value> =
            blocks.iter().map(|names| json!({"title": "Roster", "names": names})).collect();
        self.venues.insert(
            key.to_string(),
            json!({"title": "Cleveland", "rosters": rosters, "timestamp": TIMESTAMP}),
        );
        self
    }

    /// Add a venue with arbitrary JSON
    pub fn with_raw_venue(mut self, key: &str, value: Value) -> Self {
        self.venues.insert(key.to_string(), value);
        self
    }

    /// Write `latest_results.json` and return the temp dir holding it
    pub fn build(self) -> TempDir {
        let content = Value::Object(self.venues).to_string();
        write_results(self.temp_dir.path(), &content);
        self.temp_dir
    }
}

impl Default for ResultsFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write raw content as `latest_results.json` inside `dir`
pub fn write_results(dir: &Path, content: &str) -> PathBuf {
    let path = results_path(dir);
    fs::write(&path, content).expect("Failed to write results file");
    path
}

pub fn results_path(dir: &Path) -> PathBuf {
    dir.join("latest_results.json")
}

/// Object-shaped entry as the Marrickville scraper writes it
pub fn object_entry(name: &str, time: &str) -> Value {
    json!({"name": name, "time": time})
}

/// A results file with all three venues populated
pub fn sample_results() -> TempDir {
    ResultsFileBuilder::new()
        .with_daily_venue(
            "no5",
            vec![
                object_entry("ESL John Smith", "10:30am - 11:30am"),
                object_entry("First Day Alex", "noon"),
                object_entry("Turkish Deniz", "9am - 5pm"),
                object_entry("Kimberley", "1pm - 9pm"),
            ],
            vec![object_entry("French Amelie", "11am - 7pm")],
        )
        .with_block_venue(
            "ginza",
            &[
                &["French Marie 9am-5pm", "VIP Sakura 10:30am - 6pm", "Natasha 12pm-8pm"],
                &["Natasha 11am-7pm"],
            ],
        )
        .with_block_venue("ginza479", &[&["Momoko 2pm-10pm"]])
        .build()
}
