//! Parsers for saved scrape results and the roster entries inside them
//!
//! # Error Handling Strategy
//!
//! Two layers with different contracts:
//!
//! - **Entry and time parsing** ([`entry`], [`time`]): total functions. A code prefix or
//!   time range that doesn't match leaves the field empty, an unreadable time sorts as
//!   midnight. Nothing here returns an error.
//!
//! - **Payload loading** ([`payload`]): file and JSON errors are returned as
//!   `anyhow::Result` with context. Inside a readable file, bad venues are logged and
//!   skipped and bad entries become [`RawEntry::Unrecognized`](crate::models::RawEntry),
//!   so one broken venue never hides the others.

pub mod deserializers;
pub mod entry;
pub mod payload;
pub mod time;

pub use entry::{parse_entries, parse_entry};
pub use payload::{load_payload, parse_payload_str};
pub use time::to_minutes;
