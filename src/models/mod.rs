//! Data models for scraped venue rosters.
//!
//! - [`RawEntry`] - One shift entry as the scraper emitted it (object or string form)
//! - [`CanonicalRecord`] - Normalized `{code, name, start, finish}` row with its original position
//! - [`QuerySpec`] - Filter text and sort order for one view of a roster
//! - [`Payload`] - Saved scrape results keyed by [`Venue`]
//!
//! Payload models use serde with custom deserializers (in `parsers::deserializers`)
//! so that malformed entries and timestamps degrade instead of failing the load.

pub mod payload;
pub mod query;
pub mod raw;
pub mod record;

pub use payload::{BlockRoster, DailyRoster, Day, Payload, RosterBlock, Venue, VenueData};
pub use query::{QuerySpec, SortDirection, SortField};
pub use raw::RawEntry;
pub use record::CanonicalRecord;
