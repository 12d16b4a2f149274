//! Roster View - Normalize, search and sort scraped venue shift rosters
//!
//! Venues publish their shift rosters in loosely structured text. This library turns
//! those entries into uniform records and queries them. It supports:
//!
//! - Loading the saved scrape results file (`latest_results.json`)
//! - Parsing object entries (`{name, time}`) and free-text entries into
//!   `{code, name, start, finish}` records that remember their original position
//! - Comparing 12-hour times as minutes since midnight
//! - Filtering by substring and sorting by any column, or back into scraper order
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use roster_view::models::{Day, QuerySpec, SortDirection, SortField, Venue};
//! use roster_view::{build_roster, load_payload, run_query};
//!
//! let payload = load_payload(Path::new("latest_results.json"))?;
//! let records = build_roster(&payload, Venue::Ginza, Day::Today);
//! let spec = QuerySpec::new("french").sorted_by(SortField::Start, SortDirection::Asc);
//! let view = run_query(&records, &spec);
//! println!("Showing {} of {} entries", view.shown, view.total);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod models;
pub mod parsers;
pub mod query;
pub mod roster;
pub mod utils;

// Re-export commonly used types
pub use models::{CanonicalRecord, QuerySpec, RawEntry};
pub use parsers::{load_payload, parse_entries, parse_entry, to_minutes};
pub use query::{QueryView, query, run_query};
pub use roster::build_roster;
pub use utils::format_path_with_tilde;
