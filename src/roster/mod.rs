//! Roster selection: one venue and day out of a payload, parsed into canonical records.

pub mod builder;

pub use builder::{build_roster, day_label};
