use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};
use chrono::NaiveDateTime;
use serde::Deserialize;

use super::raw::RawEntry;

/// Scraped venues, declared in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Venue {
    No5,
    Ginza,
    Ginza479,
}

impl Venue {
    pub const ALL: [Venue; 3] = [Venue::No5, Venue::Ginza, Venue::Ginza479];

    /// Key the venue is stored under in the results file
    pub fn key(self) -> &'static str {
        match self {
            Self::No5 => "no5",
            Self::Ginza => "ginza",
            Self::Ginza479 => "ginza479",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::No5 => "Marrickville",
            Self::Ginza => "Cleveland St",
            Self::Ginza479 => "Elizabeth St",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }
}

impl FromStr for Venue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(&s.to_lowercase())
            .ok_or_else(|| anyhow!("Unknown venue: '{}' (valid venues: no5, ginza, ginza479)", s))
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Which of the two published rosters to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Day {
    #[default]
    Today,
    Tomorrow,
}

impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            _ => Err(anyhow!("Unknown day: '{}' (expected today or tomorrow)", s)),
        }
    }
}

/// Venue publishing separate `today` and `tomorrow` lists
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyRoster {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_nullable_list")]
    pub today: Vec<RawEntry>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_nullable_list")]
    pub tomorrow: Vec<RawEntry>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RosterBlock {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_nullable_list")]
    pub names: Vec<RawEntry>,
}

/// Venue publishing a list of roster blocks; the first is today, the second tomorrow
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BlockRoster {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_nullable_list")]
    pub rosters: Vec<RosterBlock>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VenueData {
    Daily(DailyRoster),
    Blocks(BlockRoster),
}

impl VenueData {
    /// Entries published for `day`; empty when the venue has no roster for it
    pub fn entries(&self, day: Day) -> &[RawEntry] {
        match (self, day) {
            (Self::Daily(roster), Day::Today) => &roster.today,
            (Self::Daily(roster), Day::Tomorrow) => &roster.tomorrow,
            (Self::Blocks(roster), day) => {
                let index = match day {
                    Day::Today => 0,
                    Day::Tomorrow => 1,
                };
                roster.rosters.get(index).map(|block| block.names.as_slice()).unwrap_or_default()
            }
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Daily(roster) => roster.title.as_deref(),
            Self::Blocks(roster) => roster.title.as_deref(),
        }
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Daily(roster) => roster.timestamp,
            Self::Blocks(roster) => roster.timestamp,
        }
    }
}

/// Saved scrape results, one entry per venue that was present and readable
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload {
    venues: BTreeMap<Venue, VenueData>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, venue: Venue, data: VenueData) {
        self.venues.insert(venue, data);
    }

    pub fn venue(&self, venue: Venue) -> Option<&VenueData> {
        self.venues.get(&venue)
    }

    /// Venues present in the payload, in display order
    pub fn venues(&self) -> impl Iterator<Item = (Venue, &VenueData)> {
        self.venues.iter().map(|(venue, data)| (*venue, data))
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    /// Timestamp of the first venue (in display order) that recorded one
    pub fn last_updated(&self) -> Option<NaiveDateTime> {
        self.venues.values().find_map(VenueData::timestamp)
    }
}
