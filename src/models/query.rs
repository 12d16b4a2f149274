use std::fmt;
use std::str::FromStr;

use anyhow::{Error, anyhow};

/// Column a roster view is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Code,
    Name,
    Start,
    Finish,
    /// Scraper emission order, via `original_index`
    #[default]
    Original,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Filter text plus sort order for one view of a roster.
///
/// Built fresh for each interaction and never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuerySpec {
    pub filter_text: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl QuerySpec {
    pub fn new(filter_text: impl Into<String>) -> Self {
        Self { filter_text: filter_text.into(), ..Self::default() }
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_field = field;
        self.sort_direction = direction;
        self
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code" => Ok(Self::Code),
            "name" => Ok(Self::Name),
            "start" => Ok(Self::Start),
            "finish" => Ok(Self::Finish),
            "original" => Ok(Self::Original),
            _ => Err(anyhow!(
                "Unknown sort field: '{}' (valid fields: code, name, start, finish, original)",
                s
            )),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Code => "code",
            Self::Name => "name",
            Self::Start => "start",
            Self::Finish => "finish",
            Self::Original => "original",
        };
        f.write_str(name)
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(anyhow!("Unknown sort direction: '{}' (expected asc or desc)", s)),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}
