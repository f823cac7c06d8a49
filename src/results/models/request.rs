use crate::constants::SMASHGG_SOURCE;
use std::fmt;

/// Where the caller's URL came from. Anything other than smash.gg is treated
/// as a bare tournament slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Smashgg,
    Other(String),
}

impl From<&str> for Source {
    fn from(tag: &str) -> Self {
        if tag == SMASHGG_SOURCE {
            Source::Smashgg
        } else {
            Source::Other(tag.to_string())
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Smashgg => f.write_str(SMASHGG_SOURCE),
            Source::Other(tag) => f.write_str(tag),
        }
    }
}

/// Input of the public `get_events` entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsRequest {
    pub url: Option<String>,
    pub source: Source,
    /// Player search terms; position is the join key to the aliased entrant fields.
    pub players: Vec<String>,
}

impl EventsRequest {
    pub fn new(url: impl Into<String>, source: impl Into<Source>, players: Vec<String>) -> Self {
        Self {
            url: Some(url.into()),
            source: source.into(),
            players,
        }
    }
}
