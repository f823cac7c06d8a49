//! Raw smash.gg GraphQL response types. Only the fields the reshaper reads are modelled.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// GraphQL response envelope. `errors` takes priority over `data` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

/// `data` payload shared by the tournament-wide and the single-event query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub tournament: Option<RawTournament>,
    #[serde(default)]
    pub event: Option<RawEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTournament {
    #[serde(default)]
    pub events: Option<Vec<RawEvent>>,
}

/// smash.gg returns ids as numbers but documents them as strings, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    String(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => n.fmt(f),
            EventId::String(s) => s.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub id: EventId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    /// Aliased entrant searches (`entrant_0`, `entrant_1`, ...). A search the
    /// API failed to resolve comes back as `null`.
    #[serde(flatten)]
    pub entrant_groups: HashMap<String, Option<EntrantGroup>>,
}

/// One paginated entrant search for a single player.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntrantGroup {
    #[serde(rename = "pageInfo", default)]
    pub page_info: Option<PageInfo>,
    #[serde(default)]
    pub nodes: Option<Vec<RawEntrant>>,
}

impl EntrantGroup {
    /// Number of result pages, zero when the API left it out.
    pub fn total_pages(&self) -> u32 {
        self.page_info
            .as_ref()
            .and_then(|info| info.total_pages)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "totalPages", default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawEntrant {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub standing: Option<Standing>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Standing {
    #[serde(default)]
    pub placement: Option<i64>,
}
