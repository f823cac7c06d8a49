use serde::{Deserialize, Serialize};

/// A tournament or event URL resolved to the identifiers the GraphQL API expects.
///
/// `event_slug` is present exactly when the reference is not tournament-wide, in
/// which case `query_identifier` is `tournament/<tournament>/event/<event>`.
/// Otherwise `query_identifier` equals `tournament_slug`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlReference {
    pub raw_url: String,
    pub resolved_url: String,
    pub is_tournament_wide: bool,
    pub tournament_slug: String,
    pub event_slug: Option<String>,
    pub query_identifier: String,
    pub tournament_link: String,
}

/// Explicit mapping from an aliased entrant field to the search term that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrantAlias {
    pub index: usize,
    pub alias: String,
    pub search_term: String,
}
