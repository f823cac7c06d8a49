use crate::error::AppError;
use crate::results::models::{MatchedPlayer, RawEntrant};
use crate::results::player_names::parse_player_name;
use tracing::debug;

/// Outcome of matching one player's search term against its entrant results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrantMatch {
    /// The search resolved to these players (one page of results).
    Players(Vec<MatchedPlayer>),
    /// The search spanned several pages and cannot be resolved.
    Ambiguous(String),
    /// No matches and no ambiguity.
    Empty,
}

/// Message recorded for a search term that matched more than one page of entrants.
pub fn ambiguous_match_message(search_term: &str) -> String {
    format!("Found too many players matching {search_term}. Please be more specific")
}

/// Converts a raw entrant into a canonical player, decomposing its display name.
pub fn to_matched_player(entrant: &RawEntrant) -> Result<MatchedPlayer, AppError> {
    let name = entrant.name.clone().unwrap_or_default();
    let parsed = parse_player_name(&name)?;
    Ok(MatchedPlayer {
        name,
        crew: parsed.crew,
        tag: parsed.tag,
        placement: entrant.standing.as_ref().and_then(|s| s.placement),
    })
}

/// Decides whether a player's entrant search is usable.
///
/// More than one result page wins over any partial match list and yields
/// [`EntrantMatch::Ambiguous`]. Otherwise every match is converted; a missing
/// match list yields [`EntrantMatch::Empty`].
///
/// # Errors
/// * `AppError::NameParse` - A matched entrant's display name cannot be parsed
pub fn match_entrants(
    search_term: &str,
    total_pages: u32,
    matches: Option<&[RawEntrant]>,
) -> Result<EntrantMatch, AppError> {
    if total_pages > 1 {
        debug!(
            "Search term '{}' spans {} pages, treating as ambiguous",
            search_term, total_pages
        );
        return Ok(EntrantMatch::Ambiguous(ambiguous_match_message(search_term)));
    }

    match matches {
        Some(entrants) => entrants
            .iter()
            .map(to_matched_player)
            .collect::<Result<Vec<_>, _>>()
            .map(EntrantMatch::Players),
        None => Ok(EntrantMatch::Empty),
    }
}
