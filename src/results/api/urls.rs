//! URL and identifier templates for smash.gg

use crate::constants::ENTRANT_ALIAS_PREFIX;

/// Builds the public tournament page URL for a tournament slug.
///
/// # Example
/// ```
/// use smashgg_results::results::api::build_tournament_url;
///
/// let url = build_tournament_url("https://smash.gg", "genesis-9");
/// assert_eq!(url, "https://smash.gg/tournament/genesis-9");
/// ```
pub fn build_tournament_url(site_domain: &str, tournament_slug: &str) -> String {
    format!("{site_domain}/tournament/{tournament_slug}")
}

/// Builds the canonical link of an event from its full slug.
///
/// # Example
/// ```
/// use smashgg_results::results::api::build_event_link;
///
/// let link = build_event_link("https://smash.gg", "tournament/genesis-9/event/melee-singles");
/// assert_eq!(link, "https://smash.gg/tournament/genesis-9/event/melee-singles");
/// ```
pub fn build_event_link(site_domain: &str, event_slug: &str) -> String {
    format!("{site_domain}/{event_slug}")
}

/// Builds the compound identifier the API expects for a single event.
///
/// # Example
/// ```
/// use smashgg_results::results::api::build_event_query_identifier;
///
/// let id = build_event_query_identifier("genesis-9", "melee-singles");
/// assert_eq!(id, "tournament/genesis-9/event/melee-singles");
/// ```
pub fn build_event_query_identifier(tournament_slug: &str, event_slug: &str) -> String {
    format!("tournament/{tournament_slug}/event/{event_slug}")
}

/// Builds the alias of the entrant field for the player at `index`.
///
/// # Example
/// ```
/// use smashgg_results::results::api::create_entrant_alias;
///
/// assert_eq!(create_entrant_alias(3), "entrant_3");
/// ```
pub fn create_entrant_alias(index: usize) -> String {
    format!("{ENTRANT_ALIAS_PREFIX}{index}")
}
