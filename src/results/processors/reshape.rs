use super::dedup::OrderedSet;
use super::entrant_matching::{EntrantMatch, match_entrants};
use crate::error::AppError;
use crate::results::api::urls::build_event_link;
use crate::results::models::{CanonicalEvent, EntrantAlias, RawEvent, UrlReference};
use tracing::{debug, warn};

/// Reshapes one raw event into its canonical form.
///
/// Entrant groups are looked up through the explicit alias mapping built with
/// the query, so only requested players are considered and each group is
/// paired with the search term that produced it. Players and errors are
/// deduplicated by value in first-seen order.
///
/// # Errors
/// * `AppError::NameParse` - A matched entrant's display name cannot be parsed
pub fn reshape_event(
    mut event: RawEvent,
    reference: &UrlReference,
    site_domain: &str,
    aliases: &[EntrantAlias],
) -> Result<CanonicalEvent, AppError> {
    let mut players = OrderedSet::new();
    let mut errors = OrderedSet::new();

    let event_label = event.slug.clone().unwrap_or_else(|| event.id.to_string());

    for alias in aliases {
        let Some(group) = event.entrant_groups.remove(&alias.alias).flatten() else {
            warn!(
                "Event {} has no entrant group for {} ('{}')",
                event_label, alias.alias, alias.search_term
            );
            continue;
        };

        match match_entrants(&alias.search_term, group.total_pages(), group.nodes.as_deref())? {
            EntrantMatch::Players(matched) => {
                debug!(
                    "Search term '{}' matched {} entrants in {}",
                    alias.search_term,
                    matched.len(),
                    event_label
                );
                players.extend(matched);
            }
            EntrantMatch::Ambiguous(message) => {
                errors.insert(message);
            }
            EntrantMatch::Empty => {}
        }
    }

    Ok(CanonicalEvent {
        id: event.id,
        name: event.name,
        tournament: reference.tournament_slug.clone(),
        tournament_link: reference.tournament_link.clone(),
        link: event
            .slug
            .as_deref()
            .map(|slug| build_event_link(site_domain, slug)),
        slug: event.slug,
        players: players.into_vec(),
        errors: errors.into_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::api::queries::build_entrant_aliases;
    use crate::results::models::MatchedPlayer;
    use crate::testing_utils::TestDataBuilder;

    const SITE: &str = "https://smash.gg";

    fn players(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_single_player_scenario() {
        let terms = players(&["TeamA | Alice"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![(
                "entrant_0",
                TestDataBuilder::entrant_group(1, vec![("TeamA | Alice", Some(2))]),
            )],
        );
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();

        assert_eq!(
            canonical.players,
            vec![MatchedPlayer {
                name: "TeamA | Alice".to_string(),
                crew: Some("TeamA".to_string()),
                tag: Some("Alice".to_string()),
                placement: Some(2),
            }]
        );
        assert!(canonical.errors.is_empty());
        assert_eq!(canonical.tournament, "genesis");
        assert_eq!(canonical.tournament_link, "https://smash.gg/tournament/genesis");
        assert_eq!(
            canonical.link.as_deref(),
            Some("https://smash.gg/tournament/genesis/event/singles")
        );
        assert_eq!(
            canonical.slug.as_deref(),
            Some("tournament/genesis/event/singles")
        );
    }

    #[test]
    fn test_players_deduplicated_across_groups() {
        let terms = players(&["Alice", "TeamA"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![
                (
                    "entrant_0",
                    TestDataBuilder::entrant_group(1, vec![("TeamA | Alice", Some(2))]),
                ),
                (
                    "entrant_1",
                    TestDataBuilder::entrant_group(
                        1,
                        vec![("TeamA | Alice", Some(2)), ("TeamA | Bob", Some(5))],
                    ),
                ),
            ],
        );
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();

        let names: Vec<&str> = canonical.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["TeamA | Alice", "TeamA | Bob"]);
    }

    #[test]
    fn test_players_differing_in_placement_are_kept() {
        let terms = players(&["Alice", "Alice"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![
                ("entrant_0", TestDataBuilder::entrant_group(1, vec![("Alice", Some(2))])),
                ("entrant_1", TestDataBuilder::entrant_group(1, vec![("Alice", Some(3))])),
            ],
        );
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();
        assert_eq!(canonical.players.len(), 2);
    }

    #[test]
    fn test_ambiguous_errors_deduplicated() {
        let terms = players(&["Ali", "Ali", "Bob"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![
                ("entrant_0", TestDataBuilder::entrant_group(3, vec![("Alice", Some(1))])),
                ("entrant_1", TestDataBuilder::entrant_group(3, vec![("Alicia", Some(4))])),
                ("entrant_2", TestDataBuilder::entrant_group(1, vec![("Bob", None)])),
            ],
        );
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();

        assert_eq!(
            canonical.errors,
            vec!["Found too many players matching Ali. Please be more specific".to_string()]
        );
        assert_eq!(canonical.players.len(), 1);
        assert_eq!(canonical.players[0].tag.as_deref(), Some("Bob"));
        assert_eq!(canonical.players[0].placement, None);
    }

    #[test]
    fn test_unrequested_and_missing_groups_ignored() {
        let terms = players(&["Alice", "Carol"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![
                ("entrant_0", TestDataBuilder::entrant_group(1, vec![("Alice", Some(1))])),
                ("entrant_7", TestDataBuilder::entrant_group(1, vec![("Mallory", Some(9))])),
            ],
        );
        let reference = TestDataBuilder::tournament_reference("genesis");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();

        assert_eq!(canonical.players.len(), 1);
        assert_eq!(canonical.players[0].name, "Alice");
        assert!(canonical.errors.is_empty());
    }

    #[test]
    fn test_name_parse_failure_is_fatal() {
        let terms = players(&["Alice"]);
        let event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![(
                "entrant_0",
                TestDataBuilder::entrant_group(1, vec![("Team\nAlice", Some(1))]),
            )],
        );
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let result = reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms));
        assert!(matches!(result, Err(AppError::NameParse { .. })));
    }

    #[test]
    fn test_null_entrant_group_skipped() {
        let terms = players(&["Alice", "Bob"]);
        let mut event = TestDataBuilder::raw_event(
            "tournament/genesis/event/singles",
            vec![("entrant_1", TestDataBuilder::entrant_group(1, vec![("Bob", Some(4))]))],
        );
        event.entrant_groups.insert("entrant_0".to_string(), None);
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical =
            reshape_event(event, &reference, SITE, &build_entrant_aliases(&terms)).unwrap();

        assert_eq!(canonical.players.len(), 1);
        assert_eq!(canonical.players[0].name, "Bob");
        assert!(canonical.errors.is_empty());
    }

    #[test]
    fn test_missing_name_and_slug_pass_through() {
        let mut event = TestDataBuilder::raw_event("tournament/genesis/event/singles", vec![]);
        event.name = None;
        event.slug = None;
        let reference = TestDataBuilder::event_reference("genesis", "singles");

        let canonical = reshape_event(event, &reference, SITE, &[]).unwrap();

        assert_eq!(canonical.name, None);
        assert_eq!(canonical.slug, None);
        assert_eq!(canonical.link, None);
        assert_eq!(canonical.tournament, "genesis");
    }
}
