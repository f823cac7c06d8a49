use crate::config::Config;
use crate::results::api::{build_event_query_identifier, build_tournament_url};
use crate::results::models::{
    EntrantGroup, EventId, PageInfo, RawEntrant, RawEvent, Standing, UrlReference,
};
use std::collections::HashMap;

const DEFAULT_SITE: &str = "https://smash.gg";

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a config pointing at the given endpoint and site, with a fixed token
    pub fn config(api_endpoint: &str, site_domain: &str) -> Config {
        Config {
            api_endpoint: api_endpoint.to_string(),
            api_token: "test-token".to_string(),
            site_domain: site_domain.to_string(),
            log_file_path: None,
            http_timeout_seconds: 5,
        }
    }

    /// Creates a raw entrant with an optional final placement
    pub fn raw_entrant(name: &str, placement: Option<i64>) -> RawEntrant {
        RawEntrant {
            name: Some(name.to_string()),
            standing: placement.map(|placement| Standing {
                placement: Some(placement),
            }),
        }
    }

    /// Creates an entrant search result with the given page count and matches
    pub fn entrant_group(total_pages: u32, matches: Vec<(&str, Option<i64>)>) -> EntrantGroup {
        EntrantGroup {
            page_info: Some(PageInfo {
                total_pages: Some(total_pages),
            }),
            nodes: Some(
                matches
                    .into_iter()
                    .map(|(name, placement)| Self::raw_entrant(name, placement))
                    .collect(),
            ),
        }
    }

    /// Creates a raw event named after the last segment of its slug
    pub fn raw_event(slug: &str, groups: Vec<(&str, EntrantGroup)>) -> RawEvent {
        let name = slug.rsplit('/').next().unwrap_or(slug).to_string();
        RawEvent {
            id: EventId::Number(slug.len() as i64),
            name: Some(name),
            slug: Some(slug.to_string()),
            entrant_groups: groups
                .into_iter()
                .map(|(alias, group)| (alias.to_string(), Some(group)))
                .collect::<HashMap<_, _>>(),
        }
    }

    /// Creates a tournament-wide reference as if resolved from a bare slug
    pub fn tournament_reference(tournament: &str) -> UrlReference {
        let link = build_tournament_url(DEFAULT_SITE, tournament);
        UrlReference {
            raw_url: tournament.to_string(),
            resolved_url: link.clone(),
            is_tournament_wide: true,
            tournament_slug: tournament.to_string(),
            event_slug: None,
            query_identifier: tournament.to_string(),
            tournament_link: link,
        }
    }

    /// Creates a single-event reference as if resolved from a full event URL
    pub fn event_reference(tournament: &str, event: &str) -> UrlReference {
        let query_identifier = build_event_query_identifier(tournament, event);
        let resolved_url = format!("{DEFAULT_SITE}/{query_identifier}");
        UrlReference {
            raw_url: resolved_url.clone(),
            resolved_url,
            is_tournament_wide: false,
            tournament_slug: tournament.to_string(),
            event_slug: Some(event.to_string()),
            query_identifier,
            tournament_link: build_tournament_url(DEFAULT_SITE, tournament),
        }
    }
}
