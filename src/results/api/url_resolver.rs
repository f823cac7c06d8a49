//! Resolves caller input into the identifiers the GraphQL API expects.
//!
//! Accepted shape, searched anywhere in the final URL's path:
//! `tournament/<tournament>(/event/<event>)?`, where each slug is a non-empty
//! run of characters other than `/` and whitespace.

use super::redirects::follow_redirect;
use super::urls::{build_event_query_identifier, build_tournament_url};
use crate::config::Config;
use crate::error::AppError;
use crate::results::models::{Source, UrlReference};
use reqwest::Client;
use tracing::{debug, instrument};

const TOURNAMENT_SEGMENT: &str = "tournament/";
const EVENT_SEGMENT: &str = "/event/";

fn leading_slug(s: &str) -> &str {
    let end = s
        .find(|c: char| c == '/' || c.is_whitespace())
        .unwrap_or(s.len());
    &s[..end]
}

/// Extracts the tournament slug and the optional event slug from a URL.
/// The query string and fragment are ignored.
///
/// # Example
/// ```
/// use smashgg_results::results::api::parse_tournament_path;
///
/// let (tournament, event) =
///     parse_tournament_path("https://smash.gg/tournament/genesis-9/event/melee-singles/overview")
///         .unwrap();
/// assert_eq!(tournament, "genesis-9");
/// assert_eq!(event.as_deref(), Some("melee-singles"));
/// ```
pub fn parse_tournament_path(url: &str) -> Option<(String, Option<String>)> {
    let path = url.split(['?', '#']).next().unwrap_or(url);

    path.match_indices(TOURNAMENT_SEGMENT).find_map(|(index, _)| {
        let rest = &path[index + TOURNAMENT_SEGMENT.len()..];
        let tournament = leading_slug(rest);
        if tournament.is_empty() {
            return None;
        }
        let event = rest[tournament.len()..]
            .strip_prefix(EVENT_SEGMENT)
            .map(leading_slug)
            .filter(|event| !event.is_empty());
        Some((tournament.to_string(), event.map(str::to_string)))
    })
}

impl UrlReference {
    /// Builds a reference from an already redirect-resolved URL.
    ///
    /// # Errors
    /// * `AppError::UrlParse` - The resolved URL has no tournament path
    pub fn from_resolved_url(
        raw_url: &str,
        resolved_url: &str,
        site_domain: &str,
    ) -> Result<Self, AppError> {
        let (tournament_slug, event_slug) =
            parse_tournament_path(resolved_url).ok_or_else(|| AppError::url_parse(resolved_url))?;

        let query_identifier = match &event_slug {
            Some(event) => build_event_query_identifier(&tournament_slug, event),
            None => tournament_slug.clone(),
        };

        Ok(UrlReference {
            raw_url: raw_url.to_string(),
            resolved_url: resolved_url.to_string(),
            is_tournament_wide: event_slug.is_none(),
            tournament_link: build_tournament_url(site_domain, &tournament_slug),
            tournament_slug,
            event_slug,
            query_identifier,
        })
    }
}

/// Turns caller input into a [`UrlReference`].
///
/// Input that does not come from smash.gg is treated as a bare tournament slug
/// and expanded to a tournament URL first. The URL is then followed through its
/// redirects, since short links only reveal the tournament path at the end of
/// the chain.
///
/// # Errors
/// * `AppError::MissingUrl` - No URL, or a blank one, was supplied
/// * `AppError::UrlParse` - The final URL has no tournament path
/// * Network errors from the redirect resolution
#[instrument(skip(client, config))]
pub async fn resolve_url(
    client: &Client,
    config: &Config,
    url: Option<&str>,
    source: &Source,
) -> Result<UrlReference, AppError> {
    // `raw_url` keeps the caller's input verbatim for messages; lookups use the trimmed form
    let raw_url = url.ok_or(AppError::MissingUrl)?;
    let input = raw_url.trim();
    if input.is_empty() {
        return Err(AppError::MissingUrl);
    }

    let full_url = match source {
        Source::Smashgg => input.to_string(),
        Source::Other(_) => build_tournament_url(&config.site_domain, input),
    };

    let resolved_url = follow_redirect(client, &full_url).await?;
    let reference = UrlReference::from_resolved_url(raw_url, &resolved_url, &config.site_domain)?;

    debug!(
        "Resolved {} to query identifier {} (tournament-wide: {})",
        raw_url, reference.query_identifier, reference.is_tournament_wide
    );
    Ok(reference)
}
