use super::graphql::execute_query;
use super::http_client::create_http_client_with_timeout;
use super::queries::{QueryPlan, build_query};
use super::url_resolver::resolve_url;
use crate::config::Config;
use crate::error::AppError;
use crate::results::models::{
    ErrorRecord, EventsOutcome, EventsRequest, GraphQlResponse, RawEvent, ResponseData,
    UrlReference,
};
use crate::results::processors::reshape_event;
use tracing::{info, instrument, warn};

/// Pulls the raw events out of a response for the query shape that was sent.
/// A missing, null or empty event list yields `None`.
fn extract_events(data: Option<ResponseData>, reference: &UrlReference) -> Option<Vec<RawEvent>> {
    let data = data?;
    let events = if reference.is_tournament_wide {
        data.tournament?.events?
    } else {
        vec![data.event?]
    };
    (!events.is_empty()).then_some(events)
}

/// Turns a GraphQL response into the caller-facing outcome.
///
/// Upstream errors short-circuit without reshaping, a response without events
/// yields a single [`ErrorRecord`], and otherwise every event is reshaped in
/// upstream order.
///
/// # Errors
/// * `AppError::NameParse` - A matched entrant's display name cannot be parsed
pub fn process_response(
    response: GraphQlResponse<ResponseData>,
    reference: &UrlReference,
    plan: &QueryPlan,
    site_domain: &str,
) -> Result<EventsOutcome, AppError> {
    if let Some(errors) = response.errors {
        warn!(
            "GraphQL API returned {} errors for {}",
            errors.len(),
            reference.query_identifier
        );
        return Ok(EventsOutcome::UpstreamErrors(
            errors
                .into_iter()
                .map(|error| ErrorRecord::new(error.message))
                .collect(),
        ));
    }

    let Some(events) = extract_events(response.data, reference) else {
        warn!("No events returned for {}", reference.raw_url);
        return Ok(EventsOutcome::no_events(&reference.raw_url));
    };

    info!(
        "Reshaping {} events for {}",
        events.len(),
        reference.query_identifier
    );
    events
        .into_iter()
        .map(|event| reshape_event(event, reference, site_domain, &plan.aliases))
        .collect::<Result<Vec<_>, _>>()
        .map(EventsOutcome::Events)
}

/// Resolves the request's URL, queries smash.gg for the requested players and
/// reshapes the response.
///
/// # Errors
/// * `AppError::MissingUrl` / `AppError::UrlParse` - The URL cannot be resolved to a tournament
/// * `AppError::NameParse` - A matched entrant's display name cannot be parsed
/// * Network, HTTP status and JSON errors from redirect resolution or the query
#[instrument(skip(client, config, request), fields(url = ?request.url, source = %request.source))]
pub async fn get_events(
    client: &reqwest::Client,
    config: &Config,
    request: &EventsRequest,
) -> Result<EventsOutcome, AppError> {
    let reference = resolve_url(client, config, request.url.as_deref(), &request.source).await?;
    let plan = build_query(&reference, &request.players);
    let response = execute_query(client, config, &plan).await?;
    process_response(response, &reference, &plan, &config.site_domain)
}

/// Loads the configuration, builds an HTTP client and runs [`get_events`].
pub async fn fetch_events(request: &EventsRequest) -> Result<EventsOutcome, AppError> {
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    get_events(&client, &config, request).await
}
