use super::fetch_utils::{error_for_status, map_request_error, parse_json_body};
use super::queries::QueryPlan;
use crate::config::Config;
use crate::error::AppError;
use crate::results::models::{GraphQlResponse, ResponseData};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Types the `data` payload of an envelope that has no `errors`.
///
/// When `errors` is present the payload is dropped untouched: partial data
/// may carry nulls in fields that failed upstream, and upstream errors are
/// reported without reshaping anyway.
fn into_typed_response(
    envelope: GraphQlResponse<Value>,
    url: &str,
) -> Result<GraphQlResponse<ResponseData>, AppError> {
    if let Some(errors) = envelope.errors {
        return Ok(GraphQlResponse {
            data: None,
            errors: Some(errors),
        });
    }

    let data = envelope
        .data
        .map(serde_json::from_value::<ResponseData>)
        .transpose()
        .map_err(|e| {
            warn!("Unexpected GraphQL data shape: {} (URL: {})", e, url);
            AppError::api_unexpected_structure(e.to_string(), url)
        })?;

    Ok(GraphQlResponse { data, errors: None })
}

/// Executes a query plan against the configured GraphQL endpoint.
///
/// A non-success status whose body still carries GraphQL `errors` is returned as
/// a normal response so the caller can surface those messages; any other
/// non-success status becomes a typed HTTP error.
#[instrument(skip(client, config, plan), fields(slug = %plan.variables.slug))]
pub async fn execute_query(
    client: &Client,
    config: &Config,
    plan: &QueryPlan,
) -> Result<GraphQlResponse<ResponseData>, AppError> {
    let url = config.api_endpoint.as_str();
    info!("Querying {} for {} players", url, plan.aliases.len());

    let response = client
        .post(url)
        .bearer_auth(&config.api_token)
        .json(&plan.request_body())
        .send()
        .await
        .map_err(|e| map_request_error(url, e))?;

    let status = response.status();
    debug!("Response status: {status}");

    let response_text = response.text().await?;
    debug!("Response length: {} bytes", response_text.len());

    if !status.is_success() {
        if let Ok(envelope) = serde_json::from_str::<GraphQlResponse<Value>>(&response_text)
            && envelope.errors.is_some()
        {
            warn!("GraphQL errors returned with status {status}");
            return into_typed_response(envelope, url);
        }
        return Err(error_for_status(status, url));
    }

    let envelope: GraphQlResponse<Value> = parse_json_body(&response_text, url)?;
    into_typed_response(envelope, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::api::http_client::create_test_http_client;
    use crate::results::api::queries::build_query;
    use crate::testing_utils::TestDataBuilder;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn plan() -> QueryPlan {
        build_query(
            &TestDataBuilder::event_reference("genesis", "singles"),
            &["Alice".to_string()],
        )
    }

    #[tokio::test]
    async fn test_sends_authenticated_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gql"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_partial_json(json!({
                "variables": { "slug": "tournament/genesis/event/singles" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "event": { "id": 1, "name": "Singles", "slug": "tournament/genesis/event/singles" } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let response = execute_query(&client, &config, &plan()).await.unwrap();

        let event = response.data.unwrap().event.unwrap();
        assert_eq!(event.name.as_deref(), Some("Singles"));
        assert!(response.errors.is_none());
    }

    #[tokio::test]
    async fn test_graphql_errors_on_error_status_are_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{ "message": "bad slug" }]
            })))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let response = execute_query(&client, &config, &plan()).await.unwrap();
        assert_eq!(response.errors.unwrap()[0].message, "bad slug");
    }

    #[tokio::test]
    async fn test_unauthorized_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "success": false, "message": "Invalid token" })),
            )
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let result = execute_query(&client, &config, &plan()).await;
        assert!(matches!(result, Err(AppError::ApiUnauthorized { status: 401, .. })));
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let result = execute_query(&client, &config, &plan()).await;
        assert!(matches!(result, Err(AppError::ApiServerError { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let result = execute_query(&client, &config, &plan()).await;
        assert!(matches!(result, Err(AppError::ApiMalformedJson { .. })));
    }

    #[tokio::test]
    async fn test_errors_with_partial_data_are_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "event": {
                        "id": 1,
                        "name": "S",
                        "slug": "tournament/g/event/s",
                        "entrant_0": null,
                        "entrant_1": "not an entrant group"
                    }
                },
                "errors": [{ "message": "entrants failed" }]
            })))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let response = execute_query(&client, &config, &plan()).await.unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.unwrap()[0].message, "entrants failed");
    }

    #[tokio::test]
    async fn test_unexpected_data_without_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": { "event": { "id": [1, 2] } }
            })))
            .mount(&server)
            .await;

        let client = create_test_http_client();
        let config = TestDataBuilder::config(&format!("{}/gql", server.uri()), &server.uri());
        let result = execute_query(&client, &config, &plan()).await;
        assert!(matches!(result, Err(AppError::ApiUnexpectedStructure { .. })));
    }
}
