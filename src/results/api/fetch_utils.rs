//! Error mapping shared by the redirect resolver and the GraphQL transport

use crate::error::AppError;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::error;

/// Maps a failed request to a typed error.
pub(super) fn map_request_error(url: &str, e: reqwest::Error) -> AppError {
    error!("Request failed for URL {}: {}", url, e);
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_connect() {
        AppError::network_connection(url, e.to_string())
    } else {
        AppError::ApiFetch(e)
    }
}

/// Maps a non-success HTTP status to a typed error.
pub(super) fn error_for_status(status: StatusCode, url: &str) -> AppError {
    let status_code = status.as_u16();
    let reason = status.canonical_reason().unwrap_or("Unknown error");

    error!("HTTP {} - {} (URL: {})", status_code, reason, url);

    match status_code {
        401 | 403 => AppError::api_unauthorized(status_code, reason, url),
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Parses a response body, telling empty bodies, non-JSON bodies and
/// unexpected JSON structures apart.
pub(super) fn parse_json_body<T: DeserializeOwned>(text: &str, url: &str) -> Result<T, AppError> {
    serde_json::from_str::<T>(text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        error!(
            "Response text (first 200 chars): {}",
            text.chars().take(200).collect::<String>()
        );

        if text.trim().is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !text.trim_start().starts_with('{') && !text.trim_start().starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}
