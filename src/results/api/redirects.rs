use super::fetch_utils::map_request_error;
use crate::error::AppError;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Follows a URL through its redirect chain and returns the terminal URL.
///
/// Redirect depth is bounded by the client's redirect policy. A URL reqwest
/// cannot even build a request for is reported as a URL parse error.
#[instrument(skip(client))]
pub async fn follow_redirect(client: &Client, url: &str) -> Result<String, AppError> {
    let response = client.get(url).send().await.map_err(|e| {
        if e.is_builder() {
            warn!("Cannot build a request for {}: {}", url, e);
            AppError::url_parse(url)
        } else {
            map_request_error(url, e)
        }
    })?;

    let final_url = response.url().to_string();
    let status = response.status();
    if final_url != url {
        info!("Resolved {} to {}", url, final_url);
    } else {
        debug!("No redirect for {}", url);
    }
    if !status.is_success() {
        warn!("Final URL {} answered with status {}", final_url, status);
    }

    Ok(final_url)
}
