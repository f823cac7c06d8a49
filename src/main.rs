// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use futures::future::join_all;
use smashgg_results::results::api::create_http_client_with_timeout;
use smashgg_results::{AppError, Config, EventsOutcome, EventsRequest, Source, get_events};

/// Applies the requested config changes and saves the file.
async fn update_config(args: Args) -> Result<(), AppError> {
    let mut config = Config::load_from_path(&Config::get_config_path())
        .await
        .unwrap_or_default();

    if let Some(endpoint) = args.new_api_endpoint {
        config.api_endpoint = endpoint;
    }
    if let Some(token) = args.new_api_token {
        config.api_token = token;
    }
    if let Some(site_domain) = args.new_site_domain {
        config.site_domain = site_domain;
    }
    if let Some(new_log_path) = args.new_log_file_path {
        config.log_file_path = Some(new_log_path);
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

fn print_outcome(outcome: &EventsOutcome, pretty: bool) -> Result<(), AppError> {
    let json = if pretty {
        serde_json::to_string_pretty(outcome)?
    } else {
        serde_json::to_string(outcome)?
    };
    println!("{json}");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        return update_config(args).await;
    }

    if args.urls.is_empty() {
        return Err(AppError::MissingUrl);
    }

    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let source = Source::from(args.source.as_str());

    let requests: Vec<EventsRequest> = args
        .urls
        .iter()
        .map(|url| EventsRequest::new(url.as_str(), source.clone(), args.players.clone()))
        .collect();

    let results = join_all(
        requests
            .iter()
            .map(|request| get_events(&client, &config, request)),
    )
    .await;

    let mut first_error = None;
    for (request, result) in requests.iter().zip(results) {
        match result {
            Ok(outcome) => print_outcome(&outcome, args.pretty)?,
            Err(e) => {
                let url = request.url.as_deref().unwrap_or_default();
                if e.is_input_error() {
                    tracing::warn!("Rejected input {url}: {e}");
                } else {
                    tracing::error!("Lookup failed for {url}: {e}");
                }
                eprintln!("Error for {url}: {e}");
                if e.is_network_error() {
                    eprintln!("Check your network connection and the configured endpoint.");
                }
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
