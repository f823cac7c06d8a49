//! smash.gg tournament results library
//!
//! Resolves a smash.gg tournament or event URL, looks up a list of players in
//! the smash.gg GraphQL API and returns their standings in a stable shape that
//! does not depend on the upstream schema.
//!
//! # Examples
//!
//! ```rust,no_run
//! use smashgg_results::{AppError, Config, EventsOutcome, EventsRequest, Source, get_events};
//! use smashgg_results::results::api::create_http_client_with_timeout;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let request = EventsRequest::new(
//!         "https://smash.gg/tournament/genesis-9/event/melee-singles",
//!         Source::Smashgg,
//!         vec!["Mang0".to_string(), "Liquid | Hungrybox".to_string()],
//!     );
//!
//!     match get_events(&client, &config, &request).await? {
//!         EventsOutcome::Events(events) => {
//!             for event in events {
//!                 println!("{}: {} players", event.id, event.players.len());
//!             }
//!         }
//!         other => eprintln!("{:?}", other.error_records()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod results;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use results::{
    CanonicalEvent, ErrorRecord, EventsOutcome, EventsRequest, MatchedPlayer, Source,
    UrlReference, fetch_events, get_events,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
