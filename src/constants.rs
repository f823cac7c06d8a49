//! Application-wide constants and configuration values
//!
//! This module centralizes the magic numbers and default settings used by
//! the resolver, the GraphQL transport and the configuration layer.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Maximum number of redirect hops followed when resolving short links
pub const MAX_REDIRECTS: usize = 20;

/// Default smash.gg GraphQL endpoint
pub const DEFAULT_API_ENDPOINT: &str = "https://api.smash.gg/gql/alpha";

/// Default smash.gg site used for bare slugs and canonical links
pub const DEFAULT_SITE_DOMAIN: &str = "https://smash.gg";

/// Source tag identifying input that is already a smash.gg URL
pub const SMASHGG_SOURCE: &str = "smashgg";

/// Entrants requested per search term. More than one page of results means
/// the search term is ambiguous.
pub const ENTRANTS_PER_PAGE: u32 = 5;

/// Prefix of the aliased entrant fields in both query shapes
pub const ENTRANT_ALIAS_PREFIX: &str = "entrant_";

/// Separator between crew and tag in a display name
pub const CREW_SEPARATOR: &str = " | ";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_ENDPOINT: &str = "SMASHGG_GRAPHQL_ENDPOINT";
    pub const API_TOKEN: &str = "SMASHGG_GRAPHQL_TOKEN";
    pub const SITE_DOMAIN: &str = "SMASHGG_SITE_DOMAIN";
    pub const LOG_FILE: &str = "SMASHGG_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "SMASHGG_HTTP_TIMEOUT";
}

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "smashgg_results";

/// Default log file name
pub const LOG_FILE_NAME: &str = "smashgg_results.log";
