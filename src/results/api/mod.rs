mod core;
mod fetch_utils;
pub mod graphql;
pub mod http_client;
pub mod queries;
pub mod redirects;
pub mod url_resolver;
pub mod urls;

pub use self::core::*;
pub use graphql::execute_query;
pub use http_client::create_http_client_with_timeout;
pub use queries::{
    GraphQlRequest, QueryPlan, QueryVariables, build_entrant_aliases, build_query, event_query,
    tournament_query,
};
pub use redirects::follow_redirect;
pub use url_resolver::{parse_tournament_path, resolve_url};
pub use urls::*;
