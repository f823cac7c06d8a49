//! smash.gg results pipeline: URL resolution, query dispatch, entrant matching
//! and response reshaping.

pub mod api;
pub mod models;
pub mod player_names;
pub mod processors;

pub use api::{fetch_events, get_events};
pub use models::{
    CanonicalEvent, ErrorRecord, EventsOutcome, EventsRequest, MatchedPlayer, Source,
    UrlReference,
};
