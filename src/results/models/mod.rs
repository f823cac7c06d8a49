pub mod canonical;
pub mod raw;
pub mod reference;
pub mod request;

pub use canonical::{CanonicalEvent, ErrorRecord, EventsOutcome, MatchedPlayer};
pub use raw::{
    EntrantGroup, EventId, GraphQlError, GraphQlResponse, PageInfo, RawEntrant, RawEvent,
    RawTournament, ResponseData, Standing,
};
pub use reference::{EntrantAlias, UrlReference};
pub use request::{EventsRequest, Source};
