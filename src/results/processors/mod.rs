pub mod dedup;
pub mod entrant_matching;
pub mod reshape;

pub use dedup::OrderedSet;
pub use entrant_matching::{EntrantMatch, ambiguous_match_message, match_entrants, to_matched_player};
pub use reshape::reshape_event;
