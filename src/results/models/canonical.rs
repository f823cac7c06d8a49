//! Caller-facing result types. Serialized field names follow the JSON the
//! results display consumes.

use super::raw::EventId;
use serde::{Deserialize, Serialize};

/// A player matched to one search term, with the display name decomposed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchedPlayer {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalEvent {
    pub id: EventId,
    pub name: Option<String>,
    /// Tournament slug the event belongs to.
    pub tournament: String,
    #[serde(rename = "tournamentLink")]
    pub tournament_link: String,
    /// Event page on the site; `null` when the API returned no slug.
    pub link: Option<String>,
    pub slug: Option<String>,
    pub players: Vec<MatchedPlayer>,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
}

impl ErrorRecord {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result of a successful `get_events` call.
///
/// Serializes untagged: `Events` and `UpstreamErrors` become JSON arrays while
/// `NoEvents` becomes a single object, so consumers must branch on the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventsOutcome {
    Events(Vec<CanonicalEvent>),
    UpstreamErrors(Vec<ErrorRecord>),
    NoEvents(ErrorRecord),
}

impl EventsOutcome {
    /// Builds the record returned when the API has no events for a URL.
    pub fn no_events(url: &str) -> Self {
        EventsOutcome::NoEvents(ErrorRecord::new(format!(
            "No events returned by SmashGG for URL: `{url}`"
        )))
    }

    pub fn events(&self) -> Option<&[CanonicalEvent]> {
        match self {
            EventsOutcome::Events(events) => Some(events),
            _ => None,
        }
    }

    /// Flattens the outcome into error records; empty for `Events`.
    pub fn error_records(&self) -> Vec<ErrorRecord> {
        match self {
            EventsOutcome::Events(_) => Vec::new(),
            EventsOutcome::UpstreamErrors(errors) => errors.clone(),
            EventsOutcome::NoEvents(error) => vec![error.clone()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event() -> CanonicalEvent {
        CanonicalEvent {
            id: EventId::Number(1),
            name: Some("Singles".to_string()),
            tournament: "genesis".to_string(),
            tournament_link: "https://smash.gg/tournament/genesis".to_string(),
            link: Some("https://smash.gg/tournament/genesis/event/singles".to_string()),
            slug: Some("tournament/genesis/event/singles".to_string()),
            players: vec![MatchedPlayer {
                name: "TeamA | Alice".to_string(),
                crew: Some("TeamA".to_string()),
                tag: Some("Alice".to_string()),
                placement: Some(2),
            }],
            errors: vec![],
        }
    }

    #[test]
    fn test_player_serialization_skips_missing_fields() {
        let player = MatchedPlayer {
            name: "Bob".to_string(),
            crew: None,
            tag: Some("Bob".to_string()),
            placement: None,
        };
        assert_eq!(
            serde_json::to_value(&player).unwrap(),
            json!({ "name": "Bob", "tag": "Bob" })
        );
    }

    #[test]
    fn test_outcome_shapes() {
        let events = serde_json::to_value(EventsOutcome::Events(vec![sample_event()])).unwrap();
        assert!(events.is_array());
        assert_eq!(events[0]["tournamentLink"], "https://smash.gg/tournament/genesis");
        assert_eq!(events[0]["players"][0]["crew"], "TeamA");

        let upstream =
            serde_json::to_value(EventsOutcome::UpstreamErrors(vec![ErrorRecord::new("bad slug")]))
                .unwrap();
        assert_eq!(upstream, json!([{ "message": "bad slug" }]));

        let no_events = serde_json::to_value(EventsOutcome::no_events("abc")).unwrap();
        assert_eq!(
            no_events,
            json!({ "message": "No events returned by SmashGG for URL: `abc`" })
        );
    }

    #[test]
    fn test_missing_event_fields_serialize_as_null() {
        let event = CanonicalEvent {
            name: None,
            link: None,
            slug: None,
            ..sample_event()
        };
        let value = serde_json::to_value(&event).unwrap();
        assert!(value["name"].is_null());
        assert!(value["link"].is_null());
        assert!(value["slug"].is_null());
        assert_eq!(value["tournament"], "genesis");
    }

    #[test]
    fn test_error_records() {
        assert!(EventsOutcome::Events(vec![]).error_records().is_empty());
        assert_eq!(EventsOutcome::no_events("abc").error_records().len(), 1);
        assert!(EventsOutcome::no_events("abc").events().is_none());
    }
}
