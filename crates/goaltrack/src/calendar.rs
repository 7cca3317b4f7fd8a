//! Calendar event types.
//!
//! A generic event shape for calendar views. Nothing in the goal loaders
//! produces or consumes it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Event identifier: either numeric or an opaque string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    /// Numeric id.
    Number(i64),
    /// Opaque string id.
    Text(String),
}

/// An event boundary: a real timestamp, or free text when that's all we have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventTime {
    /// An RFC 3339 timestamp.
    At(DateTime<Utc>),
    /// Anything that didn't parse as a timestamp.
    Text(String),
}

impl EventTime {
    /// The timestamp, if this boundary has one.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Text(_) => None,
        }
    }
}

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    /// Event identifier.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// When the event starts.
    pub start: EventTime,
    /// When the event ends.
    pub end: EventTime,
    /// Free-form category.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Where it happens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Longer notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_deserialize_minimal_event() {
        let raw = json!({
            "id": 1,
            "title": "Gym",
            "start": "2024-03-01T18:00:00Z",
            "end": "2024-03-01T19:00:00Z"
        });
        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.id, EventId::Number(1));
        assert_eq!(
            event.start.timestamp(),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap())
        );
        assert!(event.kind.is_none());
        assert!(event.location.is_none());
        assert!(event.description.is_none());
    }

    #[test]
    fn test_free_text_times_and_string_id() {
        let raw = json!({
            "id": "evt-9",
            "title": "Long run",
            "start": "saturday morning",
            "end": "before lunch",
            "type": "training",
            "location": "Riverside"
        });
        let event: CalendarEvent = serde_json::from_value(raw).unwrap();
        assert_eq!(event.id, EventId::Text("evt-9".to_string()));
        assert_eq!(event.start, EventTime::Text("saturday morning".to_string()));
        assert!(event.end.timestamp().is_none());
        assert_eq!(event.kind.as_deref(), Some("training"));
        assert_eq!(event.location.as_deref(), Some("Riverside"));
    }

    #[test]
    fn test_serialize_uses_type_key_and_skips_missing() {
        let event = CalendarEvent {
            id: EventId::Number(2),
            title: "Stretch".to_string(),
            start: EventTime::Text("today".to_string()),
            end: EventTime::Text("today".to_string()),
            kind: Some("recovery".to_string()),
            location: None,
            description: None,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "recovery");
        assert!(json.get("kind").is_none());
        assert!(json.get("location").is_none());
    }
}
