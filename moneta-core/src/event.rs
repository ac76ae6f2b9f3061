use serde::{Deserialize, Serialize};

use crate::Entry;

/// Row-level change notification delivered by the backend feed.
///
/// The wire shape is `{"eventType": "INSERT" | "UPDATE" | "DELETE",
/// "new": ..., "old": ...}` with the row fields typed only by event-type
/// convention. The variant layout guarantees that once a payload has
/// parsed, the rows its event type requires are present; a payload
/// missing them fails deserialization instead of defaulting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireChangeEvent", into = "WireChangeEvent")]
pub enum ChangeEvent {
    Insert { new: Entry },
    Update { old: Entry, new: Entry },
    Delete { old: Entry },
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct WireChangeEvent {
    #[serde(rename = "eventType")]
    event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    new: Option<Entry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    old: Option<Entry>,
}

impl TryFrom<WireChangeEvent> for ChangeEvent {
    type Error = String;

    fn try_from(wire: WireChangeEvent) -> Result<Self, Self::Error> {
        match wire.event_type.as_str() {
            "INSERT" => {
                let new = wire
                    .new
                    .ok_or_else(|| String::from("INSERT event is missing its new row"))?;
                Ok(ChangeEvent::Insert { new })
            }
            "UPDATE" => {
                let old = wire
                    .old
                    .ok_or_else(|| String::from("UPDATE event is missing its old row"))?;
                let new = wire
                    .new
                    .ok_or_else(|| String::from("UPDATE event is missing its new row"))?;
                Ok(ChangeEvent::Update { old, new })
            }
            "DELETE" => {
                let old = wire
                    .old
                    .ok_or_else(|| String::from("DELETE event is missing its old row"))?;
                Ok(ChangeEvent::Delete { old })
            }
            other => Err(format!("unknown event type: {other}")),
        }
    }
}

impl From<ChangeEvent> for WireChangeEvent {
    fn from(event: ChangeEvent) -> Self {
        match event {
            ChangeEvent::Insert { new } => Self {
                event_type: "INSERT".into(),
                new: Some(new),
                old: None,
            },
            ChangeEvent::Update { old, new } => Self {
                event_type: "UPDATE".into(),
                new: Some(new),
                old: Some(old),
            },
            ChangeEvent::Delete { old } => Self {
                event_type: "DELETE".into(),
                new: None,
                old: Some(old),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_entry() -> Entry {
        Entry {
            id: 4,
            date: "2024-01-10".parse().unwrap(),
            category: "Food".into(),
            amount: dec!(20),
            is_positive: false,
            ledger: 1,
            created_by: Uuid::nil(),
            note: None,
        }
    }

    #[test]
    fn parses_insert_payload() {
        let payload = serde_json::json!({
            "eventType": "INSERT",
            "new": sample_entry(),
        });
        let event: ChangeEvent = serde_json::from_value(payload).unwrap();
        assert_eq!(event, ChangeEvent::Insert { new: sample_entry() });
    }

    #[test]
    fn parses_update_payload() {
        let payload = serde_json::json!({
            "eventType": "UPDATE",
            "new": sample_entry(),
            "old": sample_entry(),
        });
        let event: ChangeEvent = serde_json::from_value(payload).unwrap();
        assert!(matches!(event, ChangeEvent::Update { .. }));
    }

    #[test]
    fn rejects_delete_without_old_row() {
        let payload = serde_json::json!({ "eventType": "DELETE" });
        let result: Result<ChangeEvent, _> = serde_json::from_value(payload);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("missing its old row"), "{err}");
    }

    #[test]
    fn rejects_unknown_event_type() {
        let payload = serde_json::json!({ "eventType": "TRUNCATE" });
        let result: Result<ChangeEvent, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn round_trips_through_wire_shape() {
        let event = ChangeEvent::Delete { old: sample_entry() };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["eventType"], "DELETE");
        assert!(json.get("new").is_none());
        let back: ChangeEvent = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }
}
