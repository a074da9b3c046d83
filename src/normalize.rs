//! Activity normalizer - folds the heterogeneous listing payload into the
//! canonical name-keyed collection used by the renderer.
//!
//! The backend has shipped both shapes over time: an object keyed by activity
//! name, and an array of record-like objects. Either is accepted; anything
//! else degrades to an empty collection rather than erroring.

use serde_json::Value;

use crate::model::structs::{ActivityCollection, ActivityRecord};

/// Length of the JSON fingerprint used to key anonymous array entries.
const FINGERPRINT_LEN: usize = 12;

/// Converts a raw decoded listing body into an [`ActivityCollection`].
///
/// - object → assumed already name-keyed; values converted leniently
/// - array → each element keyed by `name`, else `title`, else `id`, else a
///   truncated JSON fingerprint so the key is never empty
/// - anything else (null, scalar, malformed) → empty collection
pub fn normalize_activities(raw: &Value) -> ActivityCollection {
    match raw {
        Value::Object(by_name) => by_name
            .iter()
            .map(|(name, details)| (name.clone(), record_from_value(details)))
            .collect(),
        Value::Array(items) => items
            .iter()
            .map(|item| (derive_name(item), array_record(item)))
            .collect(),
        _ => ActivityCollection::new(),
    }
}

/// Lenient conversion for object-shaped payload values. Missing fields get
/// defaults; `participants` is coerced to an array even if the server sent
/// something else.
fn record_from_value(details: &Value) -> ActivityRecord {
    ActivityRecord {
        description: string_field(details, "description"),
        schedule: string_field(details, "schedule"),
        max_participants: uint_field(details, "max_participants").unwrap_or(0),
        participants: coerce_participants(&details["participants"]),
    }
}

/// Conversion for array elements, which carry looser field naming:
/// capacity may arrive as `max_participants`, `maxParticipants` or `capacity`.
fn array_record(item: &Value) -> ActivityRecord {
    let max_participants = uint_field(item, "max_participants")
        .or_else(|| uint_field(item, "maxParticipants"))
        .or_else(|| uint_field(item, "capacity"))
        .unwrap_or(0);

    ActivityRecord {
        description: string_field(item, "description"),
        schedule: string_field(item, "schedule"),
        max_participants,
        participants: coerce_participants(&item["participants"]),
    }
}

fn derive_name(item: &Value) -> String {
    for field in ["name", "title", "id"] {
        match &item[field] {
            Value::String(s) if !s.is_empty() => return s.clone(),
            Value::Number(n) => return n.to_string(),
            _ => {}
        }
    }
    // Anonymous record: fingerprint its JSON form so the key is non-empty
    // and stable for identical payloads.
    let json = item.to_string();
    json.chars().take(FINGERPRINT_LEN).collect()
}

fn string_field(item: &Value, field: &str) -> String {
    item[field].as_str().unwrap_or_default().to_string()
}

fn uint_field(item: &Value, field: &str) -> Option<u32> {
    item[field].as_u64().map(|n| n.min(u64::from(u32::MAX)) as u32)
}

fn coerce_participants(value: &Value) -> Vec<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .map(|p| match p {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn array_payload_becomes_name_keyed_collection() {
        let raw = json!([{"name": "A", "participants": ["x"]}]);
        let activities = normalize_activities(&raw);

        assert_eq!(activities.len(), 1);
        let record = &activities["A"];
        assert_eq!(record.description, "");
        assert_eq!(record.schedule, "");
        assert_eq!(record.max_participants, 0);
        assert_eq!(record.participants, vec!["x".to_string()]);
    }

    #[test]
    fn null_payload_is_empty() {
        assert!(normalize_activities(&Value::Null).is_empty());
    }

    #[test]
    fn scalar_payload_is_empty() {
        assert!(normalize_activities(&json!(42)).is_empty());
        assert!(normalize_activities(&json!("nope")).is_empty());
    }

    #[test]
    fn object_payload_passes_through() {
        let raw = json!({
            "Chess Club": {
                "description": "Strategy and tournaments",
                "schedule": "Fridays",
                "max_participants": 8,
                "participants": ["m@x.com"]
            }
        });
        let activities = normalize_activities(&raw);

        let record = &activities["Chess Club"];
        assert_eq!(record.description, "Strategy and tournaments");
        assert_eq!(record.schedule, "Fridays");
        assert_eq!(record.max_participants, 8);
        assert_eq!(record.participants, vec!["m@x.com".to_string()]);
    }

    #[test]
    fn capacity_aliases_are_coalesced_in_order() {
        let raw = json!([
            {"name": "A", "maxParticipants": 5},
            {"name": "B", "capacity": 3},
            {"name": "C", "max_participants": 7, "capacity": 99}
        ]);
        let activities = normalize_activities(&raw);

        assert_eq!(activities["A"].max_participants, 5);
        assert_eq!(activities["B"].max_participants, 3);
        assert_eq!(activities["C"].max_participants, 7);
    }

    #[test]
    fn name_falls_back_to_title_then_id_then_fingerprint() {
        let raw = json!([
            {"title": "Titled"},
            {"id": 17},
            {"schedule": "Mon"}
        ]);
        let activities = normalize_activities(&raw);

        assert!(activities.contains_key("Titled"));
        assert!(activities.contains_key("17"));
        // Fingerprint key: first 12 chars of the element's JSON form.
        let fingerprint: String = json!({"schedule": "Mon"}).to_string().chars().take(12).collect();
        assert!(activities.contains_key(fingerprint.as_str()));
    }

    #[test]
    fn non_array_participants_coerce_to_empty() {
        let raw = json!({
            "Odd": {"max_participants": 4, "participants": "not-a-list"}
        });
        let activities = normalize_activities(&raw);
        assert!(activities["Odd"].participants.is_empty());
    }

    #[test]
    fn collection_preserves_payload_order() {
        let raw = json!([
            {"name": "First"},
            {"name": "Second"},
            {"name": "Third"}
        ]);
        let activities = normalize_activities(&raw);
        let names: Vec<&String> = activities.keys().collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
