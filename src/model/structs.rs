use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One activity as shown on the board. Participant order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Canonical mapping from activity name to record. Rebuilt wholesale on every
/// fetch; insertion order is the order cards are rendered in.
pub type ActivityCollection = IndexMap<String, ActivityRecord>;

/// Hardcoded dataset behind the "load sample data" affordance. Only used when
/// the real listing endpoint fails or comes back empty.
pub fn sample_activities() -> ActivityCollection {
    let mut sample = ActivityCollection::new();
    sample.insert(
        "Robotics Club".to_string(),
        ActivityRecord {
            description: "Build and program robots.".to_string(),
            schedule: "Wednesdays 3:30-5:00pm".to_string(),
            max_participants: 20,
            participants: vec![
                "alice@mergington.edu".to_string(),
                "bob@mergington.edu".to_string(),
            ],
        },
    );
    sample.insert(
        "Photography".to_string(),
        ActivityRecord {
            description: "Learn photography techniques.".to_string(),
            schedule: "Mondays 4:00-5:30pm".to_string(),
            max_participants: 12,
            participants: vec![],
        },
    );
    sample
}
