//! Activity renderer - turns the canonical collection into the board view.
//!
//! The view is rebuilt from scratch on every render; nothing is patched
//! incrementally. Cards come out in collection iteration order, and the
//! selection options always keep the placeholder in first position.

use std::fmt;

use crate::model::structs::{ActivityCollection, ActivityRecord};

/// First entry of the selection options, never removed by a render.
pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";

/// Placeholder roster line for activities with no participants.
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Tag carried by each roster line's unregister control. The activity name is
/// stored percent-encoded, the participant raw, mirroring how the two travel
/// to the unregister endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnregisterTag {
    pub activity: String,
    pub participant: String,
}

impl UnregisterTag {
    pub fn new(activity: &str, participant: &str) -> Self {
        Self {
            activity: urlencoding::encode(activity).into_owned(),
            participant: participant.to_string(),
        }
    }

    /// Decoded activity name, ready for the request path builder.
    pub fn activity_name(&self) -> String {
        urlencoding::decode(&self.activity)
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| self.activity.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub participant: String,
    pub unregister: UnregisterTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Signed on purpose: an over-capacity roster renders negative rather
    /// than being clamped, since nothing is validated client-side.
    pub spots_left: i64,
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    /// Selection options: placeholder first, then one entry per activity,
    /// value and label both the activity name.
    pub options: Vec<String>,
}

pub fn render_card(name: &str, record: &ActivityRecord) -> ActivityCard {
    let spots_left = i64::from(record.max_participants) - record.participants.len() as i64;

    let roster = record
        .participants
        .iter()
        .map(|participant| RosterEntry {
            participant: participant.clone(),
            unregister: UnregisterTag::new(name, participant),
        })
        .collect();

    ActivityCard {
        name: name.to_string(),
        description: record.description.clone(),
        schedule: record.schedule.clone(),
        spots_left,
        roster,
    }
}

pub fn render_board(activities: &ActivityCollection) -> BoardView {
    let mut view = BoardView {
        cards: Vec::with_capacity(activities.len()),
        options: vec![PLACEHOLDER_OPTION.to_string()],
    };

    for (name, record) in activities {
        view.cards.push(render_card(name, record));
        view.options.push(name.clone());
    }

    view
}

impl fmt::Display for ActivityCard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Schedule: {}", self.schedule)?;
        writeln!(f, "  Availability: {} spots left", self.spots_left)?;
        writeln!(f, "  Participants:")?;
        if self.roster.is_empty() {
            writeln!(f, "    {NO_PARTICIPANTS}")?;
        } else {
            for (idx, entry) in self.roster.iter().enumerate() {
                writeln!(f, "    {}. {}", idx + 1, entry.participant)?;
            }
        }
        Ok(())
    }
}
