//! ScoreboardDisplayObjective — Server → Client.
//!
//! Assigns a scoreboard objective to a display slot.

use serde::Serialize;

use crate::layout::{Field, FieldValue};

/// Display slot. Only the sidebar is driven by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplaySlot {
    #[default]
    Sidebar,
}

impl DisplaySlot {
    /// Wire id of the slot.
    pub fn id(self) -> i32 {
        match self {
            DisplaySlot::Sidebar => 1,
        }
    }
}

/// ScoreboardDisplayObjective packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayObjective {
    pub slot: DisplaySlot,
    pub objective_name: String,
}

impl DisplayObjective {
    pub fn sidebar(objective_name: impl Into<String>) -> Self {
        Self {
            slot: DisplaySlot::Sidebar,
            objective_name: objective_name.into(),
        }
    }

    pub(crate) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Slot => Some(FieldValue::Int(self.slot.id())),
            Field::ObjectiveName => Some(FieldValue::Str(self.objective_name.clone())),
            _ => None,
        }
    }
}
