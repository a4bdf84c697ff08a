//! ScoreboardObjective — Server → Client.
//!
//! Creates, removes or renames a scoreboard objective.

use serde::Serialize;

use crate::layout::{Field, FieldValue};
use crate::text::Text;

/// Objective packet mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveMode {
    Create = 0,
    Remove = 1,
    Update = 2,
}

/// How the client renders score values next to entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderType {
    Integer,
    Hearts,
}

impl RenderType {
    pub fn as_str(self) -> &'static str {
        match self {
            RenderType::Integer => "integer",
            RenderType::Hearts => "hearts",
        }
    }
}

/// ScoreboardObjective packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardObjective {
    /// Internal objective identifier.
    pub objective_name: String,
    /// Title shown above the sidebar.
    pub display_name: Text,
    pub render_type: RenderType,
    pub mode: ObjectiveMode,
}

impl ScoreboardObjective {
    pub(crate) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::ObjectiveName => Some(FieldValue::Str(self.objective_name.clone())),
            Field::DisplayName => Some(FieldValue::Text(self.display_name.clone())),
            Field::RenderType => Some(FieldValue::Constant(self.render_type.as_str())),
            Field::Mode => Some(FieldValue::Int(self.mode as i32)),
            _ => None,
        }
    }
}
