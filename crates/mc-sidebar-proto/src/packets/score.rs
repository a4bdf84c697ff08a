//! ScoreboardScore — Server → Client.
//!
//! Sets or removes one score entry of an objective.

use serde::Serialize;

use crate::layout::{Field, FieldValue};

/// Score update action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreAction {
    Change,
    Remove,
}

impl ScoreAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreAction::Change => "CHANGE",
            ScoreAction::Remove => "REMOVE",
        }
    }
}

/// ScoreboardScore packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardScore {
    /// Entry the score belongs to.
    pub owner: String,
    pub objective_name: String,
    /// Score value; absent on removal.
    pub score: Option<i32>,
    pub action: ScoreAction,
}

impl ScoreboardScore {
    pub fn change(owner: impl Into<String>, objective_name: impl Into<String>, score: i32) -> Self {
        Self {
            owner: owner.into(),
            objective_name: objective_name.into(),
            score: Some(score),
            action: ScoreAction::Change,
        }
    }

    pub fn remove(owner: impl Into<String>, objective_name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            objective_name: objective_name.into(),
            score: None,
            action: ScoreAction::Remove,
        }
    }

    pub(crate) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::Owner => Some(FieldValue::Str(self.owner.clone())),
            Field::ObjectiveName => Some(FieldValue::Str(self.objective_name.clone())),
            Field::Score => self.score.map(FieldValue::Int),
            Field::Action => Some(FieldValue::Constant(self.action.as_str())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_carries_score() {
        let pkt = ScoreboardScore::change("§1", "Sidebar", 3);
        assert_eq!(pkt.action, ScoreAction::Change);
        assert_eq!(pkt.field(Field::Score), Some(FieldValue::Int(3)));
    }

    #[test]
    fn remove_has_no_score() {
        let pkt = ScoreboardScore::remove("§1", "Sidebar");
        assert_eq!(pkt.action, ScoreAction::Remove);
        assert_eq!(pkt.field(Field::Score), None);
        assert_eq!(pkt.field(Field::Action), Some(FieldValue::Constant("REMOVE")));
    }
}
