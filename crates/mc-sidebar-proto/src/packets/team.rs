//! ScoreboardTeam — Server → Client.
//!
//! Teams are repurposed as sidebar lines: each line is a team whose only
//! member is an invisible color-code entry, and whose prefix (and, on legacy
//! clients, suffix) carries the line text.

use serde::Serialize;

use crate::layout::{Field, FieldValue};
use crate::text::{ChatFormat, Text};

/// Team packet mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamMode {
    Create = 0,
    Remove = 1,
    Update = 2,
    AddMembers = 3,
    RemoveMembers = 4,
}

/// Name tag visibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NameTagVisibility {
    Always,
    Never,
    HideForOtherTeams,
    HideForOwnTeam,
}

impl NameTagVisibility {
    pub fn as_str(self) -> &'static str {
        match self {
            NameTagVisibility::Always => "always",
            NameTagVisibility::Never => "never",
            NameTagVisibility::HideForOtherTeams => "hideForOtherTeams",
            NameTagVisibility::HideForOwnTeam => "hideForOwnTeam",
        }
    }
}

/// Entity collision rule (1.9+).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionRule {
    Always,
    Never,
    PushOtherTeams,
    PushOwnTeam,
}

impl CollisionRule {
    pub fn as_str(self) -> &'static str {
        match self {
            CollisionRule::Always => "always",
            CollisionRule::Never => "never",
            CollisionRule::PushOtherTeams => "pushOtherTeams",
            CollisionRule::PushOwnTeam => "pushOwnTeam",
        }
    }
}

/// Team properties. Unset fields are left out of the packet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamParameters {
    pub display_name: Option<Text>,
    pub prefix: Option<Text>,
    pub suffix: Option<Text>,
    pub name_tag_visibility: Option<NameTagVisibility>,
    pub collision_rule: Option<CollisionRule>,
    pub color: Option<ChatFormat>,
    /// Friendly-fire / see-invisible bitmask.
    pub options: Option<i32>,
}

/// ScoreboardTeam packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreboardTeam {
    pub name: String,
    pub mode: TeamMode,
    /// Entries affected by create / add / remove modes.
    pub members: Vec<String>,
    pub parameters: Option<TeamParameters>,
}

impl ScoreboardTeam {
    /// The text a line currently shows: prefix followed by suffix.
    pub fn content(&self) -> Option<String> {
        let params = self.parameters.as_ref()?;
        let prefix = params.prefix.as_ref()?;
        let mut content = prefix.as_str().to_string();
        if let Some(suffix) = &params.suffix {
            content.push_str(suffix.as_str());
        }
        Some(content)
    }

    pub(crate) fn field(&self, field: Field) -> Option<FieldValue> {
        match field {
            Field::TeamName => return Some(FieldValue::Str(self.name.clone())),
            Field::Mode => return Some(FieldValue::Int(self.mode as i32)),
            Field::Members if !self.members.is_empty() => {
                return Some(FieldValue::List(self.members.clone()))
            }
            _ => {}
        }
        let params = self.parameters.as_ref()?;
        match field {
            Field::DisplayName => params.display_name.clone().map(FieldValue::Text),
            Field::Prefix => params.prefix.clone().map(FieldValue::Text),
            Field::Suffix => params.suffix.clone().map(FieldValue::Text),
            Field::NameTagVisibility => params
                .name_tag_visibility
                .map(|v| FieldValue::Constant(v.as_str())),
            Field::CollisionRule => params.collision_rule.map(|c| FieldValue::Constant(c.as_str())),
            Field::Color => params.color.map(FieldValue::Format),
            Field::Options => params.options.map(FieldValue::Int),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(prefix: &str, suffix: Option<&str>) -> ScoreboardTeam {
        ScoreboardTeam {
            name: "§1".into(),
            mode: TeamMode::Update,
            members: Vec::new(),
            parameters: Some(TeamParameters {
                prefix: Some(Text::Raw(prefix.into())),
                suffix: suffix.map(|s| Text::Raw(s.into())),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn content_joins_prefix_and_suffix() {
        assert_eq!(update("Hello ", Some("World")).content().as_deref(), Some("Hello World"));
        assert_eq!(update("Hello", None).content().as_deref(), Some("Hello"));
    }

    #[test]
    fn unset_fields_are_absent() {
        let pkt = update("Hello", None);
        assert_eq!(pkt.field(Field::Members), None);
        assert_eq!(pkt.field(Field::Color), None);
        assert_eq!(pkt.field(Field::Mode), Some(FieldValue::Int(2)));
    }
}
