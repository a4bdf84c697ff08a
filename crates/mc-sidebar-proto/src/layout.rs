//! Per-generation packet layouts.
//!
//! Each row of [`LAYOUTS`] describes one packet shape: which variant it is,
//! how text is encoded, whether team text is width-limited, and which slot
//! every logical field occupies in each packet kind. Positional slots are the
//! single-letter field names older servers use; named slots are the
//! descriptive names newer servers use. Supporting a new generation means
//! adding a row.

use serde::Serialize;
use tracing::debug;

use crate::error::ProtoError;
use crate::packets::{Packet, PacketKind};
use crate::text::{ChatFormat, Text, TextEncoding};
use crate::version::{ProtocolVersion, VersionPolicy};

/// Legacy team prefix / suffix width.
pub const LEGACY_TEXT_WIDTH: usize = 16;

/// Packet shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutVariant {
    /// Raw strings, width-limited prefix and suffix.
    Legacy,
    /// Rich text display names and prefixes, numeric team modes.
    Mid,
    /// Named fields and a structured team parameter block.
    Modern,
}

/// How slots are addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStyle {
    Positional,
    Named,
}

/// Which enum type the score packet's action slot expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreActionFamily {
    /// Action enum nested in the score packet itself.
    Legacy,
    /// Action enum owned by the server scoreboard.
    Server,
}

impl ScoreActionFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreActionFamily::Legacy => "legacy_score_action",
            ScoreActionFamily::Server => "score_action",
        }
    }
}

/// Logical packet fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ObjectiveName,
    DisplayName,
    RenderType,
    Mode,
    TeamName,
    Prefix,
    Suffix,
    NameTagVisibility,
    CollisionRule,
    Color,
    Members,
    Options,
    Owner,
    Score,
    Action,
    Slot,
}

/// Where a logical field lands in a packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub name: &'static str,
    pub field: Field,
}

const fn slot(name: &'static str, field: Field) -> Slot {
    Slot { name, field }
}

/// A field value as placed into a slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Str(String),
    Text(Text),
    Int(i32),
    List(Vec<String>),
    Constant(&'static str),
    Format(ChatFormat),
    Enum {
        family: &'static str,
        constant: &'static str,
    },
}

/// One rendered slot of a packet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotValue {
    pub slot: &'static str,
    pub value: FieldValue,
}

/// A packet shape.
#[derive(Debug)]
pub struct Layout {
    /// First generation this row applies to.
    pub since: ProtocolVersion,
    pub variant: LayoutVariant,
    pub style: SlotStyle,
    pub text: TextEncoding,
    /// Maximum characters in a team prefix or suffix, if limited.
    pub width_limit: Option<usize>,
    pub score_action: ScoreActionFamily,
    pub objective: &'static [Slot],
    pub team: &'static [Slot],
    pub score: &'static [Slot],
    pub display: &'static [Slot],
}

// ---------------------------------------------------------------------------
// Slot tables
// ---------------------------------------------------------------------------

const OBJECTIVE_POSITIONAL: &[Slot] = &[
    slot("a", Field::ObjectiveName),
    slot("b", Field::DisplayName),
    slot("c", Field::RenderType),
    slot("d", Field::Mode),
];

const OBJECTIVE_NAMED: &[Slot] = &[
    slot("objectiveName", Field::ObjectiveName),
    slot("displayName", Field::DisplayName),
    slot("renderType", Field::RenderType),
    slot("method", Field::Mode),
];

/// 1.8 has no collision rule, so color, members and mode sit one slot
/// earlier than on 1.9 – 1.12.
const TEAM_LEGACY_1_8: &[Slot] = &[
    slot("a", Field::TeamName),
    slot("b", Field::DisplayName),
    slot("c", Field::Prefix),
    slot("d", Field::Suffix),
    slot("e", Field::NameTagVisibility),
    slot("f", Field::Color),
    slot("g", Field::Members),
    slot("h", Field::Mode),
];

const TEAM_LEGACY: &[Slot] = &[
    slot("a", Field::TeamName),
    slot("b", Field::DisplayName),
    slot("c", Field::Prefix),
    slot("d", Field::Suffix),
    slot("e", Field::NameTagVisibility),
    slot("f", Field::CollisionRule),
    slot("g", Field::Color),
    slot("h", Field::Members),
    slot("i", Field::Mode),
];

const TEAM_MID: &[Slot] = &[
    slot("a", Field::TeamName),
    slot("b", Field::DisplayName),
    slot("c", Field::Prefix),
    slot("d", Field::Suffix),
    slot("e", Field::NameTagVisibility),
    slot("f", Field::CollisionRule),
    slot("g", Field::Color),
    slot("h", Field::Members),
    slot("i", Field::Mode),
    slot("j", Field::Options),
];

const TEAM_NAMED: &[Slot] = &[
    slot("name", Field::TeamName),
    slot("method", Field::Mode),
    slot("players", Field::Members),
    slot("parameters.displayName", Field::DisplayName),
    slot("parameters.playerPrefix", Field::Prefix),
    slot("parameters.playerSuffix", Field::Suffix),
    slot("parameters.nametagVisibility", Field::NameTagVisibility),
    slot("parameters.collisionRule", Field::CollisionRule),
    slot("parameters.color", Field::Color),
    slot("parameters.options", Field::Options),
];

const SCORE_POSITIONAL: &[Slot] = &[
    slot("a", Field::Owner),
    slot("b", Field::ObjectiveName),
    slot("c", Field::Score),
    slot("d", Field::Action),
];

const SCORE_NAMED: &[Slot] = &[
    slot("owner", Field::Owner),
    slot("objectiveName", Field::ObjectiveName),
    slot("score", Field::Score),
    slot("method", Field::Action),
];

const DISPLAY_POSITIONAL: &[Slot] = &[slot("a", Field::Slot), slot("b", Field::ObjectiveName)];

const DISPLAY_NAMED: &[Slot] = &[
    slot("slot", Field::Slot),
    slot("objectiveName", Field::ObjectiveName),
];

/// Layout rows, oldest first.
pub static LAYOUTS: [Layout; 4] = [
    Layout {
        since: ProtocolVersion::V1_8,
        variant: LayoutVariant::Legacy,
        style: SlotStyle::Positional,
        text: TextEncoding::Raw,
        width_limit: Some(LEGACY_TEXT_WIDTH),
        score_action: ScoreActionFamily::Legacy,
        objective: OBJECTIVE_POSITIONAL,
        team: TEAM_LEGACY_1_8,
        score: SCORE_POSITIONAL,
        display: DISPLAY_POSITIONAL,
    },
    Layout {
        since: ProtocolVersion::COLLISION_RULE,
        variant: LayoutVariant::Legacy,
        style: SlotStyle::Positional,
        text: TextEncoding::Raw,
        width_limit: Some(LEGACY_TEXT_WIDTH),
        score_action: ScoreActionFamily::Legacy,
        objective: OBJECTIVE_POSITIONAL,
        team: TEAM_LEGACY,
        score: SCORE_POSITIONAL,
        display: DISPLAY_POSITIONAL,
    },
    Layout {
        since: ProtocolVersion::RICH_TEXT_TEAMS,
        variant: LayoutVariant::Mid,
        style: SlotStyle::Positional,
        text: TextEncoding::Rich,
        width_limit: None,
        score_action: ScoreActionFamily::Server,
        objective: OBJECTIVE_POSITIONAL,
        team: TEAM_MID,
        score: SCORE_POSITIONAL,
        display: DISPLAY_POSITIONAL,
    },
    Layout {
        since: ProtocolVersion::STRUCTURED_TEAM_PARAMETERS,
        variant: LayoutVariant::Modern,
        style: SlotStyle::Named,
        text: TextEncoding::Rich,
        width_limit: None,
        score_action: ScoreActionFamily::Server,
        objective: OBJECTIVE_NAMED,
        team: TEAM_NAMED,
        score: SCORE_NAMED,
        display: DISPLAY_NAMED,
    },
];

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Layout for `version`. Generations past the table use its newest row.
pub fn resolve(version: ProtocolVersion) -> &'static Layout {
    LAYOUTS
        .iter()
        .rev()
        .find(|layout| layout.since <= version)
        .unwrap_or(&LAYOUTS[0])
}

/// Layout for `version`, refusing unknown generations under
/// [`VersionPolicy::Strict`].
pub fn resolve_with(
    version: ProtocolVersion,
    policy: VersionPolicy,
) -> Result<&'static Layout, ProtoError> {
    if version > ProtocolVersion::NEWEST_KNOWN {
        match policy {
            VersionPolicy::Strict => {
                return Err(ProtoError::UnsupportedVersion {
                    version,
                    newest: ProtocolVersion::NEWEST_KNOWN,
                })
            }
            VersionPolicy::Fallback => debug!(
                "Protocol {version} is newer than {}, using newest known layout",
                ProtocolVersion::NEWEST_KNOWN
            ),
        }
    }
    Ok(resolve(version))
}

impl Layout {
    pub fn slots(&self, kind: PacketKind) -> &'static [Slot] {
        match kind {
            PacketKind::Objective => self.objective,
            PacketKind::Team => self.team,
            PacketKind::Score => self.score,
            PacketKind::DisplayObjective => self.display,
        }
    }

    /// Slot name holding `field` in packets of `kind`, if this layout has one.
    pub fn slot_of(&self, kind: PacketKind, field: Field) -> Option<&'static str> {
        self.slots(kind)
            .iter()
            .find(|slot| slot.field == field)
            .map(|slot| slot.name)
    }

    /// Render `packet` as the slot assignments this layout expects.
    ///
    /// Fields the packet leaves unset, or the layout has no slot for, are
    /// skipped.
    pub fn describe(&self, packet: &Packet) -> Vec<SlotValue> {
        self.slots(packet.kind())
            .iter()
            .filter_map(|slot| {
                packet.field(slot.field).map(|value| SlotValue {
                    slot: slot.name,
                    value: self.encode(slot.field, value),
                })
            })
            .collect()
    }

    fn encode(&self, field: Field, value: FieldValue) -> FieldValue {
        match (field, value) {
            (Field::Color, FieldValue::Format(format)) if self.variant == LayoutVariant::Legacy => {
                FieldValue::Int(format.legacy_index())
            }
            (Field::Action, FieldValue::Constant(constant)) => FieldValue::Enum {
                family: self.score_action.as_str(),
                constant,
            },
            (_, value) => value,
        }
    }
}
