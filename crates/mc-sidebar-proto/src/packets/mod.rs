//! Scoreboard packet definitions.
//!
//! Packets are logical values. Where each field lands on the wire for a given
//! generation is described by [`crate::layout::Layout`].

pub mod display_objective;
pub mod objective;
pub mod score;
pub mod team;

pub use display_objective::{DisplayObjective, DisplaySlot};
pub use objective::{ObjectiveMode, RenderType, ScoreboardObjective};
pub use score::{ScoreAction, ScoreboardScore};
pub use team::{CollisionRule, NameTagVisibility, ScoreboardTeam, TeamMode, TeamParameters};

use serde::Serialize;

use crate::layout::{Field, FieldValue};

/// Packet kinds, used to select slot tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PacketKind {
    Objective,
    Team,
    Score,
    DisplayObjective,
}

/// Any packet produced by a scoreboard session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "packet", rename_all = "snake_case")]
pub enum Packet {
    Objective(ScoreboardObjective),
    Team(ScoreboardTeam),
    Score(ScoreboardScore),
    DisplayObjective(DisplayObjective),
}

impl Packet {
    pub fn kind(&self) -> PacketKind {
        match self {
            Packet::Objective(_) => PacketKind::Objective,
            Packet::Team(_) => PacketKind::Team,
            Packet::Score(_) => PacketKind::Score,
            Packet::DisplayObjective(_) => PacketKind::DisplayObjective,
        }
    }

    /// Logical value of `field`, if this packet carries it.
    pub fn field(&self, field: Field) -> Option<FieldValue> {
        match self {
            Packet::Objective(p) => p.field(field),
            Packet::Team(p) => p.field(field),
            Packet::Score(p) => p.field(field),
            Packet::DisplayObjective(p) => p.field(field),
        }
    }
}

impl From<ScoreboardObjective> for Packet {
    fn from(p: ScoreboardObjective) -> Self {
        Packet::Objective(p)
    }
}

impl From<ScoreboardTeam> for Packet {
    fn from(p: ScoreboardTeam) -> Self {
        Packet::Team(p)
    }
}

impl From<ScoreboardScore> for Packet {
    fn from(p: ScoreboardScore) -> Self {
        Packet::Score(p)
    }
}

impl From<DisplayObjective> for Packet {
    fn from(p: DisplayObjective) -> Self {
        Packet::DisplayObjective(p)
    }
}
