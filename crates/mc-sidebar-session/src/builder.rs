//! Per-variant packet builders.
//!
//! A builder turns logical requests ("create the team for this row", "show
//! this text on that row") into packets shaped for one layout variant.
//! Objective, score and display packets differ only in text encoding, which
//! the default methods take from the layout; team packets differ in which
//! properties each generation expects and are built per variant.

use std::fmt;

use mc_sidebar_proto::layout::{Layout, LayoutVariant, LEGACY_TEXT_WIDTH};
use mc_sidebar_proto::packets::{
    CollisionRule, DisplayObjective, NameTagVisibility, ObjectiveMode, RenderType,
    ScoreboardObjective, ScoreboardScore, ScoreboardTeam, TeamMode, TeamParameters,
};
use mc_sidebar_proto::text::{ChatFormat, Text};
use mc_sidebar_proto::version::ProtocolVersion;

use crate::pool::TeamColor;
use crate::split::split_legacy;

/// Options bitmask sent with team properties: every flag set.
const ALL_OPTIONS: i32 = -1;

pub trait PacketBuilder: fmt::Debug + Send + Sync {
    fn layout(&self) -> &'static Layout;

    fn text(&self, text: &str) -> Text {
        Text::encode(self.layout().text, text)
    }

    fn objective(&self, name: &str, title: &str, mode: ObjectiveMode) -> ScoreboardObjective {
        ScoreboardObjective {
            objective_name: name.to_string(),
            display_name: self.text(title),
            render_type: RenderType::Integer,
            mode,
        }
    }

    fn display(&self, objective: &str) -> DisplayObjective {
        DisplayObjective::sidebar(objective)
    }

    fn score_change(&self, color: TeamColor, objective: &str, value: i32) -> ScoreboardScore {
        ScoreboardScore::change(color.as_str(), objective, value)
    }

    fn score_remove(&self, color: TeamColor, objective: &str) -> ScoreboardScore {
        ScoreboardScore::remove(color.as_str(), objective)
    }

    /// Team backing a row: named after `color`, with `color` as sole member.
    fn team_create(&self, color: TeamColor) -> ScoreboardTeam;

    /// Team update that makes `color`'s row show `content`.
    fn team_content(&self, color: TeamColor, content: &str) -> ScoreboardTeam;
}

/// Builder for `layout`, which must be the layout resolved for `version`.
pub fn builder_for(version: ProtocolVersion, layout: &'static Layout) -> Box<dyn PacketBuilder> {
    match layout.variant {
        LayoutVariant::Legacy => Box::new(LegacyBuilder { version, layout }),
        LayoutVariant::Mid => Box::new(MidBuilder { layout }),
        LayoutVariant::Modern => Box::new(ModernBuilder { layout }),
    }
}

fn create(color: TeamColor, parameters: TeamParameters) -> ScoreboardTeam {
    ScoreboardTeam {
        name: color.as_str().to_string(),
        mode: TeamMode::Create,
        members: vec![color.as_str().to_string()],
        parameters: Some(parameters),
    }
}

fn update(color: TeamColor, parameters: TeamParameters) -> ScoreboardTeam {
    ScoreboardTeam {
        name: color.as_str().to_string(),
        mode: TeamMode::Update,
        members: Vec::new(),
        parameters: Some(parameters),
    }
}

// ---------------------------------------------------------------------------
// Legacy (1.8 – 1.12)
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct LegacyBuilder {
    version: ProtocolVersion,
    layout: &'static Layout,
}

impl PacketBuilder for LegacyBuilder {
    fn layout(&self) -> &'static Layout {
        self.layout
    }

    fn team_create(&self, color: TeamColor) -> ScoreboardTeam {
        let mut parameters = TeamParameters {
            display_name: Some(self.text(color.as_str())),
            name_tag_visibility: Some(NameTagVisibility::Always),
            color: Some(ChatFormat::Reset),
            ..Default::default()
        };
        // 1.8 has no collision rule. Its team packet expects the color index
        // where 1.9 takes the collision rule and the member list where 1.9
        // takes the color; filling the 1.9 order there puts a list into a
        // numeric field. Only set the rule where the slot exists.
        if self.version >= ProtocolVersion::COLLISION_RULE {
            parameters.collision_rule = Some(CollisionRule::Always);
        }
        create(color, parameters)
    }

    fn team_content(&self, color: TeamColor, content: &str) -> ScoreboardTeam {
        let width = self.layout.width_limit.unwrap_or(LEGACY_TEXT_WIDTH);
        let (prefix, suffix) = split_legacy(content, width);
        update(
            color,
            TeamParameters {
                prefix: Some(Text::Raw(prefix)),
                suffix: Some(Text::Raw(suffix)),
                ..Default::default()
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Mid (1.13 – 1.16)
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct MidBuilder {
    layout: &'static Layout,
}

impl PacketBuilder for MidBuilder {
    fn layout(&self) -> &'static Layout {
        self.layout
    }

    fn team_create(&self, color: TeamColor) -> ScoreboardTeam {
        create(
            color,
            TeamParameters {
                display_name: Some(self.text(color.as_str())),
                name_tag_visibility: Some(NameTagVisibility::Always),
                collision_rule: Some(CollisionRule::Always),
                color: Some(ChatFormat::Reset),
                options: Some(ALL_OPTIONS),
                ..Default::default()
            },
        )
    }

    fn team_content(&self, color: TeamColor, content: &str) -> ScoreboardTeam {
        update(
            color,
            TeamParameters {
                prefix: Some(self.text(content)),
                ..Default::default()
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Modern (1.17+)
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct ModernBuilder {
    layout: &'static Layout,
}

impl ModernBuilder {
    /// The parameter block is replaced as a whole, so every property is sent.
    fn parameters(&self, color: TeamColor, content: Option<&str>) -> TeamParameters {
        TeamParameters {
            display_name: Some(self.text(color.as_str())),
            prefix: content.map(|content| self.text(content)),
            suffix: None,
            name_tag_visibility: Some(NameTagVisibility::Always),
            collision_rule: Some(CollisionRule::Always),
            color: Some(ChatFormat::Reset),
            options: Some(ALL_OPTIONS),
        }
    }
}

impl PacketBuilder for ModernBuilder {
    fn layout(&self) -> &'static Layout {
        self.layout
    }

    fn team_create(&self, color: TeamColor) -> ScoreboardTeam {
        create(color, self.parameters(color, None))
    }

    fn team_content(&self, color: TeamColor, content: &str) -> ScoreboardTeam {
        update(color, self.parameters(color, Some(content)))
    }
}
