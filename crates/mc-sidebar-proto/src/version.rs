//! Protocol generations and the policy applied to generations newer than the
//! layout table knows about.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ProtoError;

/// Minor release number of generation 0.
const BASE_MINOR: u8 = 8;

/// A negotiated protocol generation.
///
/// Generation `0` is the 1.8 release line, `1` is 1.9, and so on: one step
/// per minor release. Ordering follows release order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct ProtocolVersion(pub u8);

impl ProtocolVersion {
    pub const V1_8: Self = Self(0);
    pub const V1_9: Self = Self(1);
    pub const V1_10: Self = Self(2);
    pub const V1_11: Self = Self(3);
    pub const V1_12: Self = Self(4);
    pub const V1_13: Self = Self(5);
    pub const V1_14: Self = Self(6);
    pub const V1_15: Self = Self(7);
    pub const V1_16: Self = Self(8);
    pub const V1_17: Self = Self(9);
    pub const V1_18: Self = Self(10);
    pub const V1_19: Self = Self(11);
    pub const V1_20: Self = Self(12);

    /// Teams gain a collision rule; legacy team slots shift by one.
    pub const COLLISION_RULE: Self = Self::V1_9;
    /// Team and objective display text becomes rich text.
    pub const RICH_TEXT_TEAMS: Self = Self::V1_13;
    /// Team packets carry a single structured parameter block.
    pub const STRUCTURED_TEAM_PARAMETERS: Self = Self::V1_17;
    /// Newest generation the layout table was written against.
    pub const NEWEST_KNOWN: Self = Self::V1_20;

    /// Minor release number (`12` for 1.12.x).
    pub fn minor(self) -> u16 {
        u16::from(BASE_MINOR) + u16::from(self.0)
    }

    /// Parse a release string such as `"1.12.2"` or `"1.20"`.
    pub fn from_release(release: &str) -> Result<Self, ProtoError> {
        let mut parts = release.trim().split('.');
        Self::from_parts(release, parts.next(), parts.next())
    }

    /// Parse a server package label such as `"v1_16_R3"`.
    pub fn from_package(label: &str) -> Result<Self, ProtoError> {
        let rest = label
            .trim()
            .strip_prefix('v')
            .ok_or_else(|| ProtoError::InvalidVersion(label.to_string()))?;
        let mut parts = rest.split('_');
        Self::from_parts(label, parts.next(), parts.next())
    }

    fn from_parts(
        input: &str,
        major: Option<&str>,
        minor: Option<&str>,
    ) -> Result<Self, ProtoError> {
        let invalid = || ProtoError::InvalidVersion(input.to_string());
        if major != Some("1") {
            return Err(invalid());
        }
        let minor: u8 = minor.ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        if minor < BASE_MINOR {
            return Err(ProtoError::InvalidVersion(format!(
                "{input}: releases before 1.{BASE_MINOR} are not supported"
            )));
        }
        Ok(Self(minor - BASE_MINOR))
    }
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1.{}", self.minor())
    }
}

impl FromStr for ProtocolVersion {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim_start().starts_with('v') {
            Self::from_package(s)
        } else {
            Self::from_release(s)
        }
    }
}

impl TryFrom<String> for ProtocolVersion {
    type Error = ProtoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// What to do with a generation newer than [`ProtocolVersion::NEWEST_KNOWN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionPolicy {
    /// Use the newest known layout.
    #[default]
    Fallback,
    /// Refuse with [`ProtoError::UnsupportedVersion`].
    Strict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_release_strings() {
        assert_eq!(ProtocolVersion::from_release("1.8.8").unwrap(), ProtocolVersion::V1_8);
        assert_eq!(ProtocolVersion::from_release("1.12.2").unwrap(), ProtocolVersion::V1_12);
        assert_eq!(ProtocolVersion::from_release("1.17").unwrap(), ProtocolVersion::V1_17);
        assert_eq!(ProtocolVersion::from_release("1.21.4").unwrap(), ProtocolVersion(13));
    }

    #[test]
    fn parse_package_labels() {
        assert_eq!("v1_16_R3".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V1_16);
        assert_eq!("v1_9_R2".parse::<ProtocolVersion>().unwrap(), ProtocolVersion::V1_9);
    }

    #[test]
    fn reject_malformed_and_old() {
        assert!(ProtocolVersion::from_release("1.7.10").is_err());
        assert!(ProtocolVersion::from_release("2.0").is_err());
        assert!(ProtocolVersion::from_release("1").is_err());
        assert!(ProtocolVersion::from_release("1.x").is_err());
        assert!(ProtocolVersion::from_package("1_12_R1").is_err());
    }

    #[test]
    fn display_and_ordering() {
        assert_eq!(ProtocolVersion::V1_13.to_string(), "1.13");
        assert_eq!(ProtocolVersion::V1_8.minor(), 8);
        assert!(ProtocolVersion::V1_8 < ProtocolVersion::COLLISION_RULE);
        assert!(ProtocolVersion::RICH_TEXT_TEAMS < ProtocolVersion::STRUCTURED_TEAM_PARAMETERS);
    }
}
