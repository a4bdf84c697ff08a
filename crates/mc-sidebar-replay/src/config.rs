use mc_sidebar_proto::version::{ProtocolVersion, VersionPolicy};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub logging: LoggingSection,
    pub session: SessionSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default, rename = "frame")]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SessionSection {
    /// Client release, e.g. "1.12.2" or "v1_16_R3".
    pub version: ProtocolVersion,
    /// Refuse versions newer than the layout table instead of falling back.
    #[serde(default)]
    pub strict: bool,
    /// Send the removal packet after the last frame. Default: true.
    #[serde(default = "default_teardown")]
    pub teardown: bool,
}

fn default_teardown() -> bool {
    true
}

impl SessionSection {
    pub fn policy(&self) -> VersionPolicy {
        if self.strict {
            VersionPolicy::Strict
        } else {
            VersionPolicy::Fallback
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    /// Print each packet as its layout slots instead of logical fields.
    #[serde(default)]
    pub slots: bool,
}

/// One desired sidebar state.
#[derive(Debug, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
    /// Pause before applying this frame, in milliseconds.
    #[serde(default)]
    pub delay_ms: u64,
}

impl ReplayConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_config() {
        let toml_str = r#"
            [logging]
            level = "debug"

            [session]
            version = "1.12.2"

            [[frame]]
            title = "§6Lobby"
            lines = ["§aOnline: 3", "", "§7play.example.net"]

            [[frame]]
            delay_ms = 500
            lines = ["§aOnline: 4", "", "§7play.example.net"]
        "#;
        let config: ReplayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.session.version, ProtocolVersion::V1_12);
        // strict / teardown / output default when absent
        assert!(!config.session.strict);
        assert!(config.session.teardown);
        assert_eq!(config.session.policy(), VersionPolicy::Fallback);
        assert!(!config.output.slots);
        assert_eq!(config.frames.len(), 2);
        assert_eq!(config.frames[0].title.as_deref(), Some("§6Lobby"));
        assert_eq!(config.frames[0].lines.len(), 3);
        assert_eq!(config.frames[0].delay_ms, 0);
        assert_eq!(config.frames[1].title, None);
        assert_eq!(config.frames[1].delay_ms, 500);
    }

    #[test]
    fn parse_config_package_label_and_strict() {
        let toml_str = r#"
            [session]
            version = "v1_16_R3"
            strict = true
            teardown = false

            [output]
            slots = true
        "#;
        let config: ReplayConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.version, ProtocolVersion::V1_16);
        assert_eq!(config.session.policy(), VersionPolicy::Strict);
        assert!(!config.session.teardown);
        assert!(config.output.slots);
        assert_eq!(config.logging.level, "info");
        assert!(config.frames.is_empty());
    }

    #[test]
    fn reject_bad_version() {
        let toml_str = r#"
            [session]
            version = "1.7.10"
        "#;
        assert!(toml::from_str::<ReplayConfig>(toml_str).is_err());
    }
}
