//! Minecraft Java Edition scoreboard protocol types: protocol generations,
//! per-generation packet layouts, text encodings and packet definitions.

pub mod error;
pub mod layout;
pub mod packets;
pub mod text;
pub mod version;
