//! Protocol-level errors.

use thiserror::Error;

use crate::version::ProtocolVersion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtoError {
    #[error("unsupported protocol version {version} (newest known: {newest})")]
    UnsupportedVersion {
        version: ProtocolVersion,
        newest: ProtocolVersion,
    },

    #[error("invalid protocol version: {0}")]
    InvalidVersion(String),
}
