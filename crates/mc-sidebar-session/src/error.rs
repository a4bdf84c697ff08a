//! Session-level errors.

use mc_sidebar_proto::error::ProtoError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("requested {requested} sidebar lines, at most {capacity} are supported")]
    CapacityExceeded { requested: usize, capacity: usize },

    #[error(transparent)]
    Proto(#[from] ProtoError),
}
