//! Per-client sidebar scoreboard sessions.
//!
//! A [`ScoreboardSession`] remembers what one client is currently shown and
//! turns title and line changes into the smallest set of scoreboard packets
//! that client's protocol generation understands.

pub mod builder;
pub mod error;
pub mod pool;
pub mod session;
pub mod sink;
pub mod split;

pub use error::SessionError;
pub use pool::{TeamColor, TeamPool};
pub use session::ScoreboardSession;
pub use sink::PacketSink;
