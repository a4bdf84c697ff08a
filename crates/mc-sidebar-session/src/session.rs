//! Scoreboard session: one client's sidebar and the packets that keep it in
//! sync.
//!
//! Rows are keyed by [`TeamColor`]. With `n` lines shown, input line `r` is
//! rendered on row `n - r - 1`: the client sorts sidebar entries by descending
//! score and each row's score is its row index, so the first input line gets
//! the highest row.

use std::collections::BTreeMap;

use mc_sidebar_proto::layout::{resolve, resolve_with, Layout};
use mc_sidebar_proto::packets::{ObjectiveMode, Packet};
use mc_sidebar_proto::version::{ProtocolVersion, VersionPolicy};
use tracing::{debug, trace, warn};

use crate::builder::{builder_for, PacketBuilder};
use crate::error::SessionError;
use crate::pool::{TeamColor, TeamPool};
use crate::sink::PacketSink;

/// Objective backing the sidebar.
pub const OBJECTIVE_NAME: &str = "Sidebar";
/// Title shown until [`ScoreboardSession::set_title`] is called.
pub const DEFAULT_TITLE: &str = "ScoreBoard";
/// Objective name sent on teardown.
pub const REMOVAL_SENTINEL: &str = "REMOVE";

#[derive(Debug)]
pub struct ScoreboardSession {
    version: ProtocolVersion,
    builder: Box<dyn PacketBuilder>,
    title: String,
    /// Row index → text last sent for that row.
    last_content: BTreeMap<usize, String>,
    line_count: usize,
    initialized: bool,
}

impl ScoreboardSession {
    /// Create a session for `version`. Nothing is sent until
    /// [`initialize`](Self::initialize).
    pub fn new(version: ProtocolVersion) -> Self {
        Self::from_layout(version, resolve(version))
    }

    /// Create a session, resolving the layout under `policy`.
    pub fn with_policy(
        version: ProtocolVersion,
        policy: VersionPolicy,
    ) -> Result<Self, SessionError> {
        Ok(Self::from_layout(version, resolve_with(version, policy)?))
    }

    fn from_layout(version: ProtocolVersion, layout: &'static Layout) -> Self {
        debug!("Sidebar session for {version} uses {:?} layout", layout.variant);
        Self {
            version,
            builder: builder_for(version, layout),
            title: DEFAULT_TITLE.to_string(),
            last_content: BTreeMap::new(),
            line_count: 0,
            initialized: false,
        }
    }

    /// Create a session and send its setup packets.
    pub fn open<K: PacketSink + ?Sized>(version: ProtocolVersion, sink: &mut K) -> Self {
        let mut session = Self::new(version);
        session.initialize(sink);
        session
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn layout(&self) -> &'static Layout {
        self.builder.layout()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Text last sent for `row`.
    pub fn line(&self, row: usize) -> Option<&str> {
        self.last_content.get(&row).map(String::as_str)
    }

    /// Shown lines in input order (top line first).
    pub fn lines(&self) -> Vec<&str> {
        (0..self.line_count)
            .rev()
            .filter_map(|row| self.line(row))
            .collect()
    }

    /// Create the objective and one team per row key, then show the
    /// objective in the sidebar.
    pub fn initialize<K: PacketSink + ?Sized>(&mut self, sink: &mut K) {
        if self.initialized {
            warn!("Sidebar already initialized, sending setup packets again");
        }
        self.title = DEFAULT_TITLE.to_string();
        emit(
            sink,
            self.builder
                .objective(OBJECTIVE_NAME, DEFAULT_TITLE, ObjectiveMode::Create),
        );
        for color in TeamPool::iter() {
            emit(sink, self.builder.team_create(color));
        }
        emit(sink, self.builder.display(OBJECTIVE_NAME));
        self.initialized = true;
    }

    /// Replace the sidebar title.
    pub fn set_title<K: PacketSink + ?Sized>(&mut self, title: &str, sink: &mut K) {
        emit(
            sink,
            self.builder
                .objective(OBJECTIVE_NAME, title, ObjectiveMode::Update),
        );
        self.title = title.to_string();
    }

    /// Show `content`, top line first.
    ///
    /// Only rows whose text changed are re-sent. Row scores are added or
    /// removed when the number of lines changes. Fails without sending
    /// anything if more lines are requested than there are row keys.
    pub fn update_lines<S, K>(&mut self, content: &[S], sink: &mut K) -> Result<(), SessionError>
    where
        S: AsRef<str>,
        K: PacketSink + ?Sized,
    {
        let lines = content.len();
        validate_line_count(lines)?;
        // Only the count is compared: rows keep their keys, so a same-sized
        // update never needs score changes.
        if lines != self.line_count {
            self.update_line_count(lines, sink);
        }
        for (index, text) in content.iter().enumerate() {
            let color = row_color(lines, index);
            let text = text.as_ref();
            if self.line(color.index()) == Some(text) {
                continue;
            }
            emit(sink, self.builder.team_content(color, text));
            self.last_content.insert(color.index(), text.to_string());
        }
        Ok(())
    }

    /// Remove the sidebar and forget what was shown.
    pub fn teardown<K: PacketSink + ?Sized>(&mut self, sink: &mut K) {
        emit(
            sink,
            self.builder
                .objective(REMOVAL_SENTINEL, DEFAULT_TITLE, ObjectiveMode::Create),
        );
        self.last_content.clear();
        self.line_count = 0;
        self.initialized = false;
        debug!("Sidebar torn down");
    }

    fn update_line_count<K: PacketSink + ?Sized>(&mut self, lines: usize, sink: &mut K) {
        debug!("Sidebar line count {} -> {lines}", self.line_count);
        if lines > self.line_count {
            for row in self.line_count..lines {
                let color = TeamPool::at(row);
                emit(sink, self.builder.score_change(color, OBJECTIVE_NAME, row as i32));
            }
        } else {
            for row in lines..self.line_count {
                let color = TeamPool::at(row);
                emit(sink, self.builder.score_remove(color, OBJECTIVE_NAME));
                self.last_content.remove(&row);
            }
        }
        self.line_count = lines;
    }
}

fn validate_line_count(lines: usize) -> Result<(), SessionError> {
    if lines > TeamPool::size() {
        return Err(SessionError::CapacityExceeded {
            requested: lines,
            capacity: TeamPool::size(),
        });
    }
    Ok(())
}

fn emit<K: PacketSink + ?Sized>(sink: &mut K, packet: impl Into<Packet>) {
    let packet = packet.into();
    trace!("Sidebar packet: {packet:?}");
    sink.send(packet);
}

/// Row key for input line `index` when `lines` lines are shown.
pub fn row_color(lines: usize, index: usize) -> TeamColor {
    TeamPool::at(lines - index - 1)
}
