use mc_sidebar_proto::layout::{resolve, LayoutVariant};
use mc_sidebar_proto::packets::{Packet, ScoreAction, TeamMode};
use mc_sidebar_proto::version::ProtocolVersion;
use mc_sidebar_session::split::split_legacy;
use mc_sidebar_session::{ScoreboardSession, SessionError, TeamPool};
use proptest::prelude::*;

fn version_strategy() -> impl Strategy<Value = ProtocolVersion> {
    (0u8..16).prop_map(ProtocolVersion)
}

fn content_strategy(max_lines: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 §]{0,24}", 0..=max_lines)
}

fn count_team_updates(packets: &[Packet]) -> usize {
    packets
        .iter()
        .filter(|p| matches!(p, Packet::Team(team) if team.mode == TeamMode::Update))
        .count()
}

fn count_scores(packets: &[Packet], action: ScoreAction) -> usize {
    packets
        .iter()
        .filter(|p| matches!(p, Packet::Score(score) if score.action == action))
        .count()
}

fn opened(version: ProtocolVersion) -> ScoreboardSession {
    let mut sink: Vec<Packet> = Vec::new();
    ScoreboardSession::open(version, &mut sink)
}

proptest! {
    #[test]
    fn prop_rows_follow_reversed_mapping(
        version in version_strategy(),
        content in content_strategy(TeamPool::size()),
    ) {
        let mut session = opened(version);
        let mut sink: Vec<Packet> = Vec::new();
        session.update_lines(&content, &mut sink).unwrap();

        let lines = content.len();
        prop_assert_eq!(session.line_count(), lines);
        for (index, text) in content.iter().enumerate() {
            prop_assert_eq!(session.line(lines - index - 1), Some(text.as_str()));
        }
        prop_assert_eq!(session.lines(), content.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn prop_repeated_update_is_silent(
        version in version_strategy(),
        content in content_strategy(TeamPool::size()),
    ) {
        let mut session = opened(version);
        session.update_lines(&content, &mut Vec::<Packet>::new()).unwrap();

        let mut sink: Vec<Packet> = Vec::new();
        session.update_lines(&content, &mut sink).unwrap();
        prop_assert_eq!(count_team_updates(&sink), 0);
        prop_assert!(sink.is_empty());
    }

    #[test]
    fn prop_line_count_reconciliation(
        version in version_strategy(),
        before in content_strategy(TeamPool::size()),
        after in content_strategy(TeamPool::size()),
    ) {
        let mut session = opened(version);
        session.update_lines(&before, &mut Vec::<Packet>::new()).unwrap();

        let mut sink: Vec<Packet> = Vec::new();
        session.update_lines(&after, &mut sink).unwrap();

        let (a, b) = (before.len(), after.len());
        let changes = count_scores(&sink, ScoreAction::Change);
        let removes = count_scores(&sink, ScoreAction::Remove);
        if b >= a {
            prop_assert_eq!(changes, b - a);
            prop_assert_eq!(removes, 0);
        } else {
            prop_assert_eq!(changes, 0);
            prop_assert_eq!(removes, a - b);
        }
        prop_assert!(count_team_updates(&sink) <= b);
    }

    #[test]
    fn prop_capacity_violation_sends_nothing(
        version in version_strategy(),
        extra in 1usize..10,
    ) {
        let mut session = opened(version);
        let content: Vec<String> = (0..TeamPool::size() + extra).map(|i| i.to_string()).collect();
        let mut sink: Vec<Packet> = Vec::new();
        let err = session.update_lines(&content, &mut sink).unwrap_err();
        let is_capacity = matches!(err, SessionError::CapacityExceeded { .. });
        prop_assert!(is_capacity);
        prop_assert!(sink.is_empty());
    }

    #[test]
    fn prop_uncolored_split_round_trips(content in "[a-zA-Z0-9 ]{0,32}") {
        let (prefix, suffix) = split_legacy(&content, 16);
        prop_assert!(prefix.chars().count() <= 16);
        prop_assert!(suffix.chars().count() <= 16);
        prop_assert_eq!(format!("{prefix}{suffix}"), content);
    }

    #[test]
    fn prop_split_never_exceeds_width(content in "[a-z§0-9]{0,64}") {
        let (prefix, suffix) = split_legacy(&content, 16);
        prop_assert!(prefix.chars().count() <= 16);
        prop_assert!(suffix.chars().count() <= 16);
        prop_assert!(content.starts_with(&prefix));
    }
}

#[test]
fn variant_selection_covers_every_generation() {
    for generation in 0u8..=20 {
        let version = ProtocolVersion(generation);
        let expected = if version < ProtocolVersion::RICH_TEXT_TEAMS {
            LayoutVariant::Legacy
        } else if version < ProtocolVersion::STRUCTURED_TEAM_PARAMETERS {
            LayoutVariant::Mid
        } else {
            LayoutVariant::Modern
        };
        assert_eq!(resolve(version).variant, expected, "generation {version}");
        assert_eq!(ScoreboardSession::new(version).layout().variant, expected);
    }
}

#[test]
fn teardown_then_reinitialize() {
    let version = ProtocolVersion::V1_12;
    let mut sink: Vec<Packet> = Vec::new();
    let mut session = ScoreboardSession::open(version, &mut sink);
    session.update_lines(&["one", "two"], &mut sink).unwrap();
    session.teardown(&mut sink);

    sink.clear();
    session.initialize(&mut sink);
    session.update_lines(&["one", "two"], &mut sink).unwrap();
    assert_eq!(count_scores(&sink, ScoreAction::Change), 2);
    assert_eq!(count_team_updates(&sink), 2);
}
