use std::path::PathBuf;
use turnplay_core::{
    CommandOutcome, Error, NavOutcome, Playback, PlaybackCommand, StepCategory, Transcript, Turn, TurnId,
    ValidationError, load_transcript_file, parse_transcript,
};

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../demo/session.json")
}

fn transcript_of(n: usize) -> Transcript {
    let turns = (0..n)
        .map(|i| Turn::new(format!("t{}", i + 1), format!("user {}", i), format!("agent {}", i)))
        .collect();
    Transcript::new(format!("{} turns", n), turns)
}

#[test]
fn test_demo_transcript_loads() {
    let transcript = tokio_test::block_on(load_transcript_file(demo_path())).unwrap();
    assert_eq!(transcript.session_name, "Deadline anxiety");
    assert_eq!(transcript.len(), 4);
    assert_eq!(transcript.agents(), vec!["loop_router", "Researcher", "Asker", "Clarifier"]);

    let last_steps = transcript.turns[3].steps();
    assert_eq!(last_steps[0].category(), StepCategory::Complete);
    assert_eq!(last_steps[1].category(), StepCategory::General);
    assert!(!last_steps[1].log_entry().has_known_agent());

    let playback = Playback::with_transcript(transcript).unwrap();
    assert_eq!(playback.progress(), (1, 4));
}

#[test]
fn test_cursor_bounds_for_many_sizes() {
    for n in 0..6 {
        let mut playback = Playback::with_transcript(transcript_of(n)).unwrap();
        let script = [true, true, false, true, true, true, true, false, false, false, false, false, true];

        for forward in script {
            if forward {
                playback.advance();
            } else {
                playback.retreat();
            }

            match playback.cursor() {
                Some(cursor) => {
                    assert!(n > 0);
                    assert!(cursor <= n - 1);
                    assert_eq!(playback.visible_prefix().len(), cursor + 1);
                }
                None => {
                    assert_eq!(n, 0);
                    assert!(playback.visible_prefix().is_empty());
                }
            }
        }
    }
}

#[test]
fn test_idempotence_at_bounds() {
    let mut playback = Playback::with_transcript(transcript_of(4)).unwrap();
    for _ in 0..10 {
        assert_eq!(playback.retreat(), NavOutcome::Saturated);
    }
    assert_eq!(playback.cursor(), Some(0));

    playback.reveal_all();
    for _ in 0..10 {
        assert_eq!(playback.advance(), NavOutcome::Saturated);
    }
    assert_eq!(playback.cursor(), Some(3));
}

#[test]
fn test_visibility_independent_of_cursor() {
    let mut playback = Playback::with_transcript(transcript_of(5)).unwrap();
    playback.advance();
    let t2 = TurnId::from("t2");
    playback.toggle_detail(&t2).unwrap();

    for _ in 0..3 {
        playback.advance();
        assert!(playback.is_detail_visible(&t2));
    }
    for _ in 0..4 {
        playback.retreat();
        assert!(playback.is_detail_visible(&t2));
    }
}

#[test]
fn test_duplicate_load_preserves_previous() {
    let mut playback = Playback::with_transcript(transcript_of(3)).unwrap();
    playback.advance();

    let dup = parse_transcript(
        r#"{ "sessionName": "dup", "turns": [
            { "turnId": "a", "userMessage": "u", "agentMessage": "a" },
            { "turnId": "a", "userMessage": "u", "agentMessage": "a" }
        ] }"#,
    )
    .unwrap();

    let err = playback.apply(PlaybackCommand::Load(dup)).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::DuplicateTurnId { .. })));
    assert_eq!(playback.session_name(), "3 turns");
    assert_eq!(playback.cursor(), Some(1));
    assert_eq!(playback.turn_at(2).unwrap().turn_id, TurnId::from("t3"));
}

#[test]
fn test_three_turn_scenario_via_commands() {
    let mut playback = Playback::with_transcript(transcript_of(3)).unwrap();

    playback.apply(PlaybackCommand::Advance).unwrap();
    playback.apply(PlaybackCommand::Advance).unwrap();
    assert_eq!(playback.cursor(), Some(2));
    assert_eq!(playback.visible_prefix().len(), 3);

    let outcome = playback.apply(PlaybackCommand::Advance).unwrap();
    assert_eq!(outcome, CommandOutcome::Navigated(NavOutcome::Saturated));
    assert_eq!(playback.cursor(), Some(2));

    playback.apply(PlaybackCommand::ToggleDetail(TurnId::from("t1"))).unwrap();
    assert!(playback.is_detail_visible(&TurnId::from("t1")));

    playback.apply(PlaybackCommand::Retreat).unwrap();
    playback.apply(PlaybackCommand::Retreat).unwrap();
    assert_eq!(playback.cursor(), Some(0));
    assert!(playback.is_detail_visible(&TurnId::from("t1")));

    let err = playback.apply(PlaybackCommand::ToggleDetail(TurnId::from("t99"))).unwrap_err();
    assert!(matches!(err, Error::UnknownTurn(_)));
}
