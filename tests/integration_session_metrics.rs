use std::time::{Duration, SystemTime};
use typemaster::session::{Status, TypingSession};

fn at(ms: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_millis(ms)
}

#[test]
fn perfect_typing_scores_net_wpm_three() {
    // "cat" typed perfectly over 12 seconds (0.2 minutes):
    // gross = 3/5/0.2 = 3 wpm, no errors, so net = 3
    let mut session = TypingSession::new("cat".to_string());

    session.submit_input_at("c", at(0));
    session.submit_input_at("ca", at(6_000));
    session.submit_input_at("cat", at(12_000));

    assert_eq!(session.status, Status::Finished);
    assert_eq!(session.wpm, 3.0);
    assert_eq!(session.accuracy, 100.0);
    assert_eq!(session.errors, 0);
    assert_eq!(session.ended_at, Some(at(12_000)));
}

#[test]
fn one_error_drags_net_wpm_to_zero() {
    // "cots" against "cats" over 12 seconds: gross = 4/5/0.2 = 4,
    // net = 4 - 1/0.2 = -1, clamped to 0; accuracy = round(3/4*100) = 75
    let mut session = TypingSession::new("cats".to_string());

    session.start_at(at(0));
    session.submit_input_at("cots", at(12_000));

    assert_eq!(session.status, Status::Finished);
    assert_eq!(session.wpm, 0.0);
    assert_eq!(session.accuracy, 75.0);
    assert_eq!(session.errors, 1);
}

#[test]
fn over_length_input_leaves_session_unchanged() {
    let mut session = TypingSession::new("hi".to_string());
    session.submit_input_at("h", at(1_000));

    session.submit_input_at("hii", at(2_000));

    assert_eq!(session.user_input, "h");
    assert_eq!(session.status, Status::InProgress);
}

#[test]
fn finished_session_is_frozen_until_reset() {
    let mut session = TypingSession::new("hi".to_string());
    session.submit_input_at("hi", at(5_000));
    assert_eq!(session.status, Status::Finished);

    let frozen = (session.user_input.clone(), session.wpm, session.accuracy);

    session.submit_input_at("ha", at(9_000));
    session.finalize_at(at(9_000));

    assert_eq!(session.user_input, frozen.0);
    assert_eq!(session.wpm, frozen.1);
    assert_eq!(session.accuracy, frozen.2);

    session.reset(true);
    assert_eq!(session.status, Status::Waiting);
    session.submit_input_at("h", at(20_000));
    assert_eq!(session.user_input, "h");
}

#[test]
fn metrics_stay_bounded_through_a_noisy_session() {
    let target = "pack my box with five dozen liquor jugs";
    let mut session = TypingSession::new(target.to_string());

    let keystrokes = [
        "p", "pa", "pac", "pack", "pack ", "pack m", "pack mx", "pack my ", "pack my b",
        "pack my bo", "pack my box\n", "pack my box  w",
    ];
    for (i, input) in keystrokes.iter().enumerate() {
        session.submit_input_at(input, at(300 * (i as u64 + 1)));
        assert!(session.wpm >= 0.0, "wpm went negative on {input:?}");
        assert!(
            (0.0..=100.0).contains(&session.accuracy),
            "accuracy out of bounds on {input:?}",
        );
    }

    // Newlines and whitespace runs were sanitized on the way in
    assert!(!session.user_input.contains('\n'));
    assert!(!session.user_input.contains("  "));
}

#[test]
fn timer_expiry_finalizes_partial_input() {
    let mut session = TypingSession::new("the quick brown fox".to_string());
    session.submit_input_at("the quick", at(0));

    // caller's timer fires at 60 seconds
    session.finalize_at(at(60_000));

    assert_eq!(session.status, Status::Finished);
    assert_eq!(session.errors, 0);
    assert_eq!(session.accuracy, 100.0);
    // 9 chars over 1 minute: gross = 9/5 = 1.8, rounds to 2
    assert_eq!(session.wpm, 2.0);
}
