use crate::domain::{
    advance_round, confirm_guess, start_session, start_session_with_rounds, Coordinate, GameSession,
    RoundPhase, MAX_SCORE, TOTAL_ROUNDS,
};
use crate::errors::domain::{DomainError, StateKind};

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("valid test coordinate")
}

fn targets() -> Vec<Coordinate> {
    vec![
        coord(48.8566, 2.3522),
        coord(40.7128, -74.0060),
        coord(-36.8485, 174.7633),
        coord(35.6762, 139.6503),
        coord(-23.5505, -46.6333),
    ]
}

/// Play every round with a guess exactly on target.
fn play_perfect(targets: &[Coordinate]) -> GameSession {
    let mut session = start_session(targets[0]);
    for (i, &target) in targets.iter().enumerate() {
        if i > 0 {
            session = advance_round(&session, target).unwrap();
        }
        session = confirm_guess(&session, target).unwrap();
    }
    session
}

#[test]
fn start_session_resets_state() {
    let target = coord(10.0, 20.0);
    let session = start_session(target);

    assert_eq!(session.rounds().len(), 1);
    assert_eq!(session.current_round_index(), 0);
    assert_eq!(session.round_no(), 1);
    assert_eq!(session.total_score(), 0);
    assert_eq!(session.total_rounds(), TOTAL_ROUNDS);
    assert!(!session.is_over());

    let round = session.current_round();
    assert_eq!(round.target(), target);
    assert_eq!(round.phase(), RoundPhase::AwaitingGuess);
    assert_eq!(round.guess(), None);
    assert_eq!(round.distance_km(), None);
    assert_eq!(round.score(), None);
}

#[test]
fn five_perfect_rounds_total_25000() {
    let session = play_perfect(&targets());

    assert_eq!(session.total_score(), 25_000);
    assert!(session.is_over());
    assert_eq!(session.current_round_index(), 4);
    assert!(session
        .rounds()
        .iter()
        .all(|r| r.score() == Some(MAX_SCORE) && r.distance_km() == Some(0.0)));
}

#[test]
fn is_over_only_after_final_round() {
    let targets = targets();
    let mut session = start_session(targets[0]);
    for (i, &target) in targets.iter().enumerate() {
        if i > 0 {
            session = advance_round(&session, target).unwrap();
        }
        assert!(!session.is_over(), "over before round {} scored", i + 1);
        session = confirm_guess(&session, target).unwrap();
        assert_eq!(session.is_over(), i == targets.len() - 1);
    }
}

#[test]
fn confirming_twice_is_rejected_and_total_unchanged() {
    let paris = coord(48.8566, 2.3522);
    let london = coord(51.5074, -0.1278);

    let session = start_session(paris);
    let scored = confirm_guess(&session, london).unwrap();
    assert_eq!(scored.total_score(), 4914);

    let err = confirm_guess(&scored, paris).unwrap_err();
    assert!(matches!(
        err,
        DomainError::InvalidState(StateKind::AlreadyScored, _)
    ));
    assert_eq!(scored.total_score(), 4914);
    assert_eq!(scored.current_round().guess(), Some(london));
}

#[test]
fn advancing_before_confirm_is_rejected() {
    let session = start_session(coord(1.0, 1.0));

    let err = advance_round(&session, coord(2.0, 2.0)).unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::RoundNotScored));
    assert_eq!(session.rounds().len(), 1);
    assert_eq!(session.current_round_index(), 0);
}

#[test]
fn advancing_after_final_round_is_rejected() {
    let session = play_perfect(&targets());

    let err = advance_round(&session, coord(0.0, 0.0)).unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::FinalRound));
}

#[test]
fn transitions_leave_input_untouched() {
    let session = start_session(coord(0.0, 0.0));
    let before = session.clone();

    let scored = confirm_guess(&session, coord(0.0, 1.0)).unwrap();
    assert_eq!(session, before);
    assert_ne!(scored, before);

    let advanced = advance_round(&scored, coord(5.0, 5.0)).unwrap();
    assert_eq!(scored.rounds().len(), 1);
    assert_eq!(advanced.rounds().len(), 2);
    assert_eq!(advanced.current_round_index(), 1);
    // Earlier round keeps its result
    assert_eq!(advanced.rounds()[0], scored.rounds()[0]);
    assert_eq!(advanced.total_score(), scored.total_score());
}

#[test]
fn single_round_session() {
    let target = coord(-45.0, 170.0);
    let session = start_session_with_rounds(target, 1).unwrap();
    assert!(session.is_last_round());

    let done = confirm_guess(&session, target).unwrap();
    assert!(done.is_over());
    assert_eq!(done.total_score(), MAX_SCORE);
}

#[test]
fn zero_round_session_is_rejected() {
    let err = start_session_with_rounds(coord(0.0, 0.0), 0).unwrap_err();
    assert_eq!(err.state_kind(), Some(StateKind::NoRounds));
}

#[test]
fn round_result_reports_guess_and_distance() {
    let paris = coord(48.8566, 2.3522);
    let london = coord(51.5074, -0.1278);

    let session = confirm_guess(&start_session(paris), london).unwrap();
    let result = session.current_round().result().expect("scored round has a result");

    assert_eq!(result.target, paris);
    assert_eq!(result.guess, london);
    assert_eq!(result.score, 4914);
    assert!((result.distance_km - 343.5).abs() <= 1.0);
    assert_eq!(session.results(), vec![result]);
}

#[test]
fn total_is_the_sum_of_recorded_round_scores() {
    let targets = targets();
    let guesses = [
        coord(51.5074, -0.1278),
        coord(34.0522, -118.2437),
        coord(-33.8688, 151.2093),
        coord(35.6762, 139.6503),
        coord(64.1466, -21.9426),
    ];

    let mut session = start_session(targets[0]);
    let mut running = 0;
    for (i, (&target, &guess)) in targets.iter().zip(&guesses).enumerate() {
        if i > 0 {
            session = advance_round(&session, target).unwrap();
        }
        session = confirm_guess(&session, guess).unwrap();

        let round = session.current_round();
        let result = round.result().expect("scored round has a result");
        assert_eq!(round.score(), Some(result.score));
        running += result.score;
        assert_eq!(session.total_score(), running);
    }

    let from_results: u32 = session.results().iter().map(|r| r.score).sum();
    assert_eq!(session.total_score(), from_results);
    assert!(session.total_score() < MAX_SCORE * u32::from(TOTAL_ROUNDS));
}
