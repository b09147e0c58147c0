//! Game session state and its pure transitions.
//!
//! A [`GameSession`] is a plain value. `start_session`, `confirm_guess` and
//! `advance_round` never mutate their input; they return the next session or
//! a [`DomainError`] and leave the caller's value as it was.

use serde::Serialize;
use tracing::debug;

use crate::domain::coordinate::Coordinate;
use crate::domain::round::{Round, RoundPhase, RoundResult};
use crate::domain::rules::TOTAL_ROUNDS;
use crate::errors::domain::{DomainError, StateKind};

/// A fixed-length sequence of rounds with a running total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSession {
    /// Rounds played so far, including the current one (never empty).
    rounds: Vec<Round>,
    /// 0-based index of the current round; always `rounds.len() - 1`.
    current_round_index: usize,
    /// Sum of all scored rounds.
    total_score: u32,
    /// Set exactly when the final round is scored.
    is_over: bool,
    /// Rounds this session was started with.
    total_rounds: u8,
}

impl GameSession {
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn current_round_index(&self) -> usize {
        self.current_round_index
    }

    /// 1-based round number for display ("Round 2 / 5").
    pub fn round_no(&self) -> usize {
        self.current_round_index + 1
    }

    pub fn current_round(&self) -> &Round {
        &self.rounds[self.current_round_index]
    }

    pub fn total_rounds(&self) -> u8 {
        self.total_rounds
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn is_last_round(&self) -> bool {
        self.round_no() == usize::from(self.total_rounds)
    }

    /// Results of every scored round, in play order.
    pub fn results(&self) -> Vec<RoundResult> {
        self.rounds.iter().filter_map(Round::result).collect()
    }
}

/// Start a session of [`TOTAL_ROUNDS`] rounds.
pub fn start_session(first_target: Coordinate) -> GameSession {
    new_session(first_target, TOTAL_ROUNDS)
}

/// Start a session with an explicit round count (must be at least 1).
pub fn start_session_with_rounds(
    first_target: Coordinate,
    total_rounds: u8,
) -> Result<GameSession, DomainError> {
    if total_rounds == 0 {
        return Err(DomainError::invalid_state(
            StateKind::NoRounds,
            "a session needs at least one round",
        ));
    }
    Ok(new_session(first_target, total_rounds))
}

fn new_session(first_target: Coordinate, total_rounds: u8) -> GameSession {
    GameSession {
        rounds: vec![Round::new(first_target)],
        current_round_index: 0,
        total_score: 0,
        is_over: false,
        total_rounds,
    }
}

/// Confirm `guess` for the current round and score it.
pub fn confirm_guess(session: &GameSession, guess: Coordinate) -> Result<GameSession, DomainError> {
    let current = session.current_round();
    if current.phase() == RoundPhase::Scored {
        return Err(DomainError::invalid_state(
            StateKind::AlreadyScored,
            format!("round {} already has a confirmed guess", session.round_no()),
        ));
    }

    let (scored, result) = current.scored_with(guess);
    let round_score = result.score;

    let mut next = session.clone();
    next.rounds[next.current_round_index] = scored;
    next.total_score += round_score;
    next.is_over = session.is_last_round();

    debug!(
        round_no = next.round_no(),
        distance_km = result.distance_km,
        round_score,
        total_score = next.total_score,
        is_over = next.is_over,
        "guess confirmed"
    );
    Ok(next)
}

/// Check that the session may move on to another round.
pub fn ensure_can_advance(session: &GameSession) -> Result<(), DomainError> {
    if !session.current_round().is_scored() {
        return Err(DomainError::invalid_state(
            StateKind::RoundNotScored,
            format!("round {} has not been scored yet", session.round_no()),
        ));
    }
    if session.is_last_round() {
        return Err(DomainError::invalid_state(
            StateKind::FinalRound,
            "session is over; start a new session instead",
        ));
    }
    Ok(())
}

/// Open the next round with `next_target`.
pub fn advance_round(
    session: &GameSession,
    next_target: Coordinate,
) -> Result<GameSession, DomainError> {
    ensure_can_advance(session)?;

    let mut next = session.clone();
    next.rounds.push(Round::new(next_target));
    next.current_round_index += 1;

    debug!(
        round_no = next.round_no(),
        total_rounds = next.total_rounds,
        "round started"
    );
    Ok(next)
}
