use serde::Serialize;

use crate::domain::coordinate::Coordinate;
use crate::domain::distance::distance_km;
use crate::domain::scoring::score_for_distance;

/// Per-round progression. One-way: a scored round never goes back.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum RoundPhase {
    /// Target chosen, no guess confirmed yet.
    AwaitingGuess,
    /// Guess confirmed, distance and score fixed.
    Scored,
}

/// Outcome of a scored round, as shown on the score display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RoundResult {
    pub target: Coordinate,
    pub guess: Coordinate,
    pub distance_km: f64,
    pub score: u32,
}

/// One target/guess/score cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Round {
    target: Coordinate,
    /// Guess, distance and score are recorded together on confirmation.
    result: Option<RoundResult>,
}

impl Round {
    pub fn new(target: Coordinate) -> Self {
        Self {
            target,
            result: None,
        }
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn guess(&self) -> Option<Coordinate> {
        self.result.map(|r| r.guess)
    }

    pub fn distance_km(&self) -> Option<f64> {
        self.result.map(|r| r.distance_km)
    }

    pub fn score(&self) -> Option<u32> {
        self.result.map(|r| r.score)
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.result
    }

    pub fn phase(&self) -> RoundPhase {
        match self.result {
            Some(_) => RoundPhase::Scored,
            None => RoundPhase::AwaitingGuess,
        }
    }

    #[inline]
    pub fn is_scored(&self) -> bool {
        self.result.is_some()
    }

    /// A scored copy of this round for `guess`, with the result it records.
    /// Callers check the phase first.
    pub(crate) fn scored_with(&self, guess: Coordinate) -> (Round, RoundResult) {
        let distance_km = distance_km(self.target, guess);
        let result = RoundResult {
            target: self.target,
            guess,
            distance_km,
            score: score_for_distance(distance_km),
        };
        let round = Round {
            target: self.target,
            result: Some(result),
        };
        (round, result)
    }
}
