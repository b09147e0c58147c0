//! Domain layer: pure round/scoring engine types and helpers.

pub mod coordinate;
pub mod distance;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod session;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_session;
#[cfg(test)]
mod tests_scoring;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use coordinate::Coordinate;
pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use round::{Round, RoundPhase, RoundResult};
pub use rules::{MAX_DISTANCE_KM, MAX_SCORE, TOTAL_ROUNDS};
pub use scoring::score_for_distance;
pub use session::{
    advance_round, confirm_guess, ensure_can_advance, start_session, start_session_with_rounds,
    GameSession,
};
