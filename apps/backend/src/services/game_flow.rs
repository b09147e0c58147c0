//! Game flow orchestration: threads one session through target acquisition,
//! the pure engine and score persistence.
//!
//! The order of operations follows the play loop: start a game, confirm a
//! guess per round, continue to the next round, and submit the final total
//! once the last round is scored.

use tracing::{info, warn};

use crate::config::GameConfig;
use crate::domain::{
    advance_round, confirm_guess, ensure_can_advance, start_session_with_rounds, Coordinate,
    GameSession, RoundResult,
};
use crate::error::AppError;
use crate::errors::domain::{DomainError, StateKind};
use crate::errors::store::StoreError;
use crate::location::{LocationProvider, PanoramaProbe};
use crate::repos::scores::{top_scores, HistoryRecord, ScoreStore};

/// What the caller needs to render after a confirmed guess.
#[derive(Debug)]
pub struct RoundOutcome {
    pub round_no: usize,
    pub total_rounds: u8,
    pub result: RoundResult,
    pub total_score: u32,
    pub is_over: bool,
    /// `None` while the game continues; after the final round, whether the
    /// total was persisted. A failed submission leaves the session intact.
    pub submission: Option<Result<HistoryRecord, StoreError>>,
}

pub struct GameFlow<P, S> {
    locations: LocationProvider<P>,
    store: S,
    total_rounds: u8,
    session: Option<GameSession>,
}

impl<P: PanoramaProbe, S: ScoreStore> GameFlow<P, S> {
    pub fn new(locations: LocationProvider<P>, store: S, total_rounds: u8) -> Self {
        Self {
            locations,
            store,
            total_rounds,
            session: None,
        }
    }

    /// Build a flow whose provider honours the configured attempt cap and seed.
    pub fn from_config(probe: P, store: S, config: &GameConfig) -> Self {
        let locations =
            LocationProvider::new(probe, config.location_max_attempts, config.rng_seed);
        Self::new(locations, store, config.total_rounds)
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a fresh game, discarding any session in progress.
    pub fn start_game(&mut self) -> Result<&GameSession, AppError> {
        let target = self.locations.next_target()?;
        let session = start_session_with_rounds(target, self.total_rounds)?;
        info!(total_rounds = self.total_rounds, "game started");
        Ok(self.session.insert(session))
    }

    /// Confirm the player's guess for the current round.
    pub fn confirm_guess(&mut self, guess: Coordinate) -> Result<RoundOutcome, AppError> {
        let current = self.active()?;
        let next = confirm_guess(current, guess)?;

        let result = next
            .current_round()
            .result()
            .ok_or_else(|| {
                DomainError::invalid_state(StateKind::RoundNotScored, "confirmed round has no result")
            })?;
        let round_no = next.round_no();
        let total_score = next.total_score();
        let is_over = next.is_over();
        self.session = Some(next);

        info!(
            round_no,
            distance_km = result.distance_km,
            score = result.score,
            total_score,
            "round scored"
        );

        let submission = is_over.then(|| self.submit_final_score(total_score));

        Ok(RoundOutcome {
            round_no,
            total_rounds: self.total_rounds,
            result,
            total_score,
            is_over,
            submission,
        })
    }

    /// Move on to the next round with a freshly acquired target.
    pub fn continue_game(&mut self) -> Result<&GameSession, AppError> {
        let current = self.active()?;
        // Check before spending probe lookups on a target we cannot use.
        ensure_can_advance(current)?;

        let target = self.locations.next_target()?;
        let next = advance_round(self.active()?, target)?;
        Ok(self.session.insert(next))
    }

    /// Leave the finished (or abandoned) game and return it.
    pub fn finish_game(&mut self) -> Option<GameSession> {
        self.session.take()
    }

    pub fn history(&self) -> Result<Vec<HistoryRecord>, AppError> {
        Ok(self.store.history()?)
    }

    pub fn leaderboard(&self, limit: usize) -> Result<Vec<HistoryRecord>, AppError> {
        Ok(top_scores(&self.store.history()?, limit))
    }

    fn active(&self) -> Result<&GameSession, DomainError> {
        self.session.as_ref().ok_or_else(|| {
            DomainError::invalid_state(StateKind::NoActiveGame, "no game in progress")
        })
    }

    fn submit_final_score(&self, total_score: u32) -> Result<HistoryRecord, StoreError> {
        let record = HistoryRecord::now(total_score)?;
        match self.store.append(record.clone()) {
            Ok(()) => {
                info!(total_score, "final score submitted");
                Ok(record)
            }
            Err(e) => {
                warn!(total_score, error = %e, "failed to submit final score");
                Err(e)
            }
        }
    }
}
