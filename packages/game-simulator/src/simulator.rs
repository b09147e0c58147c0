//! Plays complete games through `GameFlow` with a synthetic guesser.

use guessr::domain::{Coordinate, RoundResult, EARTH_RADIUS_KM};
use guessr::{AppError, DomainError, GameFlow, PanoramaProbe, ScoreStore, StateKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Guesses a point at a random bearing and random distance from the target.
pub struct Guesser {
    rng: StdRng,
    spread_km: f64,
}

impl Guesser {
    pub fn new(spread_km: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let max_km = std::f64::consts::PI * EARTH_RADIUS_KM;
        let spread_km = if spread_km.is_nan() {
            0.0
        } else {
            spread_km.clamp(0.0, max_km)
        };
        Self { rng, spread_km }
    }

    pub fn guess_near(&mut self, target: Coordinate) -> Result<Coordinate, AppError> {
        let bearing = self.rng.random::<f64>() * std::f64::consts::TAU;
        let km = self.rng.random::<f64>() * self.spread_km;
        Ok(destination(target, bearing, km)?)
    }
}

/// Point reached travelling `km` along a great circle from `from` at `bearing` radians.
fn destination(from: Coordinate, bearing: f64, km: f64) -> Result<Coordinate, DomainError> {
    let delta = km / EARTH_RADIUS_KM;
    let phi1 = from.latitude().to_radians();
    let lambda1 = from.longitude().to_radians();

    let sin_phi2 = (phi1.sin() * delta.cos() + phi1.cos() * delta.sin() * bearing.cos())
        .clamp(-1.0, 1.0);
    let phi2 = sin_phi2.asin();
    let lambda2 = lambda1
        + (bearing.sin() * delta.sin() * phi1.cos()).atan2(delta.cos() - phi1.sin() * sin_phi2);

    let lat = phi2.to_degrees().clamp(-90.0, 90.0);
    let lng = (lambda2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    Coordinate::new(lat, lng)
}

/// Outcome of one simulated game.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub total_score: u32,
    pub rounds: Vec<RoundResult>,
    /// Whether the final score reached the store.
    pub submitted: bool,
}

/// Play one full game and leave the flow idle again.
pub fn play_game<P, S>(
    flow: &mut GameFlow<P, S>,
    guesser: &mut Guesser,
) -> Result<GameResult, AppError>
where
    P: PanoramaProbe,
    S: ScoreStore,
{
    flow.start_game()?;
    let mut rounds = Vec::new();

    loop {
        let target = flow
            .session()
            .map(|session| session.current_round().target())
            .ok_or_else(|| {
                DomainError::invalid_state(StateKind::NoActiveGame, "session vanished mid-game")
            })?;
        let guess = guesser.guess_near(target)?;
        let outcome = flow.confirm_guess(guess)?;
        debug!(
            round_no = outcome.round_no,
            distance_km = outcome.result.distance_km,
            score = outcome.result.score,
            "simulated round"
        );
        rounds.push(outcome.result);

        if outcome.is_over {
            let submitted = matches!(outcome.submission, Some(Ok(_)));
            flow.finish_game();
            return Ok(GameResult {
                total_score: outcome.total_score,
                rounds,
                submitted,
            });
        }
        flow.continue_game()?;
    }
}
