//! Per-game metrics written by the simulator.

use serde::Serialize;

use crate::simulator::GameResult;

#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: Option<u64>,
    pub total_score: u32,
    pub submitted: bool,
    pub duration_ms: f64,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: usize,
    pub target_lat: f64,
    pub target_lng: f64,
    pub guess_lat: f64,
    pub guess_lng: f64,
    pub distance_km: f64,
    pub score: u32,
}

/// Flat row for the CSV summary.
#[derive(Debug, Clone, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub total_score: u32,
    pub rounds: usize,
    pub mean_distance_km: f64,
    pub best_round: u32,
    pub worst_round: u32,
    pub submitted: bool,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        let mean_distance_km = if m.rounds.is_empty() {
            0.0
        } else {
            m.rounds.iter().map(|r| r.distance_km).sum::<f64>() / m.rounds.len() as f64
        };
        Self {
            game_id: m.game_id,
            total_score: m.total_score,
            rounds: m.rounds.len(),
            mean_distance_km,
            best_round: m.rounds.iter().map(|r| r.score).max().unwrap_or(0),
            worst_round: m.rounds.iter().map(|r| r.score).min().unwrap_or(0),
            submitted: m.submitted,
        }
    }
}

pub fn build_game_metrics(
    game_id: u32,
    seed: Option<u64>,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let rounds = result
        .rounds
        .iter()
        .enumerate()
        .map(|(i, r)| RoundMetrics {
            round_no: i + 1,
            target_lat: r.target.latitude(),
            target_lng: r.target.longitude(),
            guess_lat: r.guess.latitude(),
            guess_lng: r.guess.longitude(),
            distance_km: r.distance_km,
            score: r.score,
        })
        .collect();

    GameMetrics {
        game_id,
        seed,
        total_score: result.total_score,
        submitted: result.submitted,
        duration_ms,
        rounds,
    }
}
