/// Rounds in a session unless configuration says otherwise.
pub const TOTAL_ROUNDS: u8 = 5;
/// Score for a perfect guess.
pub const MAX_SCORE: u32 = 5000;
/// Distance at which a guess stops earning points.
pub const MAX_DISTANCE_KM: f64 = 20_000.0;
