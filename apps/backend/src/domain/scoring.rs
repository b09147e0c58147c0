use crate::domain::rules::{MAX_DISTANCE_KM, MAX_SCORE};

/// Linear score decay: full marks at 0 km, nothing at `MAX_DISTANCE_KM` or beyond.
///
/// Negative distances score as a perfect guess; NaN scores nothing.
pub fn score_for_distance(distance_km: f64) -> u32 {
    if distance_km.is_nan() {
        return 0;
    }
    let distance = distance_km.max(0.0);
    let raw = f64::from(MAX_SCORE) * (1.0 - distance / MAX_DISTANCE_KM);
    // raw is finite and within [.., MAX_SCORE] here, so the cast cannot truncate.
    raw.max(0.0).round() as u32
}
