// Proptest generators for domain types.
// Coordinates are generated valid by construction, never filtered.

use proptest::prelude::*;

use crate::domain::Coordinate;

/// Generate any valid coordinate, bounds included.
pub fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0f64, -180.0f64..=180.0f64).prop_map(|(lat, lng)| {
        #[allow(clippy::expect_used)]
        Coordinate::new(lat, lng).expect("generated inside valid ranges")
    })
}

/// Generate a distance in km, covering the zero-credit tail.
pub fn distance() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        0.0f64..20_000.0f64,
        20_000.0f64..=40_075.0f64,
    ]
}

/// Generate a full game plan: round count plus one (target, guess) per round.
pub fn game_plan() -> impl Strategy<Value = Vec<(Coordinate, Coordinate)>> {
    prop::collection::vec((coordinate(), coordinate()), 1..=10)
}
