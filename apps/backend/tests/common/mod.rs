#![allow(dead_code)]

// tests/common/mod.rs
use guessr::Coordinate;

// Logging is auto-installed for every test binary that declares `mod common`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("valid test coordinate")
}

/// A guess roughly `km` kilometres due north of `target` (clamped at the pole).
pub fn north_of(target: Coordinate, km: f64) -> Coordinate {
    let lat = (target.latitude() + km / 111.195).min(90.0);
    coord(lat, target.longitude())
}
