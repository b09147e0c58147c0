use crate::domain::{distance_km, score_for_distance, Coordinate, EARTH_RADIUS_KM, MAX_SCORE};

fn coord(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng).expect("valid test coordinate")
}

#[test]
fn score_endpoints() {
    assert_eq!(score_for_distance(0.0), MAX_SCORE);
    assert_eq!(score_for_distance(20_000.0), 0);
    // Clamped, not negative
    assert_eq!(score_for_distance(40_000.0), 0);
    assert_eq!(score_for_distance(f64::INFINITY), 0);
}

#[test]
fn score_decays_linearly() {
    assert_eq!(score_for_distance(10_000.0), 2500);
    assert_eq!(score_for_distance(1_000.0), 4750);
    assert_eq!(score_for_distance(4.0), 4999);
    // 2 km is exactly half a point away from 5000 and rounds up
    assert_eq!(score_for_distance(2.0), 5000);
}

#[test]
fn score_handles_degenerate_distances() {
    assert_eq!(score_for_distance(-5.0), MAX_SCORE);
    assert_eq!(score_for_distance(f64::NAN), 0);
}

#[test]
fn paris_to_london() {
    let paris = coord(48.8566, 2.3522);
    let london = coord(51.5074, -0.1278);

    let d = distance_km(paris, london);
    assert!((d - 343.5).abs() <= 1.0, "Paris -> London was {d} km");
    assert_eq!(score_for_distance(d), 4914);
}

#[test]
fn tokyo_to_sydney() {
    let tokyo = coord(35.6762, 139.6503);
    let sydney = coord(-33.8688, 151.2093);

    let d = distance_km(tokyo, sydney);
    assert!((d - 7825.8).abs() <= 1.0, "Tokyo -> Sydney was {d} km");
    assert_eq!(score_for_distance(d), 3044);
}

#[test]
fn antipodes_are_half_circumference_apart() {
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;

    let d = distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
    assert!((d - half).abs() < 1e-6, "equator antipodes gave {d}");

    let d = distance_km(coord(90.0, 0.0), coord(-90.0, 0.0));
    assert!((d - half).abs() < 1e-6, "pole to pole gave {d}");

    assert_eq!(score_for_distance(d), 0);
}

#[test]
fn antimeridian_is_short_hop() {
    let d = distance_km(coord(0.0, 179.5), coord(0.0, -179.5));
    assert!((d - 111.2).abs() < 0.5, "across the date line gave {d}");
}
