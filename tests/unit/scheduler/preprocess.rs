use super::*;
use crate::foundation::core::Point;
use crate::waypoint::model::PolylinePath;

fn wp(time: f64, x: f64, y: f64) -> Waypoint {
    Waypoint::point(time, Point::new(x, y))
}

#[test]
fn coincident_pair_loses_exactly_one() {
    let out = dedup_points(
        vec![wp(0.0, 10.0, 10.0), wp(2.0, 10.0, 10.0)],
        &DedupConfig::default(),
    );
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].start_time, 2.0);
}

#[test]
fn far_apart_in_time_or_space_is_kept() {
    let out = dedup_points(
        vec![wp(0.0, 10.0, 10.0), wp(4.0, 10.0, 10.0), wp(5.0, 20.0, 10.0)],
        &DedupConfig::default(),
    );
    assert_eq!(out.len(), 3);
}

#[test]
fn cluster_is_thinned_not_erased() {
    let out = dedup_points(
        vec![
            wp(0.0, 0.0, 0.0),
            wp(1.0, 0.0, 0.0),
            wp(2.0, 0.0, 0.0),
            wp(100.0, 50.0, 0.0),
        ],
        &DedupConfig::default(),
    );
    // #0 goes (near #1); the old #1 slides into place unchecked; the old #2 still has a
    // coincident neighbour and goes too.
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].start_time, 1.0);
    assert_eq!(out[1].start_time, 100.0);
}

#[test]
fn continuous_waypoints_are_never_dropped() {
    let slider = Waypoint::from_polyline(
        PolylinePath::new(vec![(0.0, Point::new(0.0, 0.0)), (50.0, Point::new(40.0, 0.0))])
            .unwrap(),
    );
    let out = dedup_points(
        vec![slider, wp(51.0, 40.0, 0.0)],
        &DedupConfig::default(),
    );
    assert_eq!(out.len(), 1);
    assert!(out[0].is_continuous());
}

#[test]
fn validation_catches_order_and_inverted_ranges() {
    assert!(validate_waypoints(&[wp(10.0, 0.0, 0.0), wp(5.0, 0.0, 0.0)]).is_err());
    let mut bad = wp(10.0, 0.0, 0.0);
    bad.end_time = 5.0;
    assert!(validate_waypoints(&[bad]).is_err());
    assert!(validate_waypoints(&[wp(0.0, 0.0, 0.0), wp(0.0, 1.0, 1.0)]).is_ok());
}
