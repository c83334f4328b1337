use super::*;
use crate::config::settings::MomentumConfig;
use crate::foundation::core::Point;

fn waypoints() -> Vec<Waypoint> {
    vec![
        Waypoint::point(0.0, Point::new(200.0, 100.0)),
        Waypoint::point(300.0, Point::new(300.0, 250.0)),
        Waypoint::point(600.0, Point::new(100.0, 300.0)),
    ]
}

fn two_profiles() -> DanceConfig {
    DanceConfig {
        momentum: vec![
            MomentumConfig::default(),
            MomentumConfig {
                distance_mult: 1.2,
                distance_mult_end: 1.2,
                interpolate_angles: false,
                ..MomentumConfig::default()
            },
        ],
        ..DanceConfig::default()
    }
}

#[test]
fn zero_cursors_is_rejected() {
    let err = play_cursors(
        &waypoints(),
        &DanceConfig::default(),
        0,
        60.0,
        0.0,
        600.0,
        &PlaybackThreading::default(),
    )
    .unwrap_err();
    assert!(matches!(err, DanceError::Validation(_)));
}

#[test]
fn zero_threads_is_rejected() {
    let threading = PlaybackThreading {
        parallel: true,
        threads: Some(0),
    };
    let cfg = DanceConfig::default();
    assert!(play_cursors(&waypoints(), &cfg, 2, 60.0, 0.0, 600.0, &threading).is_err());
}

#[test]
fn parallel_matches_sequential() {
    let cfg = two_profiles();
    let seq = play_cursors(
        &waypoints(),
        &cfg,
        3,
        60.0,
        -100.0,
        700.0,
        &PlaybackThreading::default(),
    )
    .unwrap();
    let par = play_cursors(
        &waypoints(),
        &cfg,
        3,
        60.0,
        -100.0,
        700.0,
        &PlaybackThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();

    assert_eq!(seq, par);
    assert_eq!(seq.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn profiles_cycle_by_cursor_id() {
    let cfg = two_profiles();
    let threading = PlaybackThreading::default();
    let tracks = play_cursors(&waypoints(), &cfg, 3, 60.0, 0.0, 600.0, &threading).unwrap();

    assert_eq!(tracks[0].frames, tracks[2].frames);
    assert_ne!(tracks[0].frames, tracks[1].frames);
    for t in &tracks {
        assert_eq!(t.hits.len(), 3);
    }
}
