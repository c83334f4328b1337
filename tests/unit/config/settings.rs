use super::*;

#[test]
fn defaults_are_valid() {
    DanceConfig::default().validate().unwrap();
    MomentumConfig::default().validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let json = r#"{
        "momentum": [{"stream_restrict": false}, {"equal_pos_bounce": 0}],
        "anchor": {"time": -1000}
    }"#;
    let cfg = DanceConfig::from_reader(json.as_bytes()).unwrap();
    cfg.validate().unwrap();
    assert_eq!(cfg.mover, MoverKind::Momentum);
    assert_eq!(cfg.momentum.len(), 2);
    assert!(!cfg.momentum[0].stream_restrict);
    assert_eq!(cfg.momentum[0].distance_mult, 0.6);
    assert_eq!(cfg.momentum[1].equal_pos_bounce, 0.0);
    assert_eq!(cfg.anchor.time, -1000.0);
    assert_eq!(cfg.anchor.position, Point::new(100.0, 100.0));
}

#[test]
fn momentum_profiles_wrap_by_cursor_id() {
    let mut cfg = DanceConfig::default();
    let mut second = MomentumConfig::default();
    second.stream_mult = 0.1;
    cfg.momentum.push(second);

    assert_eq!(cfg.momentum_for(0).unwrap().stream_mult, 0.7);
    assert_eq!(cfg.momentum_for(1).unwrap().stream_mult, 0.1);
    assert_eq!(cfg.momentum_for(2).unwrap().stream_mult, 0.7);
}

#[test]
fn out_of_range_values_are_rejected() {
    let mut m = MomentumConfig::default();
    m.distance_mult = -1.0;
    assert!(m.validate().is_err());

    let mut m = MomentumConfig::default();
    m.stream_area = 400.0;
    assert!(m.validate().is_err());

    let mut m = MomentumConfig::default();
    m.stream_min_distance = 200.0;
    assert!(m.validate().is_err());

    let mut m = MomentumConfig::default();
    m.duration_trigger = f64::NAN;
    assert!(m.validate().is_err());
}

#[test]
fn profile_errors_name_the_profile() {
    let mut cfg = DanceConfig::default();
    cfg.momentum[0].restrict_area = -5.0;
    let err = cfg.validate().unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with("config error: momentum profile #0:"), "{msg}");
}

#[test]
fn empty_profiles_and_bad_playfield_are_rejected() {
    let mut cfg = DanceConfig::default();
    cfg.momentum.clear();
    assert!(cfg.validate().is_err());
    assert!(cfg.momentum_for(0).is_err());

    let mut cfg = DanceConfig::default();
    cfg.cursor.playfield = Rect::new(0.0, 0.0, 0.0, 10.0);
    assert!(cfg.validate().is_err());
}

#[test]
fn unknown_fields_are_rejected() {
    let json = r#"{"momentum": [{"stream_mutl": 1.0}]}"#;
    assert!(DanceConfig::from_reader(json.as_bytes()).is_err());
}
