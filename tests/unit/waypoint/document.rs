use super::*;

#[test]
fn parses_points_and_paths() {
    let json = r#"{
        "waypoints": [
            {"time": 0, "position": [10, 20], "combo_group": 1},
            {"time": 100, "position": {"x": 30, "y": 40}, "raw_position": [31, 41]},
            {"path": [
                {"time": 200, "position": [0, 0]},
                {"time": 300, "position": [100, 0]}
            ], "combo_group": 2, "end_angle": 1.5}
        ]
    }"#;
    let doc = WaypointDoc::from_reader(json.as_bytes()).unwrap();
    assert_eq!(doc.len(), 3);

    let wps = doc.to_waypoints().unwrap();
    assert_eq!(wps[0].start_position, Point::new(10.0, 20.0));
    assert_eq!(wps[0].combo_group, 1);
    assert_eq!(wps[1].raw_start_position, Point::new(31.0, 41.0));
    assert!(wps[2].is_continuous());
    assert_eq!(wps[2].start_time, 200.0);
    assert_eq!(wps[2].end_time, 300.0);
    assert_eq!(wps[2].end_angle(), Some(1.5));
    assert!((wps[2].start_angle().unwrap() - std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn rejects_unsorted_waypoints() {
    let json = r#"{"waypoints": [
        {"time": 100, "position": [0, 0]},
        {"time": 50, "position": [1, 1]}
    ]}"#;
    let doc = WaypointDoc::from_reader(json.as_bytes()).unwrap();
    let err = doc.to_waypoints().unwrap_err();
    assert!(err.to_string().contains("sorted"));
}

#[test]
fn rejects_point_without_position() {
    let json = r#"{"waypoints": [{"time": 100}]}"#;
    let doc = WaypointDoc::from_reader(json.as_bytes()).unwrap();
    assert!(doc.to_waypoints().is_err());
}

#[test]
fn rejects_angles_on_point_targets() {
    let json = r#"{"waypoints": [{"time": 1, "position": [0, 0], "start_angle": 0.5}]}"#;
    let doc = WaypointDoc::from_reader(json.as_bytes()).unwrap();
    assert!(doc.to_waypoints().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = WaypointDoc::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, DanceError::Serde(_)));
}
