use super::*;

const EPS: f64 = 1e-9;

#[test]
fn normalize_positive_stays_in_half_open_turn() {
    for &x in &[
        -100.0, -TAU, -PI, -1e-18, 0.0, 1.0, PI, TAU, 3.0 * TAU + 0.5, 1e6,
    ] {
        let a = normalize_positive(x);
        assert!((0.0..TAU).contains(&a), "{x} -> {a}");
    }
}

#[test]
fn normalize_positive_is_periodic() {
    for &x in &[-2.5, 0.3, 1.7, 4.0] {
        let base = normalize_positive(x);
        for k in -3..=3 {
            let shifted = normalize_positive(x + TAU * f64::from(k));
            assert!((shifted - base).abs() < EPS, "x={x} k={k}");
        }
    }
}

#[test]
fn normalize_positive_handles_negative_inputs() {
    assert!((normalize_positive(-PI / 2.0) - 1.5 * PI).abs() < EPS);
    assert_eq!(normalize_positive(-TAU), 0.0);
}

#[test]
fn normalize_signed_range_and_reflection() {
    for &x in &[-7.0, -PI, -0.1, 0.0, 0.1, PI, 4.0, 9.0] {
        let s = normalize_signed(x);
        assert!(s > -PI - EPS && s <= PI + EPS, "{x} -> {s}");
        let p = normalize_positive(x);
        let expected = if p > PI { p - TAU } else { p };
        assert_eq!(s, expected);
    }
    assert!((normalize_signed(PI) - PI).abs() < EPS);
    assert!((normalize_signed(-PI) - PI).abs() < EPS);
}

#[test]
fn heading_and_polar_agree() {
    let a = Point::new(10.0, 10.0);
    let b = Point::new(10.0, 20.0);
    let h = heading(a, b);
    assert!((h - PI / 2.0).abs() < EPS);
    let v = polar(h, 10.0);
    assert!((v.x).abs() < EPS);
    assert!((v.y - 10.0).abs() < EPS);
}

#[test]
fn heading_of_coincident_points_is_defined() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(heading(p, p), 0.0);
}
