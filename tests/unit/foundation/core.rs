use super::*;

#[test]
fn time_range_rejects_inverted_and_non_finite_bounds() {
    assert!(TimeRange::new(10.0, 5.0).is_err());
    assert!(TimeRange::new(f64::NAN, 5.0).is_err());
    assert!(TimeRange::new(0.0, f64::INFINITY).is_err());
    assert!(TimeRange::new(5.0, 5.0).is_ok());
}

#[test]
fn progress_clamps_outside_the_range() {
    let r = TimeRange::new(100.0, 200.0).unwrap();
    assert_eq!(r.progress(50.0), 0.0);
    assert_eq!(r.progress(100.0), 0.0);
    assert_eq!(r.progress(150.0), 0.5);
    assert_eq!(r.progress(200.0), 1.0);
    assert_eq!(r.progress(250.0), 1.0);
}

#[test]
fn degenerate_progress_never_divides() {
    let r = TimeRange::instant(42.0);
    assert!(r.is_degenerate());
    assert_eq!(r.progress(41.0), 0.0);
    assert_eq!(r.progress(42.0), 0.0);
    assert_eq!(r.progress(43.0), 1.0);
    assert!(r.contains(42.0));
    assert!(!r.contains(42.5));
}
