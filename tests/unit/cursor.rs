use super::*;

fn bouncing() -> Cursor {
    Cursor::new(CursorConfig {
        bounce_on_edges: true,
        ..CursorConfig::default()
    })
}

#[test]
fn plain_cursor_passes_positions_through() {
    let mut c = Cursor::default();
    c.set_position(Point::new(-20.0, 900.0));
    assert_eq!(c.raw_position(), Point::new(-20.0, 900.0));
    assert_eq!(c.position(), Point::new(-20.0, 900.0));
}

#[test]
fn inversion_mirrors_vertically_within_playfield() {
    let mut c = Cursor::new(CursorConfig {
        invert_display: true,
        ..CursorConfig::default()
    });
    c.set_position(Point::new(10.0, 84.0));
    assert_eq!(c.position(), Point::new(10.0, 300.0));
    assert_eq!(c.raw_position(), Point::new(10.0, 84.0));
}

#[test]
fn bounce_reflects_below_minimum() {
    let mut c = bouncing();
    c.set_position(Point::new(-30.0, -4.0));
    assert_eq!(c.position(), Point::new(30.0, 4.0));
}

#[test]
fn bounce_folds_overshoot_by_parity() {
    let mut c = bouncing();
    // One lap past the right edge comes back from it.
    c.set_position(Point::new(532.0, 100.0));
    assert_eq!(c.position(), Point::new(492.0, 100.0));
    // Two laps continue from the left edge again.
    c.set_position(Point::new(1034.0, 800.0));
    assert_eq!(c.position(), Point::new(10.0, 32.0));
}

#[test]
fn fold_axis_keeps_inside_values() {
    assert_eq!(fold_axis(0.0, 0.0, 10.0), 0.0);
    assert_eq!(fold_axis(10.0, 0.0, 10.0), 10.0);
    assert_eq!(fold_axis(7.5, 0.0, 10.0), 7.5);
}
