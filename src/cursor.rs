//! The moved cursor: keeps the raw scheduler position next to the displayed one.

use crate::config::settings::CursorConfig;
use crate::foundation::core::{Point, Rect};
use crate::scheduler::MovedTarget;

/// Cursor driven by a [`crate::Scheduler`].
#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    config: CursorConfig,
    raw_position: Point,
    position: Point,
}

impl Cursor {
    /// Cursor at the origin using `config` for its display transform.
    pub fn new(config: CursorConfig) -> Self {
        Self {
            config,
            raw_position: Point::ORIGIN,
            position: Point::ORIGIN,
        }
    }

    /// Position exactly as the scheduler set it.
    pub fn raw_position(&self) -> Point {
        self.raw_position
    }

    /// Position after inversion and edge bouncing.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Display transform in use.
    pub fn config(&self) -> &CursorConfig {
        &self.config
    }

    fn display(&self, p: Point) -> Point {
        let field: Rect = self.config.playfield;
        let mut v = p;
        if self.config.invert_display {
            v.y = field.y1 - (v.y - field.y0) + field.y0;
        }
        if self.config.bounce_on_edges {
            v.x = fold_axis(v.x, field.x0, field.x1);
            v.y = fold_axis(v.y, field.y0, field.y1);
        }
        v
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(CursorConfig::default())
    }
}

impl MovedTarget for Cursor {
    fn set_position(&mut self, position: Point) {
        self.raw_position = position;
        self.position = self.display(position);
    }
}

/// Reflect `v` back into `[lo, hi]` as if it bounced off the edges.
///
/// Values below `lo` are mirrored once; values past `hi` bounce back and forth as often as the
/// overshoot needs.
fn fold_axis(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi - lo;
    let mut v = v;
    if v < lo {
        v = lo - (v - lo);
    }
    if v > hi && span > 0.0 {
        let d = v - lo;
        let laps = (d / span).floor();
        let mut r = d.rem_euclid(span);
        if laps.rem_euclid(2.0) != 0.0 {
            r = span - r;
        }
        v = r + lo;
    }
    v
}

#[cfg(test)]
#[path = "../tests/unit/cursor.rs"]
mod tests;
