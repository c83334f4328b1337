use crate::foundation::error::{DanceError, DanceResult};

pub use kurbo::{CubicBez, Point, Rect, Vec2};

/// Closed time interval `[start, end]` in playback time units (milliseconds by convention).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeRange {
    /// Inclusive range start.
    pub start: f64,
    /// Inclusive range end.
    pub end: f64,
}

impl TimeRange {
    /// Create a validated range with finite bounds and `start <= end`.
    pub fn new(start: f64, end: f64) -> DanceResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(DanceError::validation("TimeRange bounds must be finite"));
        }
        if start > end {
            return Err(DanceError::validation("TimeRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Zero-length range at `t`.
    pub fn instant(t: f64) -> Self {
        Self { start: t, end: t }
    }

    /// Length of the range.
    pub fn duration(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `start == end`.
    pub fn is_degenerate(self) -> bool {
        self.end <= self.start
    }

    /// Return `true` when `t` is inside `[start, end]`.
    pub fn contains(self, t: f64) -> bool {
        self.start <= t && t <= self.end
    }

    /// Map `t` to a curve parameter clamped into `[0, 1]`.
    ///
    /// Degenerate ranges never divide: they report `0` up to and including the instant and `1`
    /// strictly after it.
    pub fn progress(self, t: f64) -> f64 {
        if self.is_degenerate() {
            return if t > self.end { 1.0 } else { 0.0 };
        }
        ((t - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
