use kurbo::ParamCurve;

use crate::foundation::core::{CubicBez, Point, TimeRange};

/// Cubic Bézier path valid over a closed time range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
    curve: CubicBez,
    range: TimeRange,
}

impl PathSegment {
    /// Segment through `curve` spanning `range`.
    pub fn new(curve: CubicBez, range: TimeRange) -> Self {
        Self { curve, range }
    }

    /// The underlying curve.
    pub fn curve(&self) -> CubicBez {
        self.curve
    }

    /// Validity interval.
    pub fn range(&self) -> TimeRange {
        self.range
    }

    /// Curve position at `time`, clamped into the validity interval.
    ///
    /// The endpoints are returned verbatim so that `position_at(range.start) == p0` and
    /// `position_at(range.end) == p3` hold exactly.
    pub fn position_at(&self, time: f64) -> Point {
        let u = self.range.progress(time);
        if u <= 0.0 {
            self.curve.p0
        } else if u >= 1.0 {
            self.curve.p3
        } else {
            self.curve.eval(u)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mover/segment.rs"]
mod tests;
