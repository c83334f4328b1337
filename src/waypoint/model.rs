use std::sync::Arc;

use crate::foundation::core::{Point, TimeRange};
use crate::foundation::error::{DanceError, DanceResult};
use crate::foundation::math::heading;

/// Intrinsic position function of a continuous waypoint.
///
/// Implementations are opaque to the scheduler: it only asks for positions inside the
/// waypoint's own time range while the waypoint holds the movement lock.
pub trait PathOracle: std::fmt::Debug + Send + Sync {
    /// Position of the path at `time`.
    fn position_at(&self, time: f64) -> Point;
}

/// Whether a waypoint is a single point or owns its own path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WaypointKind {
    /// Point target; entry and exit tangents are inferred by the mover.
    Point,
    /// Target with an authored path and authored tangents.
    Continuous {
        /// Direction pointing back out of the path's entry, in radians.
        start_angle: f64,
        /// Direction of travel leaving the path's exit, in radians.
        end_angle: f64,
    },
}

/// One timestamped spatial target.
///
/// Positions are the stacked (already transformed) ones; `raw_start_position` keeps the
/// pre-stacking position for the "ignore stacking" same-position rule.
#[derive(Clone, Debug)]
pub struct Waypoint {
    /// Time the cursor must arrive.
    pub start_time: f64,
    /// Time the waypoint is done; equal to `start_time` for point targets.
    pub end_time: f64,
    /// Stacked position at `start_time`.
    pub start_position: Point,
    /// Stacked position at `end_time`.
    pub end_position: Point,
    /// Start position before stacking offsets were applied.
    pub raw_start_position: Point,
    /// Combo group forwarded to the hit observer.
    pub combo_group: u32,
    /// Point or continuous.
    pub kind: WaypointKind,
    path: Option<Arc<dyn PathOracle>>,
}

impl Waypoint {
    /// Instantaneous point target.
    pub fn point(time: f64, position: Point) -> Self {
        Self {
            start_time: time,
            end_time: time,
            start_position: position,
            end_position: position,
            raw_start_position: position,
            combo_group: 0,
            kind: WaypointKind::Point,
            path: None,
        }
    }

    /// Continuous target following `path` over `[start_time, end_time]`.
    pub fn continuous(
        start_time: f64,
        end_time: f64,
        path: Arc<dyn PathOracle>,
        start_angle: f64,
        end_angle: f64,
    ) -> DanceResult<Self> {
        let range = TimeRange::new(start_time, end_time)?;
        if !start_angle.is_finite() || !end_angle.is_finite() {
            return Err(DanceError::validation(
                "continuous waypoint angles must be finite",
            ));
        }
        let start_position = path.position_at(range.start);
        let end_position = path.position_at(range.end);
        Ok(Self {
            start_time,
            end_time,
            start_position,
            end_position,
            raw_start_position: start_position,
            combo_group: 0,
            kind: WaypointKind::Continuous {
                start_angle,
                end_angle,
            },
            path: Some(path),
        })
    }

    /// Continuous target whose authored angles come from the polyline's end segments.
    pub fn from_polyline(path: PolylinePath) -> Self {
        let range = path.time_range();
        let start_angle = path.entry_angle();
        let end_angle = path.exit_angle();
        let start_position = path.position_at(range.start);
        let end_position = path.position_at(range.end);
        Self {
            start_time: range.start,
            end_time: range.end,
            start_position,
            end_position,
            raw_start_position: start_position,
            combo_group: 0,
            kind: WaypointKind::Continuous {
                start_angle,
                end_angle,
            },
            path: Some(Arc::new(path)),
        }
    }

    /// Set the combo group.
    pub fn with_combo_group(mut self, group: u32) -> Self {
        self.combo_group = group;
        self
    }

    /// Set the pre-stacking start position.
    pub fn with_raw_start_position(mut self, raw: Point) -> Self {
        self.raw_start_position = raw;
        self
    }

    /// Return `true` for targets owning an intrinsic path.
    pub fn is_continuous(&self) -> bool {
        matches!(self.kind, WaypointKind::Continuous { .. })
    }

    /// Authored entry tangent, if continuous.
    pub fn start_angle(&self) -> Option<f64> {
        match self.kind {
            WaypointKind::Continuous { start_angle, .. } => Some(start_angle),
            WaypointKind::Point => None,
        }
    }

    /// Authored exit tangent, if continuous.
    pub fn end_angle(&self) -> Option<f64> {
        match self.kind {
            WaypointKind::Continuous { end_angle, .. } => Some(end_angle),
            WaypointKind::Point => None,
        }
    }

    /// `[start_time, end_time]`.
    pub fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.start_time,
            end: self.end_time,
        }
    }

    /// Position of the waypoint's own path at `time`, clamped to its time range.
    pub fn position_at(&self, time: f64) -> Point {
        let range = self.time_range();
        let t = time.clamp(range.start, range.end);
        match &self.path {
            Some(path) => path.position_at(t),
            None => self
                .start_position
                .lerp(self.end_position, range.progress(t)),
        }
    }
}

/// Stacked start positions are equal.
pub fn same_stacked_position(a: &Waypoint, b: &Waypoint) -> bool {
    a.start_position == b.start_position
}

/// Pre-stacking start positions are equal.
pub fn same_raw_position(a: &Waypoint, b: &Waypoint) -> bool {
    a.raw_start_position == b.raw_start_position
}

/// "Same position" rule shared by the exit-tangent lookahead and bounce detection.
///
/// With `skip_stack_angles`, waypoints that only differ by their stacking offset also count as
/// the same position.
pub fn is_same_position(a: &Waypoint, b: &Waypoint, skip_stack_angles: bool) -> bool {
    same_stacked_position(a, b) || (skip_stack_angles && same_raw_position(a, b))
}

/// `cur` starts within `distance_epsilon` of where `prev` ended, no later than `time_epsilon`
/// after it.
pub fn within_dedup_tolerance(
    prev: &Waypoint,
    cur: &Waypoint,
    distance_epsilon: f64,
    time_epsilon: f64,
) -> bool {
    prev.end_position.distance(cur.start_position) <= distance_epsilon
        && cur.start_time - prev.end_time <= time_epsilon
}

/// Timed polyline used as the intrinsic path of continuous waypoints loaded from JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct PolylinePath {
    keys: Vec<(f64, Point)>,
}

impl PolylinePath {
    /// Build from `(time, position)` keys sorted by time.
    pub fn new(keys: Vec<(f64, Point)>) -> DanceResult<Self> {
        if keys.is_empty() {
            return Err(DanceError::validation("polyline path needs at least one key"));
        }
        if keys
            .iter()
            .any(|(t, p)| !t.is_finite() || !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(DanceError::validation("polyline path keys must be finite"));
        }
        if !keys.windows(2).all(|w| w[0].0 <= w[1].0) {
            return Err(DanceError::validation(
                "polyline path keys must be sorted by time",
            ));
        }
        Ok(Self { keys })
    }

    /// Time span covered by the keys.
    pub fn time_range(&self) -> TimeRange {
        TimeRange {
            start: self.keys[0].0,
            end: self.keys[self.keys.len() - 1].0,
        }
    }

    /// Points back out of the entry: from the first distinct interior key to the first key.
    pub fn entry_angle(&self) -> f64 {
        let first = self.keys[0].1;
        self.keys
            .iter()
            .map(|(_, p)| *p)
            .find(|p| *p != first)
            .map_or(0.0, |p| heading(p, first))
    }

    /// Direction of travel through the last distinct segment.
    pub fn exit_angle(&self) -> f64 {
        let last = self.keys[self.keys.len() - 1].1;
        self.keys
            .iter()
            .rev()
            .map(|(_, p)| *p)
            .find(|p| *p != last)
            .map_or(0.0, |p| heading(p, last))
    }
}

impl PathOracle for PolylinePath {
    fn position_at(&self, time: f64) -> Point {
        let idx = self.keys.partition_point(|(t, _)| *t <= time);
        if idx == 0 {
            return self.keys[0].1;
        }
        if idx >= self.keys.len() {
            return self.keys[self.keys.len() - 1].1;
        }

        let (ta, a) = self.keys[idx - 1];
        let (tb, b) = self.keys[idx];
        let span = tb - ta;
        if span <= 0.0 {
            return a;
        }
        a.lerp(b, (time - ta) / span)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/waypoint/model.rs"]
mod tests;
