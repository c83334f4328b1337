//! Momentum mover.
//!
//! Each segment is a cubic Bézier whose entry tangent continues the previous segment's exit
//! control point and whose exit tangent is aimed by looking up to a few waypoints ahead. Stream
//! detection, angular zones and a bounce rule then reshape the exit tangent and the control
//! distances.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::config::settings::{DanceConfig, MomentumConfig};
use crate::foundation::core::{CubicBez, Point, TimeRange};
use crate::foundation::error::{DanceError, DanceResult};
use crate::foundation::math::{heading, normalize_positive, normalize_signed, polar};
use crate::mover::Mover;
use crate::mover::segment::PathSegment;
use crate::waypoint::model::{Waypoint, is_same_position};

/// Which rule shaped the exit tangent of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TangentZone {
    /// Stream arc: exit tangent perpendicular to the chord.
    Stream,
    /// Restriction arc; `inside` tells which configured offset was used.
    Restriction {
        /// `true` when the "add" offset was used.
        inside: bool,
    },
    /// Exit tangent blended towards the chord.
    Interpolated,
    /// Lookahead tangent used unchanged.
    Lookahead,
    /// Coincident targets: tangent reflected through the shared point.
    Bounce,
}

/// Snapshot of the last segment built by [`MomentumMover`], for debug overlays.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SegmentDebug {
    /// Control points `p0..p3`.
    pub control_points: [Point; 4],
    /// Exit angle found by the lookahead, before any zone override.
    pub lookahead_angle: f64,
    /// Final entry angle.
    pub entry_angle: f64,
    /// Final exit angle.
    pub exit_angle: f64,
    /// Rule that shaped the exit tangent.
    pub zone: TangentZone,
    /// Stream classification of this segment.
    pub stream: bool,
    /// Validity range of the segment.
    pub range: TimeRange,
}

/// Momentum-style multi-point mover.
#[derive(Clone, Debug)]
pub struct MomentumMover {
    config: MomentumConfig,
    segment: Option<PathSegment>,
    last_exit: Point,
    first: bool,
    was_stream: bool,
    debug: Option<SegmentDebug>,
}

impl Default for MomentumMover {
    fn default() -> Self {
        Self::new()
    }
}

impl MomentumMover {
    /// Mover with the default profile and empty history.
    pub fn new() -> Self {
        Self::with_config(MomentumConfig::default())
    }

    /// Mover with an explicit profile and empty history.
    pub fn with_config(config: MomentumConfig) -> Self {
        Self {
            config,
            segment: None,
            last_exit: Point::ORIGIN,
            first: true,
            was_stream: false,
            debug: None,
        }
    }

    /// Active profile.
    pub fn config(&self) -> &MomentumConfig {
        &self.config
    }

    /// Exit control point of the last non-bounce segment.
    pub fn last_exit_point(&self) -> Point {
        self.last_exit
    }

    /// Stream classification of the previous call.
    pub fn was_stream(&self) -> bool {
        self.was_stream
    }

    /// Last produced segment.
    pub fn segment(&self) -> Option<&PathSegment> {
        self.segment.as_ref()
    }

    fn clear_history(&mut self) {
        self.segment = None;
        self.last_exit = Point::ORIGIN;
        self.first = true;
        self.was_stream = false;
        self.debug = None;
    }

    /// Scan forward from the arrival waypoint for a meaningful exit direction.
    ///
    /// Returns the angle and whether it was authored by a continuous waypoint.
    fn lookahead_exit_angle(&self, window: &[Waypoint], start_pos: Point) -> (f64, bool) {
        let ms = &self.config;
        let last_idx = window.len() - 1;

        for i in 1..window.len() {
            let o = &window[i];
            if let Some(angle) = o.start_angle() {
                return (angle, true);
            }
            if i == last_idx {
                break;
            }

            let o2 = &window[i + 1];
            if is_same_position(o, o2, ms.skip_stack_angles) {
                continue;
            }

            let pos = o.start_position;
            let mut aim = o2.start_position;
            if let Some(authored) = o2.start_angle()
                && ms.slider_predict
            {
                aim += polar(authored, pos.distance(aim) * ms.distance_mult_end);
            }
            return (heading(aim, pos), false);
        }

        (heading(start_pos, self.last_exit), false)
    }
}

impl Mover for MomentumMover {
    fn reset(&mut self, config: &DanceConfig, id: usize) -> DanceResult<()> {
        self.config = config.momentum_for(id)?.clone();
        self.clear_history();
        Ok(())
    }

    fn consume_window(&mut self, window: &[Waypoint]) -> DanceResult<usize> {
        if window.len() < 2 {
            return Err(DanceError::schedule(format!(
                "momentum mover needs at least two waypoints, got {}",
                window.len()
            )));
        }

        let ms = self.config.clone();
        let start = &window[0];
        let end = &window[1];
        let next = window.get(2);
        let genuine_next = next.is_some_and(|n| !n.is_continuous());

        let start_pos = start.end_position;
        let end_pos = end.start_position;

        let mut dst = start_pos.distance(end_pos);
        let mut mult = ms.distance_mult;
        let mut mult_end = ms.distance_mult_end;

        let (lookahead, from_continuous) = self.lookahead_exit_angle(window, start_pos);
        let mut a2 = lookahead;

        let (sq1, sq2) = match next {
            Some(n) => (
                (end_pos - start_pos).hypot2(),
                (n.start_position - end_pos).hypot2(),
            ),
            None => (0.0, 0.0),
        };

        let band = ms.stream_min_distance.powi(2)..=ms.stream_max_distance.powi(2);
        let stream = ms.stream_restrict
            && genuine_next
            && !from_continuous
            && ((band.contains(&sq1) && self.was_stream) || band.contains(&sq2));
        self.was_stream = stream;

        let mut a1 = match start.end_angle() {
            Some(angle) => angle,
            None if self.first => a2 + PI,
            None => heading(self.last_exit, start_pos),
        };

        // Authored tangents belong to their continuous waypoints and are never overridden.
        let free_tangent = !from_continuous && !start.is_continuous();
        let toward_start = heading(end_pos, start_pos);
        let toward_end = heading(start_pos, end_pos);
        let ac = a2 - toward_end;

        let restrict_area = ms.restrict_area.to_radians();
        let stream_area = ms.stream_area.to_radians();

        let mut zone = TangentZone::Lookahead;
        if stream_area > 0.0
            && stream
            && normalize_positive(ac) < normalize_positive(TAU - stream_area)
        {
            a2 = if normalize_positive(a1 - toward_start) > PI {
                toward_start - FRAC_PI_2
            } else {
                toward_start + FRAC_PI_2
            };
            mult = ms.stream_mult;
            mult_end = ms.stream_mult_end;
            zone = TangentZone::Stream;
        } else if free_tangent
            && restrict_area > 0.0
            && normalize_signed(ac).abs() < restrict_area
        {
            let inside = (normalize_positive(a2 - toward_end) < ms.restrict_angle.to_radians())
                != ms.restrict_invert;
            a2 = if inside {
                toward_end + ms.restrict_angle_add.to_radians()
            } else {
                toward_end - ms.restrict_angle_sub.to_radians()
            };
            zone = TangentZone::Restriction { inside };
        } else if genuine_next && free_tangent && ms.interpolate_angles {
            let total = sq1 + sq2;
            let r = if total > 0.0 {
                if ms.invert_angle_interpolation {
                    sq1 / total
                } else {
                    sq2 / total
                }
            } else {
                0.0
            };
            a2 = toward_start + r * normalize_signed(a2 - toward_start);
            mult = ms.distance_mult_out;
            mult_end = ms.distance_mult_out_end;
            zone = TangentZone::Interpolated;
        }

        // An arrival overlapping the departure collapses to an instant at the departure's end.
        let range = TimeRange {
            start: start.end_time,
            end: end.start_time.max(start.end_time),
        };

        let gap = range.duration();
        if ms.duration_trigger > 0.0 && gap >= ms.duration_trigger {
            mult *= ms.duration_mult * (gap / ms.duration_trigger);
        }

        let bounce = ms.equal_pos_bounce > 0.0
            && !end.is_continuous()
            && is_same_position(end, start, ms.skip_stack_angles);
        if bounce {
            a1 = heading(self.last_exit, start_pos);
            a2 = a1 + PI;
            dst = self.last_exit.distance(start_pos);
            mult = ms.equal_pos_bounce;
            mult_end = ms.equal_pos_bounce;
            zone = TangentZone::Bounce;
        }

        let p1 = start_pos + polar(a1, dst * mult);
        let p2 = end_pos + polar(a2, dst * mult_end);
        let segment = PathSegment::new(CubicBez::new(start_pos, p1, p2, end_pos), range);
        self.segment = Some(segment);

        // A reflection carries no direction of its own: keep the previous exit point.
        if !bounce {
            self.last_exit = p2;
        }
        self.first = false;

        tracing::trace!(?zone, stream, start = range.start, end = range.end, "momentum segment");
        self.debug = Some(SegmentDebug {
            control_points: [start_pos, p1, p2, end_pos],
            lookahead_angle: lookahead,
            entry_angle: a1,
            exit_angle: a2,
            zone,
            stream,
            range,
        });

        Ok(2)
    }

    fn position_at(&self, time: f64) -> Point {
        match &self.segment {
            Some(segment) => segment.position_at(time),
            None => self.last_exit,
        }
    }

    fn valid_time_range(&self) -> TimeRange {
        match &self.segment {
            Some(segment) => segment.range(),
            None => TimeRange::instant(f64::NEG_INFINITY),
        }
    }

    fn debug_snapshot(&self) -> Option<SegmentDebug> {
        self.debug
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mover/momentum.rs"]
mod tests;
