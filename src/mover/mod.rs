//! Path synthesizers ("movers").
//!
//! A mover turns a window of upcoming waypoints into one timed path segment. The scheduler only
//! talks to the [`Mover`] capability; [`MoverKind`] selects the implementation from config.

pub(crate) mod momentum;
pub(crate) mod segment;

use std::fmt;
use std::str::FromStr;

use crate::config::settings::DanceConfig;
use crate::foundation::core::{Point, TimeRange};
use crate::foundation::error::{DanceError, DanceResult};
use crate::mover::momentum::{MomentumMover, SegmentDebug};
use crate::waypoint::model::Waypoint;

/// Capability shared by every path synthesis algorithm.
///
/// History carried between [`Mover::consume_window`] calls is only meaningful for strictly
/// increasing segment times; [`Mover::reset`] discards it.
pub trait Mover: Send {
    /// Select the configuration profile for cursor `id` and clear all history.
    fn reset(&mut self, config: &DanceConfig, id: usize) -> DanceResult<()>;

    /// Build the next segment from `window` (at least two entries).
    ///
    /// The window is only read: entries past the consumed ones may be inspected for lookahead.
    /// Returns how many leading entries the segment consumed.
    fn consume_window(&mut self, window: &[Waypoint]) -> DanceResult<usize>;

    /// Position on the last produced segment, with `time` clamped into its range.
    fn position_at(&self, time: f64) -> Point;

    /// Time range covered by the last produced segment.
    fn valid_time_range(&self) -> TimeRange;

    /// Position while `waypoint` owns the cursor (movement lock).
    fn waypoint_position(&self, time: f64, waypoint: &Waypoint) -> Point {
        waypoint.position_at(time)
    }

    /// Diagnostics about the last produced segment, when the algorithm records any.
    fn debug_snapshot(&self) -> Option<SegmentDebug> {
        None
    }
}

/// Available path synthesis algorithms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoverKind {
    /// Momentum-style cubic Bézier mover.
    #[default]
    Momentum,
}

impl MoverKind {
    /// Construct a fresh, not yet reset, mover of this kind.
    pub fn create(self) -> Box<dyn Mover> {
        match self {
            Self::Momentum => Box::new(MomentumMover::new()),
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Momentum => "momentum",
        }
    }
}

impl fmt::Display for MoverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoverKind {
    type Err = DanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "momentum" => Ok(Self::Momentum),
            other => Err(DanceError::config(format!("unknown mover '{other}'"))),
        }
    }
}

/// Build and reset the configured mover for cursor `id`.
pub fn create_mover(config: &DanceConfig, id: usize) -> DanceResult<Box<dyn Mover>> {
    let mut mover = config.mover.create();
    mover.reset(config, id)?;
    Ok(mover)
}
