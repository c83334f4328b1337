//! Waypoint scheduling: owns the live queue and drives a mover and a cursor from playback time.

pub(crate) mod preprocess;
pub(crate) mod queue;
pub(crate) mod runner;

use crate::foundation::core::Point;

/// Anything the scheduler moves around.
pub trait MovedTarget {
    /// Place the target at `position`.
    fn set_position(&mut self, position: Point);
}

/// Observer told about each waypoint the instant it starts.
pub trait HitObserver {
    /// `combo_group` of the waypoint that just started.
    fn on_hit(&mut self, combo_group: u32);
}

impl HitObserver for () {
    fn on_hit(&mut self, _combo_group: u32) {}
}
