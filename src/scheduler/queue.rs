use std::collections::VecDeque;
use std::ops::Range;

use crate::waypoint::model::Waypoint;

/// Double-ended queue of live waypoints with a per-entry "already announced" flag.
///
/// Waypoints and flags are kept in lockstep so a window of waypoints can be handed to a mover
/// as a plain slice.
#[derive(Debug, Default)]
pub(crate) struct WaypointQueue {
    items: VecDeque<Waypoint>,
    announced: VecDeque<bool>,
}

impl WaypointQueue {
    pub(crate) fn new(waypoints: Vec<Waypoint>) -> Self {
        let announced = std::iter::repeat_n(false, waypoints.len()).collect();
        Self {
            items: waypoints.into(),
            announced,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get(&self, i: usize) -> &Waypoint {
        &self.items[i]
    }

    pub(crate) fn front(&self) -> Option<&Waypoint> {
        self.items.front()
    }

    /// Contiguous view of `range`.
    pub(crate) fn window(&mut self, range: Range<usize>) -> &[Waypoint] {
        &self.items.make_contiguous()[range]
    }

    /// Flag entry `i` as announced; `true` only the first time.
    pub(crate) fn mark_announced(&mut self, i: usize) -> bool {
        let flag = &mut self.announced[i];
        let first = !*flag;
        *flag = true;
        first
    }

    /// Remove `count` entries starting at `at`, clamped to the queue end.
    pub(crate) fn retire(&mut self, at: usize, count: usize) {
        let end = (at + count).min(self.items.len());
        self.items.drain(at..end);
        self.announced.drain(at..end);
    }
}
