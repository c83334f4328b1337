use crate::config::settings::DanceConfig;
use crate::foundation::error::{DanceError, DanceResult};
use crate::mover::{Mover, create_mover};
use crate::scheduler::preprocess::{dedup_points, validate_waypoints};
use crate::scheduler::queue::WaypointQueue;
use crate::scheduler::{HitObserver, MovedTarget};
use crate::waypoint::model::Waypoint;

/// Walks the waypoint queue as playback time advances.
///
/// While a waypoint is active the target follows the waypoint itself (movement lock). Between
/// waypoints the target follows the segment the mover built for that gap. Finished waypoints
/// are retired from the queue, and each retirement hands the mover the window of upcoming
/// waypoints so it can plan the next segment.
pub struct Scheduler {
    queue: WaypointQueue,
    mover: Box<dyn Mover>,
    last_time: f64,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("queued", &self.queue.len())
            .field("last_time", &self.last_time)
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    /// Prepare playback of `waypoints` for cursor `id`.
    ///
    /// Point duplicates are dropped, the configured anchor is prepended and the first segment
    /// (anchor to first waypoint) is built right away. The target is parked on the anchor.
    #[tracing::instrument(
        level = "debug",
        skip(waypoints, config, target),
        fields(count = waypoints.len())
    )]
    pub fn new(
        waypoints: Vec<Waypoint>,
        config: &DanceConfig,
        id: usize,
        target: &mut dyn MovedTarget,
    ) -> DanceResult<Self> {
        config.validate()?;
        validate_waypoints(&waypoints)?;

        let anchor = &config.anchor;
        if let Some(first) = waypoints.first()
            && anchor.time >= first.start_time
        {
            return Err(DanceError::config(format!(
                "anchor time {} must precede the first waypoint ({})",
                anchor.time, first.start_time
            )));
        }

        let mut list = Vec::with_capacity(waypoints.len() + 1);
        list.push(Waypoint::point(anchor.time, anchor.position));
        list.extend(dedup_points(waypoints, &config.dedup));

        let mover = create_mover(config, id)?;
        let mut scheduler = Self {
            queue: WaypointQueue::new(list),
            mover,
            last_time: f64::NEG_INFINITY,
        };

        // The anchor is synthetic and never reaches the hit observer.
        scheduler.queue.mark_announced(0);
        target.set_position(anchor.position);
        if scheduler.queue.len() > 1 {
            let len = scheduler.queue.len();
            scheduler.consume(0, len)?;
        }
        tracing::debug!(queued = scheduler.queue.len(), "scheduler ready");
        Ok(scheduler)
    }

    /// Advance playback to `time`, moving `target` and announcing waypoints to `hits`.
    ///
    /// Time must never go backwards; a failed update leaves the previous time in place.
    pub fn update(
        &mut self,
        time: f64,
        target: &mut dyn MovedTarget,
        hits: &mut dyn HitObserver,
    ) -> DanceResult<()> {
        if !time.is_finite() {
            return Err(DanceError::schedule(format!(
                "update time must be finite (got {time})"
            )));
        }
        if time < self.last_time {
            return Err(DanceError::schedule(format!(
                "update time went backwards ({time} < {})",
                self.last_time
            )));
        }

        if !self.queue.is_empty() {
            let mut use_mover = true;
            let mut last_end_time = f64::NEG_INFINITY;

            let mut i = 0;
            while i < self.queue.len() {
                let (start, end, group) = {
                    let g = self.queue.get(i);
                    (g.start_time, g.end_time, g.combo_group)
                };
                if start > time {
                    break;
                }

                // Waypoints starting inside a longer, still covering one are never announced.
                if last_end_time <= start && self.queue.mark_announced(i) {
                    hits.on_hit(group);
                }
                last_end_time = last_end_time.max(end);

                if self.last_time <= start || time <= end {
                    if self.last_time <= start {
                        use_mover = false;
                    }
                    target.set_position(self.mover.waypoint_position(time, self.queue.get(i)));
                }

                if time > end {
                    let mut upper = self.queue.len();
                    for j in i..self.queue.len() {
                        if self.queue.get(j).end_time >= last_end_time {
                            break;
                        }
                        upper = j + 1;
                    }
                    if upper - i > 1 {
                        self.consume(i, upper)?;
                    } else {
                        self.queue.retire(i, 1);
                    }
                    continue;
                }

                i += 1;
            }

            if use_mover && self.mover.valid_time_range().end >= time {
                target.set_position(self.mover.position_at(time));
            }
        }

        self.last_time = time;
        Ok(())
    }

    /// Hand `start..upper` to the mover and retire all but the last consumed entry.
    fn consume(&mut self, start: usize, upper: usize) -> DanceResult<()> {
        let consumed = self.mover.consume_window(self.queue.window(start..upper))?;
        self.queue.retire(start, consumed.saturating_sub(1).max(1));
        Ok(())
    }

    /// Number of waypoints still queued.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Earliest queued waypoint.
    pub fn next_waypoint(&self) -> Option<&Waypoint> {
        self.queue.front()
    }

    /// Time of the last successful update.
    pub fn last_time(&self) -> f64 {
        self.last_time
    }

    /// Active path synthesizer.
    pub fn mover(&self) -> &dyn Mover {
        self.mover.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/runner.rs"]
mod tests;
