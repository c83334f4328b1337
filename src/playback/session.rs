use serde::Serialize;

use crate::config::settings::DanceConfig;
use crate::cursor::Cursor;
use crate::foundation::core::{Point, TimeRange};
use crate::foundation::error::{DanceError, DanceResult};
use crate::mover::momentum::SegmentDebug;
use crate::scheduler::HitObserver;
use crate::scheduler::runner::Scheduler;
use crate::waypoint::model::Waypoint;

/// Upper bound on the frames a single [`DanceSession::sample`] call may produce.
pub const MAX_SAMPLED_FRAMES: usize = 10_000_000;

/// Combo groups announced by the scheduler, in announcement order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HitLog {
    groups: Vec<u32>,
}

impl HitLog {
    /// Announced combo groups.
    pub fn groups(&self) -> &[u32] {
        &self.groups
    }

    /// Number of announcements.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// `true` before the first announcement.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl HitObserver for HitLog {
    fn on_hit(&mut self, combo_group: u32) {
        self.groups.push(combo_group);
    }
}

/// Cursor state after one sampled frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CursorFrame {
    /// Playback time of the frame.
    pub time: f64,
    /// Displayed position.
    pub position: Point,
    /// Position as set by the scheduler.
    pub raw_position: Point,
}

/// One cursor's playback: scheduler, mover and cursor kept together.
#[derive(Debug)]
pub struct DanceSession {
    id: usize,
    scheduler: Scheduler,
    cursor: Cursor,
    hits: HitLog,
}

impl DanceSession {
    /// Build playback of `waypoints` for cursor `id`.
    #[tracing::instrument(skip(waypoints, config), fields(count = waypoints.len()))]
    pub fn new(waypoints: Vec<Waypoint>, config: &DanceConfig, id: usize) -> DanceResult<Self> {
        let mut cursor = Cursor::new(config.cursor.clone());
        let scheduler = Scheduler::new(waypoints, config, id, &mut cursor)?;
        Ok(Self {
            id,
            scheduler,
            cursor,
            hits: HitLog::default(),
        })
    }

    /// Cursor id this session plays for.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Advance to `time` (never earlier than the previous call).
    pub fn update(&mut self, time: f64) -> DanceResult<CursorFrame> {
        self.scheduler
            .update(time, &mut self.cursor, &mut self.hits)?;
        Ok(self.frame(time))
    }

    fn frame(&self, time: f64) -> CursorFrame {
        CursorFrame {
            time,
            position: self.cursor.position(),
            raw_position: self.cursor.raw_position(),
        }
    }

    /// Drive playback at `fps` frames per second over `[start, end]`, times in milliseconds.
    ///
    /// Frame `k` is sampled at `start + k * 1000 / fps`; the last frame is the latest one not
    /// after `end`.
    pub fn sample(&mut self, fps: f64, start: f64, end: f64) -> DanceResult<Vec<CursorFrame>> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(DanceError::validation(format!(
                "sample fps must be a finite value > 0 (got {fps})"
            )));
        }
        let range = TimeRange::new(start, end)?;
        let step = 1000.0 / fps;
        let count = (range.duration() / step).floor() + 1.0;
        if !count.is_finite() || count > MAX_SAMPLED_FRAMES as f64 {
            return Err(DanceError::validation(format!(
                "sampling {} ms at {fps} fps needs more than {MAX_SAMPLED_FRAMES} frames",
                range.duration()
            )));
        }
        let count = count as usize;

        let mut frames = Vec::with_capacity(count.min(1 << 16));
        for k in 0..count {
            let t = (range.start + k as f64 * step).min(range.end);
            frames.push(self.update(t)?);
        }
        tracing::debug!(
            id = self.id,
            frames = frames.len(),
            hits = self.hits.len(),
            "sampled"
        );
        Ok(frames)
    }

    /// Announced combo groups so far.
    pub fn hits(&self) -> &HitLog {
        &self.hits
    }

    /// The moved cursor.
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Underlying scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Diagnostics of the segment the mover built last.
    pub fn debug_snapshot(&self) -> Option<SegmentDebug> {
        self.scheduler.mover().debug_snapshot()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/session.rs"]
mod tests;
