use crate::config::settings::DedupConfig;
use crate::foundation::error::{DanceError, DanceResult};
use crate::waypoint::model::{Waypoint, within_dedup_tolerance};

/// Reject waypoint lists the scheduler cannot play.
pub(crate) fn validate_waypoints(waypoints: &[Waypoint]) -> DanceResult<()> {
    for (i, w) in waypoints.iter().enumerate() {
        if !w.start_time.is_finite() || !w.end_time.is_finite() {
            return Err(DanceError::validation(format!(
                "waypoint #{i} has non-finite times"
            )));
        }
        if w.end_time < w.start_time {
            return Err(DanceError::validation(format!(
                "waypoint #{i} ends before it starts"
            )));
        }
    }
    if let Some(i) = waypoints
        .windows(2)
        .position(|w| w[1].start_time < w[0].start_time)
    {
        return Err(DanceError::validation(format!(
            "waypoints must be sorted by start time (#{} starts before #{i})",
            i + 1
        )));
    }
    Ok(())
}

/// Drop point waypoints that sit on top of a neighbour in both space and time.
///
/// Each point is compared with both its current neighbours. After a removal the scan moves on
/// without re-checking the entry that slid into place, so a cluster never collapses entirely.
pub(crate) fn dedup_points(mut waypoints: Vec<Waypoint>, cfg: &DedupConfig) -> Vec<Waypoint> {
    let within = |a: &Waypoint, b: &Waypoint| {
        within_dedup_tolerance(a, b, cfg.distance_epsilon, cfg.time_epsilon)
    };

    let mut removed = 0usize;
    let mut i = 0;
    while i < waypoints.len() {
        if !waypoints[i].is_continuous() {
            let near_prev = i > 0 && within(&waypoints[i - 1], &waypoints[i]);
            let near_next = i + 1 < waypoints.len() && within(&waypoints[i], &waypoints[i + 1]);
            if near_prev || near_next {
                waypoints.remove(i);
                removed += 1;
            }
        }
        i += 1;
    }

    if removed > 0 {
        tracing::debug!(
            removed,
            remaining = waypoints.len(),
            "dropped duplicate waypoints"
        );
    }
    waypoints
}

#[cfg(test)]
#[path = "../../tests/unit/scheduler/preprocess.rs"]
mod tests;
