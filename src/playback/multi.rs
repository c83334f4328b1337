use rayon::prelude::*;
use serde::Serialize;

use crate::config::settings::DanceConfig;
use crate::foundation::error::{DanceError, DanceResult};
use crate::playback::session::{CursorFrame, DanceSession};
use crate::waypoint::model::Waypoint;

/// How [`play_cursors`] spreads cursors over threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackThreading {
    /// Play cursors on a rayon pool instead of one after another.
    pub parallel: bool,
    /// Pool size; `None` lets rayon decide.
    pub threads: Option<usize>,
}

/// Sampled playback of one cursor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CursorTrack {
    /// Cursor id (selects the momentum profile).
    pub id: usize,
    /// Sampled frames.
    pub frames: Vec<CursorFrame>,
    /// Announced combo groups.
    pub hits: Vec<u32>,
}

/// Play the same waypoints for `cursors` independent cursors and sample each one.
///
/// Cursor `id` uses momentum profile `id % profiles`. Output is ordered by id whatever the
/// threading.
#[tracing::instrument(skip(waypoints, config, threading), fields(count = waypoints.len()))]
pub fn play_cursors(
    waypoints: &[Waypoint],
    config: &DanceConfig,
    cursors: usize,
    fps: f64,
    start: f64,
    end: f64,
    threading: &PlaybackThreading,
) -> DanceResult<Vec<CursorTrack>> {
    if cursors == 0 {
        return Err(DanceError::validation("cursor count must be >= 1"));
    }

    let play_one = |id: usize| -> DanceResult<CursorTrack> {
        let mut session = DanceSession::new(waypoints.to_vec(), config, id)?;
        let frames = session.sample(fps, start, end)?;
        Ok(CursorTrack {
            id,
            frames,
            hits: session.hits().groups().to_vec(),
        })
    };

    if !threading.parallel || cursors == 1 {
        return (0..cursors).map(play_one).collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| (0..cursors).into_par_iter().map(play_one).collect())
}

fn build_thread_pool(threads: Option<usize>) -> DanceResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DanceError::validation(
            "playback threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DanceError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/playback/multi.rs"]
mod tests;
