//! Automated cursor choreography.
//!
//! Given a time-ordered list of [`Waypoint`]s, a [`Scheduler`] moves a [`Cursor`] so it sits on
//! every waypoint exactly while that waypoint is active, and follows a smooth cubic path
//! synthesized by a [`Mover`] in between. [`MomentumMover`] is the built-in synthesizer: it keeps
//! the cursor's momentum across segments and looks a few waypoints ahead to pick exit tangents.
//!
//! [`DanceSession`] bundles one scheduler, mover and cursor for frame-driven playback, and
//! [`play_cursors`] runs several independent cursors in parallel.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod cursor;
mod foundation;
mod mover;
mod playback;
mod scheduler;
mod waypoint;

pub use config::settings::{AnchorConfig, CursorConfig, DanceConfig, DedupConfig, MomentumConfig};
pub use cursor::Cursor;
pub use foundation::core::{CubicBez, Point, Rect, TimeRange, Vec2};
pub use foundation::error::{DanceError, DanceResult};
pub use foundation::math::{heading, normalize_positive, normalize_signed, polar};
pub use mover::momentum::{MomentumMover, SegmentDebug, TangentZone};
pub use mover::segment::PathSegment;
pub use mover::{Mover, MoverKind, create_mover};
pub use playback::multi::{CursorTrack, PlaybackThreading, play_cursors};
pub use playback::session::{CursorFrame, DanceSession, HitLog, MAX_SAMPLED_FRAMES};
pub use scheduler::runner::Scheduler;
pub use scheduler::{HitObserver, MovedTarget};
pub use waypoint::document::WaypointDoc;
pub use waypoint::model::{
    PathOracle, PolylinePath, Waypoint, WaypointKind, is_same_position, same_raw_position,
    same_stacked_position, within_dedup_tolerance,
};
