//! Frame-driven playback on top of the scheduler.

pub(crate) mod multi;
pub(crate) mod session;
