//! Waypoints: the timestamped targets the cursor has to visit.

pub(crate) mod document;
pub(crate) mod model;
