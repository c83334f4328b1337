use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Point;
use crate::foundation::error::{DanceError, DanceResult};
use crate::waypoint::model::{PolylinePath, Waypoint};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub(crate) struct PointDef {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl<'de> Deserialize<'de> for PointDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Arr([f64; 2]),
            Obj { x: f64, y: f64 },
        }

        match Repr::deserialize(deserializer)? {
            Repr::Arr([x, y]) => Ok(Self { x, y }),
            Repr::Obj { x, y } => Ok(Self { x, y }),
        }
    }
}

impl From<PointDef> for Point {
    fn from(p: PointDef) -> Self {
        Point::new(p.x, p.y)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub(crate) struct PathKeyDef {
    pub(crate) time: f64,
    pub(crate) position: PointDef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct WaypointDef {
    /// Required for point targets; continuous targets take it from their path.
    #[serde(default)]
    pub(crate) time: Option<f64>,
    #[serde(default)]
    pub(crate) position: Option<PointDef>,
    #[serde(default)]
    pub(crate) raw_position: Option<PointDef>,
    #[serde(default)]
    pub(crate) combo_group: u32,
    #[serde(default)]
    pub(crate) path: Vec<PathKeyDef>,
    #[serde(default)]
    pub(crate) start_angle: Option<f64>,
    #[serde(default)]
    pub(crate) end_angle: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct WaypointDocDef {
    pub(crate) waypoints: Vec<WaypointDef>,
}

/// JSON boundary object listing the waypoints of one playback session.
///
/// A point target is `{"time": t, "position": [x, y]}`; a continuous target carries a timed
/// `path` (and optionally authored `start_angle` / `end_angle` in radians).
#[derive(Debug, Clone)]
pub struct WaypointDoc {
    def: WaypointDocDef,
}

impl WaypointDoc {
    /// Parse a waypoint document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> DanceResult<Self> {
        let def: WaypointDocDef = serde_json::from_reader(r)
            .map_err(|e| DanceError::serde(format!("parse waypoint JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a waypoint document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DanceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DanceError::validation(format!("open waypoint JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Number of waypoint entries in the document.
    pub fn len(&self) -> usize {
        self.def.waypoints.len()
    }

    /// Return `true` when the document lists no waypoints.
    pub fn is_empty(&self) -> bool {
        self.def.waypoints.is_empty()
    }

    /// Convert into runtime waypoints, checking ordering and per-entry consistency.
    pub fn to_waypoints(&self) -> DanceResult<Vec<Waypoint>> {
        let out = self
            .def
            .waypoints
            .iter()
            .enumerate()
            .map(|(i, w)| {
                waypoint_from_def(w)
                    .map_err(|e| DanceError::validation(format!("waypoint #{i}: {e}")))
            })
            .collect::<DanceResult<Vec<_>>>()?;

        if let Some(i) = out
            .windows(2)
            .position(|w| w[1].start_time < w[0].start_time)
        {
            return Err(DanceError::validation(format!(
                "waypoints must be sorted by start time (entry #{} starts before #{i})",
                i + 1
            )));
        }
        Ok(out)
    }
}

fn waypoint_from_def(def: &WaypointDef) -> DanceResult<Waypoint> {
    let waypoint = if def.path.is_empty() {
        if def.start_angle.is_some() || def.end_angle.is_some() {
            return Err(DanceError::validation(
                "authored angles require a continuous path",
            ));
        }
        let time = def
            .time
            .ok_or_else(|| DanceError::validation("point waypoint needs a time"))?;
        let position = def
            .position
            .ok_or_else(|| DanceError::validation("point waypoint needs a position"))?;
        if !time.is_finite() || !position.x.is_finite() || !position.y.is_finite() {
            return Err(DanceError::validation("point waypoint must be finite"));
        }
        Waypoint::point(time, position.into())
    } else {
        let keys = def
            .path
            .iter()
            .map(|k| (k.time, Point::from(k.position)))
            .collect();
        let path = PolylinePath::new(keys)?;
        if let Some(time) = def.time
            && time != path.time_range().start
        {
            return Err(DanceError::validation(
                "continuous waypoint time must match its first path key",
            ));
        }
        let mut w = Waypoint::from_polyline(path.clone());
        if def.start_angle.is_some() || def.end_angle.is_some() {
            let start_angle = def.start_angle.unwrap_or_else(|| path.entry_angle());
            let end_angle = def.end_angle.unwrap_or_else(|| path.exit_angle());
            w = Waypoint::continuous(
                w.start_time,
                w.end_time,
                std::sync::Arc::new(path),
                start_angle,
                end_angle,
            )?;
        }
        w
    };

    let waypoint = waypoint.with_combo_group(def.combo_group);
    Ok(match def.raw_position {
        Some(raw) => waypoint.with_raw_start_position(raw.into()),
        None => waypoint,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/waypoint/document.rs"]
mod tests;
