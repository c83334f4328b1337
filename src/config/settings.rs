use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{DanceError, DanceResult};
use crate::mover::MoverKind;

/// Tuning of the momentum mover. Angles are in degrees, times in playback units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MomentumConfig {
    /// Treat waypoints whose pre-stacking positions match as the same position.
    pub skip_stack_angles: bool,
    /// Enable stream classification.
    pub stream_restrict: bool,
    /// Lower bound of the stream distance band.
    pub stream_min_distance: f64,
    /// Upper bound of the stream distance band.
    pub stream_max_distance: f64,
    /// Entry-side multiplier inside the stream zone.
    pub stream_mult: f64,
    /// Exit-side multiplier inside the stream zone.
    pub stream_mult_end: f64,
    /// Width of the stream arc; `0` disables the stream zone.
    pub stream_area: f64,
    /// Multiplier for coincident consecutive targets; `0` disables bounce handling.
    pub equal_pos_bounce: f64,
    /// Outgoing multiplier scale applied once the duration trigger is reached.
    pub duration_mult: f64,
    /// Gap length that starts the duration stretch; `0` disables it.
    pub duration_trigger: f64,
    /// Half-width of the secondary band picking the restriction offset side.
    pub restrict_angle: f64,
    /// Width of the restriction arc; `0` disables the restriction zone.
    pub restrict_area: f64,
    /// Invert the restriction side selection.
    pub restrict_invert: bool,
    /// Offset added to the chord angle on the "inside" restriction side.
    pub restrict_angle_add: f64,
    /// Offset subtracted from the chord angle on the "outside" restriction side.
    pub restrict_angle_sub: f64,
    /// Default entry-side multiplier.
    pub distance_mult: f64,
    /// Default exit-side multiplier.
    pub distance_mult_end: f64,
    /// Entry-side multiplier after angle interpolation.
    pub distance_mult_out: f64,
    /// Exit-side multiplier after angle interpolation.
    pub distance_mult_out_end: f64,
    /// Project a continuous target's authored tangent when aiming at it.
    pub slider_predict: bool,
    /// Blend the exit tangent towards the chord.
    pub interpolate_angles: bool,
    /// Use the complementary interpolation ratio.
    pub invert_angle_interpolation: bool,
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            skip_stack_angles: false,
            stream_restrict: true,
            stream_min_distance: 5.0,
            stream_max_distance: 100.0,
            stream_mult: 0.7,
            stream_mult_end: 0.7,
            stream_area: 50.0,
            equal_pos_bounce: 2.0,
            duration_mult: 2.0,
            duration_trigger: 500.0,
            restrict_angle: 90.0,
            restrict_area: 40.0,
            restrict_invert: true,
            restrict_angle_add: 90.0,
            restrict_angle_sub: 90.0,
            distance_mult: 0.6,
            distance_mult_end: 0.6,
            distance_mult_out: 0.45,
            distance_mult_out_end: 0.45,
            slider_predict: true,
            interpolate_angles: true,
            invert_angle_interpolation: false,
        }
    }
}

impl MomentumConfig {
    /// Check every value against its documented range.
    pub fn validate(&self) -> DanceResult<()> {
        let non_negative = [
            ("stream_min_distance", self.stream_min_distance),
            ("stream_max_distance", self.stream_max_distance),
            ("stream_mult", self.stream_mult),
            ("stream_mult_end", self.stream_mult_end),
            ("equal_pos_bounce", self.equal_pos_bounce),
            ("duration_mult", self.duration_mult),
            ("duration_trigger", self.duration_trigger),
            ("distance_mult", self.distance_mult),
            ("distance_mult_end", self.distance_mult_end),
            ("distance_mult_out", self.distance_mult_out),
            ("distance_mult_out_end", self.distance_mult_out_end),
        ];
        for (name, v) in non_negative {
            if !v.is_finite() || v < 0.0 {
                return Err(DanceError::config(format!(
                    "momentum '{name}' must be a finite value >= 0 (got {v})"
                )));
            }
        }

        let arcs = [
            ("stream_area", self.stream_area),
            ("restrict_area", self.restrict_area),
            ("restrict_angle", self.restrict_angle),
        ];
        for (name, v) in arcs {
            if !v.is_finite() || !(0.0..=360.0).contains(&v) {
                return Err(DanceError::config(format!(
                    "momentum '{name}' must be within [0, 360] degrees (got {v})"
                )));
            }
        }

        for (name, v) in [
            ("restrict_angle_add", self.restrict_angle_add),
            ("restrict_angle_sub", self.restrict_angle_sub),
        ] {
            if !v.is_finite() {
                return Err(DanceError::config(format!(
                    "momentum '{name}' must be finite"
                )));
            }
        }

        if self.stream_min_distance > self.stream_max_distance {
            return Err(DanceError::config(
                "momentum stream_min_distance must be <= stream_max_distance",
            ));
        }
        Ok(())
    }
}

/// Near-duplicate removal applied to point waypoints before playback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DedupConfig {
    /// Maximum distance between two targets considered duplicates.
    pub distance_epsilon: f64,
    /// Maximum time gap between two targets considered duplicates.
    pub time_epsilon: f64,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            distance_epsilon: 3.0,
            time_epsilon: 3.0,
        }
    }
}

/// Synthetic resting waypoint injected before the first real one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnchorConfig {
    /// Rest position.
    pub position: Point,
    /// Anchor time; must precede every real waypoint.
    pub time: f64,
}

impl Default for AnchorConfig {
    fn default() -> Self {
        Self {
            position: Point::new(100.0, 100.0),
            time: -500.0,
        }
    }
}

/// Display transform of the moved cursor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CursorConfig {
    /// Playfield rectangle used for inversion and edge bouncing.
    pub playfield: Rect,
    /// Fold positions leaving the playfield back inside it.
    pub bounce_on_edges: bool,
    /// Mirror the displayed position vertically.
    pub invert_display: bool,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            playfield: Rect::new(0.0, 0.0, 512.0, 384.0),
            bounce_on_edges: false,
            invert_display: false,
        }
    }
}

/// Complete playback configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DanceConfig {
    /// Path synthesis algorithm.
    pub mover: MoverKind,
    /// Momentum profiles; cursor `id` uses profile `id % len`.
    pub momentum: Vec<MomentumConfig>,
    /// Duplicate-waypoint removal.
    pub dedup: DedupConfig,
    /// Synthetic anchor waypoint.
    pub anchor: AnchorConfig,
    /// Cursor display transform.
    pub cursor: CursorConfig,
}

impl Default for DanceConfig {
    fn default() -> Self {
        Self {
            mover: MoverKind::Momentum,
            momentum: vec![MomentumConfig::default()],
            dedup: DedupConfig::default(),
            anchor: AnchorConfig::default(),
            cursor: CursorConfig::default(),
        }
    }
}

impl DanceConfig {
    /// Parse a configuration from a JSON reader. Missing fields take their defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> DanceResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| DanceError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> DanceResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            DanceError::config(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Momentum profile used by cursor `id`.
    pub fn momentum_for(&self, id: usize) -> DanceResult<&MomentumConfig> {
        if self.momentum.is_empty() {
            return Err(DanceError::config("at least one momentum profile is required"));
        }
        Ok(&self.momentum[id % self.momentum.len()])
    }

    /// Check the whole configuration once, before any playback starts.
    pub fn validate(&self) -> DanceResult<()> {
        if self.momentum.is_empty() {
            return Err(DanceError::config("at least one momentum profile is required"));
        }
        for (i, m) in self.momentum.iter().enumerate() {
            m.validate().map_err(|e| match e {
                DanceError::Config(msg) => {
                    DanceError::config(format!("momentum profile #{i}: {msg}"))
                }
                other => other,
            })?;
        }

        let d = &self.dedup;
        if !d.distance_epsilon.is_finite() || d.distance_epsilon < 0.0 {
            return Err(DanceError::config("dedup distance_epsilon must be >= 0"));
        }
        if !d.time_epsilon.is_finite() || d.time_epsilon < 0.0 {
            return Err(DanceError::config("dedup time_epsilon must be >= 0"));
        }

        let a = &self.anchor;
        if !a.time.is_finite() || !a.position.x.is_finite() || !a.position.y.is_finite() {
            return Err(DanceError::config("anchor position and time must be finite"));
        }

        let p = self.cursor.playfield;
        if !(p.width() > 0.0 && p.height() > 0.0) {
            return Err(DanceError::config("cursor playfield must have a positive area"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
