//! Branch-cut-safe angle helpers.
//!
//! Every angular comparison in the movers goes through these functions so that zone tests do
//! not flip at the `0 / 2π` seam.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Vec2};

/// Reduce `angle` into `[0, 2π)`.
///
/// This is a true modulo reduction: negative inputs and whole turns map onto the same
/// representative.
pub fn normalize_positive(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // `rem_euclid` rounds tiny negative inputs up to exactly `TAU`.
    if a >= TAU { 0.0 } else { a }
}

/// Reduce `angle` into `(-π, π]`.
pub fn normalize_signed(angle: f64) -> f64 {
    let a = normalize_positive(angle);
    if a > PI { a - TAU } else { a }
}

/// Direction of travel from `from` to `to`, in radians.
///
/// Coincident points yield `0.0` rather than an undefined angle.
pub fn heading(from: Point, to: Point) -> f64 {
    let d = to - from;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    d.atan2()
}

/// Vector of length `len` pointing along `angle`.
pub fn polar(angle: f64, len: f64) -> Vec2 {
    Vec2::from_angle(angle) * len
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
