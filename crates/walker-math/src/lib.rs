// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Float32 math helpers for the scenewalker collision stack.
//!
//! Covers the 3D vector type shared by every crate in the workspace plus the
//! handful of scalar utilities the walker needs. All arithmetic stays in `f32`
//! so results match the frame-rate simulation the collision core runs in.

use std::f32::consts::TAU;

mod vec3;

pub use vec3::Vec3;

/// Global epsilon used by math routines when detecting degenerate values.
pub const EPSILON: f32 = 1e-6;

/// Absolute tolerance used when comparing collision results against
/// analytic expectations.
pub const COMPARE_TOLERANCE: f32 = 1e-4;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// Callers must pass `min <= max`; an inverted range returns `min`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        return min;
    }
    value.max(min).min(max)
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Returns `true` when `a` and `b` differ by less than [`COMPARE_TOLERANCE`].
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < COMPARE_TOLERANCE
}
