// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Unit-sphere sweep solvers.
//!
//! Both solvers find the earliest `t` at which a unit sphere centred at
//! `pos + t * v` touches a feature, by solving `A t² + B t + C = 0`.
//!
//! Root policy (shared):
//! - A negative discriminant is a miss.
//! - Roots down to [`TWIDDLE`] are admitted so a sphere starting marginally
//!   inside the feature still reports a contact instead of passing through.
//! - The smaller admitted root wins.
//! - `A` at or below [`MIN_SWEEP_SQR`] (no relative motion) is a miss.

use walker_math::Vec3;

#[doc = "Sphere sweep against a single vertex."]
pub mod point;
#[doc = "Sphere sweep against a finite edge."]
pub mod edge;

/// Lowest admitted root; tolerates starting slightly inside the sphere.
pub const TWIDDLE: f32 = -0.5;

/// Squared-length threshold below which motion or an edge counts as zero.
pub const MIN_SWEEP_SQR: f32 = 1e-12;

/// Contact between a swept sphere and an edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeHit {
    /// Fraction of the velocity travelled at first contact.
    pub time: f32,
    /// Point on the edge the sphere touches.
    pub touch_point: Vec3,
}

/// Earliest admitted root of `a t² + b t + c = 0`.
pub(crate) fn earliest_root(a: f32, b: f32, c: f32) -> Option<f32> {
    if a <= MIN_SWEEP_SQR {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let sol0 = (-b + root) / (2.0 * a);
    let sol1 = (-b - root) / (2.0 * a);
    match (sol0 >= TWIDDLE, sol1 >= TWIDDLE) {
        (true, true) => Some(sol0.min(sol1)),
        (true, false) => Some(sol0),
        (false, true) => Some(sol1),
        (false, false) => None,
    }
}
