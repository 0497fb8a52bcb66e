// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use walker_math::{Vec3, EPSILON};

/// Collision triangle in ellipsoid space.
///
/// Invariants:
/// - `a`, `b`, `c` are not collinear.
/// - `normal` is unit length and points into the solid, i.e. it is
///   `-normalize(cross(b - a, c - a))`.
/// - `plane_constant` equals `normal · a` as computed at construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    a: Vec3,
    b: Vec3,
    c: Vec3,
    normal: Vec3,
    plane_constant: f32,
}

impl Triangle {
    /// Builds a triangle from three ellipsoid-space vertices.
    ///
    /// Returns `None` when the vertices are collinear (zero-area triangle),
    /// since no plane normal exists for them. The test is relative to the
    /// edge lengths, so tiny well-shaped triangles are kept.
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Option<Self> {
        let outward = (b - a).cross(&(c - a));
        let area = outward.length();
        let scale = (b - a).length() * (c - a).length();
        if !outward.is_finite() || area <= scale * EPSILON {
            return None;
        }
        // Not `normalize`, whose cutoff would zero a tiny triangle's normal.
        let normal = -(outward * (1.0 / area));
        let plane_constant = normal.dot(&a);
        Some(Self {
            a,
            b,
            c,
            normal,
            plane_constant,
        })
    }

    /// First vertex.
    pub const fn a(&self) -> Vec3 {
        self.a
    }

    /// Second vertex.
    pub const fn b(&self) -> Vec3 {
        self.b
    }

    /// Third vertex.
    pub const fn c(&self) -> Vec3 {
        self.c
    }

    /// Unit normal pointing into the solid.
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Plane constant `normal · a`.
    pub const fn plane_constant(&self) -> f32 {
        self.plane_constant
    }

    /// Signed distance from `point` to the plane, positive on the open side.
    pub fn plane_distance(&self, point: Vec3) -> f32 {
        self.plane_constant - point.dot(&self.normal)
    }

    /// Returns `true` if `point`, assumed to lie on (or near) the plane, falls
    /// inside the triangle or on its boundary.
    ///
    /// Each edge's half-plane test is oriented by the outward normal.
    pub fn contains(&self, point: Vec3) -> bool {
        let outward = -self.normal;

        let ab = self.b - self.a;
        let ac = self.c - self.a;
        let bc = self.c - self.b;
        let ap = point - self.a;
        let bp = point - self.b;

        ab.cross(&ap).dot(&outward) >= 0.0
            && ap.cross(&ac).dot(&outward) >= 0.0
            && bc.cross(&bp).dot(&outward) >= 0.0
    }
}
