// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use walker_math::Vec3;

/// One triangulated vertex record as produced by the model loader.
///
/// Collision only reads `position`; `normal` and `tex` ride along so render
/// and collision can share one buffer.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vertex {
    /// World-space position.
    pub position: Vec3,
    /// Shading normal.
    pub normal: Vec3,
    /// Texture coordinate.
    pub tex: [f32; 2],
}

impl Vertex {
    /// Vertex at `position` with zeroed normal and texture coordinate.
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            normal: Vec3::ZERO,
            tex: [0.0, 0.0],
        }
    }
}

impl From<[f32; 3]> for Vertex {
    fn from(value: [f32; 3]) -> Self {
        Self::at(Vec3::from(value))
    }
}
