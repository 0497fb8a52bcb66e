// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hand-built triangle soups for collision tests.
//!
//! Every quad is wound so that `cross(b - a, c - a)` faces out of the solid,
//! i.e. towards the space the walker moves through.

use walker_geom::Vertex;
use walker_math::Vec3;

/// Appends quad `p0 p1 p2 p3` (in perimeter order) as two triangles whose
/// winding faces `outward`.
pub fn push_quad(out: &mut Vec<Vertex>, corners: [Vec3; 4], outward: Vec3) {
    let [p0, p1, p2, p3] = corners;
    let facing = (p1 - p0).cross(&(p2 - p0)).dot(&outward);
    let tris = if facing >= 0.0 {
        [p0, p1, p2, p0, p2, p3]
    } else {
        [p0, p2, p1, p0, p3, p2]
    };
    out.extend(tris.into_iter().map(Vertex::at));
}

/// Square floor at height `y`, walkable from above.
pub fn floor(half_extent: f32, y: f32) -> Vec<Vertex> {
    let h = half_extent;
    let mut out = Vec::with_capacity(6);
    push_quad(
        &mut out,
        [
            Vec3::new(-h, y, -h),
            Vec3::new(h, y, -h),
            Vec3::new(h, y, h),
            Vec3::new(-h, y, h),
        ],
        Vec3::UNIT_Y,
    );
    out
}

/// Closed box room `[-h, h] × [0, height] × [-h, h]` seen from the inside:
/// floor, ceiling, and four walls.
pub fn room(half_extent: f32, height: f32) -> Vec<Vertex> {
    let h = half_extent;
    let mut out = floor(h, 0.0);
    push_quad(
        &mut out,
        [
            Vec3::new(-h, height, -h),
            Vec3::new(h, height, -h),
            Vec3::new(h, height, h),
            Vec3::new(-h, height, h),
        ],
        -Vec3::UNIT_Y,
    );
    for (sign, axis) in [(1.0, 0usize), (-1.0, 0), (1.0, 2), (-1.0, 2)] {
        let corner = |u: f32, y: f32| {
            if axis == 0 {
                Vec3::new(sign * h, y, u)
            } else {
                Vec3::new(u, y, sign * h)
            }
        };
        let outward = if axis == 0 {
            Vec3::UNIT_X * -sign
        } else {
            Vec3::UNIT_Z * -sign
        };
        push_quad(
            &mut out,
            [
                corner(-h, 0.0),
                corner(h, 0.0),
                corner(h, height),
                corner(-h, height),
            ],
            outward,
        );
    }
    out
}

/// Floor of `half_extent` plus a single wall at `x = wall_x` facing -X.
pub fn floor_with_wall(half_extent: f32, wall_x: f32, wall_height: f32) -> Vec<Vertex> {
    let h = half_extent;
    let mut out = floor(h, 0.0);
    push_quad(
        &mut out,
        [
            Vec3::new(wall_x, 0.0, -h),
            Vec3::new(wall_x, 0.0, h),
            Vec3::new(wall_x, wall_height, h),
            Vec3::new(wall_x, wall_height, -h),
        ],
        -Vec3::UNIT_X,
    );
    out
}

/// Flat positions as `[[x, y, z], ...]`, the shape mesh files use on disk.
pub fn positions(vertices: &[Vertex]) -> Vec<[f32; 3]> {
    vertices.iter().map(|v| v.position.to_array()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outward(tri: &[Vertex]) -> Vec3 {
        let [a, b, c] = [tri[0].position, tri[1].position, tri[2].position];
        (b - a).cross(&(c - a)).normalize()
    }

    #[test]
    fn floor_faces_up() {
        for tri in floor(4.0, 0.0).chunks(3) {
            assert!(outward(tri).approx_eq(&Vec3::UNIT_Y, 1e-6));
        }
    }

    #[test]
    fn room_faces_point_inward() {
        let mesh = room(5.0, 4.0);
        assert_eq!(mesh.len(), 36);
        let centre = Vec3::new(0.0, 2.0, 0.0);
        for tri in mesh.chunks(3) {
            let to_centre = centre - tri[0].position;
            assert!(outward(tri).dot(&to_centre) > 0.0);
        }
    }
}
