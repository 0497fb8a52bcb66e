// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;
use walker_math::Vec3;

use super::{CollisionWorld, HUG_TOLERANCE};

impl CollisionWorld {
    /// Pushes a unit sphere that sits closer than unit distance to a
    /// triangle's face back out to exactly unit distance.
    ///
    /// Only the closest qualifying face is corrected. A face qualifies when
    /// the centre is at most [`HUG_TOLERANCE`] behind its plane and the
    /// centre's projection onto the plane lies inside the triangle. Velocity
    /// is not involved; calling this twice in a row is the same as calling it
    /// once.
    pub fn wall_hug(&self, position: Vec3) -> Vec3 {
        let mut min_dist = 1.0_f32;
        let mut closest = None;

        for (index, tri) in self.triangles.iter().enumerate() {
            let plane_dist = tri.plane_distance(position);
            if plane_dist >= -HUG_TOLERANCE && plane_dist < min_dist {
                let projected = position + tri.normal() * plane_dist;
                if tri.contains(projected) {
                    min_dist = plane_dist;
                    closest = Some(index);
                }
            }
        }

        match closest {
            Some(index) => {
                trace!(triangle = index, depth = 1.0 - min_dist, "wall hug push-out");
                position + self.triangles[index].normal() * (min_dist - 1.0)
            }
            None => position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::triangle::Triangle;

    fn floor_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        if let Some(tri) = Triangle::new(
            Vec3::new(-10.0, 0.0, 10.0),
            Vec3::new(10.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -10.0),
        ) {
            world.insert(tri);
        }
        world
    }

    #[test]
    fn pushes_embedded_sphere_to_unit_distance() {
        let world = floor_world();
        let out = world.wall_hug(Vec3::new(0.0, 0.995, 0.0));
        assert!(out.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn leaves_clear_and_deeply_buried_spheres_alone() {
        let world = floor_world();
        let above = Vec3::new(0.0, 1.5, 0.0);
        assert_eq!(world.wall_hug(above), above);
        let below = Vec3::new(0.0, -0.5, 0.0);
        assert_eq!(world.wall_hug(below), below);
    }

    #[test]
    fn centre_just_behind_the_plane_is_still_pushed_out() {
        let world = floor_world();
        let out = world.wall_hug(Vec3::new(0.0, -0.005, 0.0));
        assert!(out.approx_eq(&Vec3::new(0.0, 1.0, 0.0), 1e-5));
    }

    #[test]
    fn centre_past_the_tolerance_is_left_alone() {
        let world = floor_world();
        let sunk = Vec3::new(0.0, -0.011, 0.0);
        assert_eq!(world.wall_hug(sunk), sunk);
    }

    #[test]
    fn ignores_faces_whose_projection_misses() {
        let world = floor_world();
        let beside = Vec3::new(0.0, 0.5, 30.0);
        assert_eq!(world.wall_hug(beside), beside);
    }
}
