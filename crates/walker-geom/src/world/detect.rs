// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::trace;
use walker_math::Vec3;

use super::response::{slide, Hit};
use super::{CollisionWorld, ContactKind, Sweep, MIN_CLOSING_SPEED};
use crate::sweep::{edge::line_crash_time, point::point_crash_time};
use crate::types::triangle::Triangle;

impl CollisionWorld {
    /// Sweeps a unit sphere at `position` along `velocity` through every
    /// triangle and resolves the earliest contact with a slide.
    ///
    /// Zero velocity returns the inputs unchanged. Without a contact the
    /// inputs are also returned unchanged and the caller applies the full
    /// motion itself (see [`Sweep::end_position`]).
    pub fn detect(&self, position: Vec3, velocity: Vec3) -> Sweep {
        if velocity.is_zero() {
            return Sweep::clear(position, velocity);
        }

        let mut best: Option<Hit> = None;
        let mut min_time = 1.0_f32;

        for (index, tri) in self.triangles.iter().enumerate() {
            let plane_dist = tri.plane_distance(position);
            let closing = velocity.dot(&tri.normal());
            if closing <= MIN_CLOSING_SPEED {
                continue;
            }

            // Face: the sphere's leading point reaches the plane inside the triangle.
            let ticks_to_hit = (plane_dist - 1.0) / closing;
            if ticks_to_hit >= 0.0 && ticks_to_hit < min_time {
                let leading = position + tri.normal() + velocity * ticks_to_hit;
                if tri.contains(leading) {
                    min_time = ticks_to_hit;
                    best = Some(Hit {
                        time: ticks_to_hit,
                        triangle: index,
                        kind: ContactKind::Face,
                    });
                    continue;
                }
            }

            // Features: the plane is within reach but the face test did not land.
            if plane_dist >= 0.0 && plane_dist < 1.0 + closing {
                if let Some((time, touch_point)) = earliest_feature(tri, position, velocity) {
                    if time < min_time {
                        min_time = time;
                        best = Some(Hit {
                            time,
                            triangle: index,
                            kind: ContactKind::Feature { touch_point },
                        });
                    }
                }
            }
        }

        match best {
            Some(hit) => {
                trace!(triangle = hit.triangle, time = hit.time, kind = ?hit.kind, "sweep contact");
                slide(position, velocity, hit, &self.triangles[hit.triangle])
            }
            None => Sweep::clear(position, velocity),
        }
    }
}

/// Earliest vertex or edge contact of `tri`, scanned a, b, c, ab, ac, bc.
fn earliest_feature(tri: &Triangle, position: Vec3, velocity: Vec3) -> Option<(f32, Vec3)> {
    let vertices = [tri.a(), tri.b(), tri.c()];
    let edges = [(tri.a(), tri.b()), (tri.a(), tri.c()), (tri.b(), tri.c())];

    let vertex_hits = vertices
        .into_iter()
        .filter_map(|v| point_crash_time(position, velocity, v).map(|t| (t, v)));
    let edge_hits = edges.into_iter().filter_map(|(a, b)| {
        line_crash_time(position, velocity, a, b).map(|hit| (hit.time, hit.touch_point))
    });

    vertex_hits
        .chain(edge_hits)
        .fold(None, |best: Option<(f32, Vec3)>, candidate| match best {
            Some(current) if candidate.0 >= current.0 => Some(current),
            _ => Some(candidate),
        })
}
