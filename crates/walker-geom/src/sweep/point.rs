// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use walker_math::Vec3;

use super::earliest_root;

/// Time at which a unit sphere at `pos` moving by `v` first touches `vertex`.
///
/// Solves `|pos - vertex + t v|² = 1`. Returns `None` when the path never
/// comes within unit distance of the vertex, when both roots lie below
/// [`super::TWIDDLE`], or when `v` is (numerically) zero.
///
/// # Examples
/// ```
/// use walker_geom::point_crash_time;
/// use walker_math::Vec3;
/// let t = point_crash_time(Vec3::ZERO, Vec3::UNIT_X, Vec3::new(3.0, 0.0, 0.0));
/// assert_eq!(t, Some(2.0));
/// ```
pub fn point_crash_time(pos: Vec3, v: Vec3, vertex: Vec3) -> Option<f32> {
    let l = pos - vertex;
    let a = v.dot(&v);
    let b = 2.0 * l.dot(&v);
    let c = l.dot(&l) - 1.0;
    earliest_root(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use walker_math::approx_eq;

    #[test]
    fn glancing_vertex_hit_matches_cosine() {
        let expected = 1.0 - 30f32.to_radians().cos();
        let t = point_crash_time(Vec3::ZERO, Vec3::UNIT_X, Vec3::new(1.0, 0.5, 0.0));
        assert!(t.is_some_and(|t| approx_eq(t, expected)), "got {t:?}");
    }

    #[test]
    fn zero_velocity_is_a_miss() {
        assert_eq!(point_crash_time(Vec3::ZERO, Vec3::ZERO, Vec3::UNIT_X * 0.5), None);
    }

    #[test]
    fn starting_inside_reports_negative_time() {
        // Centre 0.75 from the vertex: contact happened 0.25 ticks ago.
        let t = point_crash_time(Vec3::ZERO, Vec3::UNIT_X, Vec3::new(0.75, 0.0, 0.0));
        assert!(t.is_some_and(|t| approx_eq(t, -0.25)), "got {t:?}");
    }
}
