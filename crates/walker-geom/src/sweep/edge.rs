// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use walker_math::Vec3;

use super::{earliest_root, EdgeHit, MIN_SWEEP_SQR};

/// Time at which a unit sphere at `pos` moving by `v` first touches the edge
/// `a → b`, together with the touch point on the edge.
///
/// The sweep is solved against the infinite line through `a` and `b` in the
/// plane orthogonal to it; the contact is then kept only if its parameter
/// along `a → b` lies in `[0, 1]`. Degenerate edges and motion parallel to
/// the edge are misses.
pub fn line_crash_time(pos: Vec3, v: Vec3, a: Vec3, b: Vec3) -> Option<EdgeHit> {
    let ab = b - a;
    let d = pos - a;

    let ab_sqr = ab.length_squared();
    if ab_sqr <= MIN_SWEEP_SQR {
        return None;
    }

    // Strip the along-edge components of velocity and offset.
    let along_v = ab.dot(&v) / ab_sqr;
    let along_d = ab.dot(&d) / ab_sqr;
    let perp_v = v - ab * along_v;
    let perp_d = d - ab * along_d;

    let time = earliest_root(
        perp_v.dot(&perp_v),
        2.0 * perp_v.dot(&perp_d),
        perp_d.dot(&perp_d) - 1.0,
    )?;

    let k = ab.dot(&(d + v * time)) / ab_sqr;
    if (0.0..=1.0).contains(&k) {
        Some(EdgeHit {
            time,
            touch_point: a + ab * k,
        })
    } else {
        None
    }
}
