// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use walker_math::Vec3;

use super::{Contact, ContactKind, Sweep};
use crate::sweep::MIN_SWEEP_SQR;
use crate::types::triangle::Triangle;

/// Winning candidate of a detect pass, before the response is applied.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(super) struct Hit {
    pub(super) time: f32,
    pub(super) triangle: usize,
    pub(super) kind: ContactKind,
}

/// Moves the sphere to the contact, strips the velocity component into the
/// surface, and scales what is left by the unused fraction of the tick.
pub(super) fn slide(position: Vec3, velocity: Vec3, hit: Hit, tri: &Triangle) -> Sweep {
    let position = position + velocity * hit.time;

    let (velocity, normal) = match hit.kind {
        ContactKind::Face => {
            let normal = tri.normal();
            (velocity - normal * velocity.dot(&normal), normal)
        }
        ContactKind::Feature { touch_point } => {
            // Measured from the advanced position so the slide plane is
            // tangent to the sphere at the touch point.
            let normal = touch_point - position;
            let len_sqr = normal.length_squared();
            if len_sqr <= MIN_SWEEP_SQR {
                (velocity, normal)
            } else {
                (velocity - normal * (velocity.dot(&normal) / len_sqr), normal)
            }
        }
    };

    Sweep {
        position,
        velocity: velocity * (1.0 - hit.time),
        contact: Some(Contact {
            time: hit.time,
            triangle: hit.triangle,
            kind: hit.kind,
            normal,
        }),
    }
}
