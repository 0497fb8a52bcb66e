// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Triangle registry and the per-tick collision passes.
//!
//! Ordering contract:
//! - Triangles are stored and scanned in insertion order.
//! - All time and distance comparisons are strict, so among equally early
//!   contacts the first triangle scanned wins.
//!
//! The registry is brute force; every query touches every triangle.

use tracing::{debug, warn};
use walker_math::Vec3;

use crate::error::GeomError;
use crate::mesh::Vertex;
use crate::types::triangle::Triangle;

#[doc = "Sweep-and-slide pass over every triangle."]
mod detect;
#[doc = "Slide response applied to the winning contact."]
mod response;
#[doc = "Positional push-out for spheres resting inside a surface."]
mod wall_hug;

/// Closing speeds at or below this are treated as moving parallel to a plane.
pub const MIN_CLOSING_SPEED: f32 = 1e-5;

/// Penetration depth still accepted by the wall-hug pass.
pub const HUG_TOLERANCE: f32 = 0.01;

/// How the swept sphere met the winning triangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ContactKind {
    /// The sphere landed flat on the triangle's face.
    Face,
    /// The sphere struck a vertex or an edge.
    Feature {
        /// Point on the triangle boundary that was touched.
        touch_point: Vec3,
    },
}

/// Earliest contact found by [`CollisionWorld::detect`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Contact {
    /// Fraction of the input velocity travelled before contact.
    pub time: f32,
    /// Index of the triangle in insertion order.
    pub triangle: usize,
    /// Face or feature contact.
    pub kind: ContactKind,
    /// Direction from the sphere centre into the surface used for the slide
    /// (the triangle normal for faces, centre-to-touch-point for features).
    pub normal: Vec3,
}

/// Result of one sweep-and-slide step.
///
/// When `contact` is `None`, `position` and `velocity` are the inputs
/// unchanged. Otherwise `position` sits at the contact and `velocity` is the
/// remaining tangential motion for the rest of the tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sweep {
    /// Sphere centre after the step.
    pub position: Vec3,
    /// Velocity left to apply.
    pub velocity: Vec3,
    /// Winning contact, if any.
    pub contact: Option<Contact>,
}

impl Sweep {
    /// A step that met nothing.
    pub const fn clear(position: Vec3, velocity: Vec3) -> Self {
        Self {
            position,
            velocity,
            contact: None,
        }
    }

    /// Position once the remaining velocity is applied.
    pub fn end_position(&self) -> Vec3 {
        self.position + self.velocity
    }

    /// Returns `true` if the step hit a triangle.
    pub const fn hit(&self) -> bool {
        self.contact.is_some()
    }
}

/// Summary of a [`CollisionWorld::load_mesh`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct IngestReport {
    /// Triangles now in the registry.
    pub triangles: usize,
    /// Collinear triangles that were skipped.
    pub skipped_degenerate: usize,
    /// Vertices past the last complete triple that were ignored.
    pub trailing_vertices: usize,
}

/// Owned set of ellipsoid-space collision triangles.
#[derive(Debug, Clone, Default)]
pub struct CollisionWorld {
    triangles: Vec<Triangle>,
}

impl CollisionWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Returns `true` when no triangles are registered.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangles in insertion order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Iterates triangles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triangle> {
        self.triangles.iter()
    }

    /// Drops every triangle.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Appends an already-built triangle.
    pub fn insert(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Reads `vertices[offset..offset + 3]`, scales positions into ellipsoid
    /// space by `radii`, and appends the resulting triangle.
    ///
    /// # Errors
    /// - [`GeomError::InvalidRadii`] if any radius is non-positive or non-finite.
    /// - [`GeomError::VertexOutOfRange`] if fewer than three vertices remain.
    /// - [`GeomError::DegenerateTriangle`] if the vertices are collinear.
    pub fn push(&mut self, offset: usize, vertices: &[Vertex], radii: Vec3) -> Result<(), GeomError> {
        validate_radii(radii)?;
        let triple = offset
            .checked_add(3)
            .and_then(|end| vertices.get(offset..end))
            .ok_or(GeomError::VertexOutOfRange {
                offset,
                len: vertices.len(),
            })?;

        let a = triple[0].position.div_elem(&radii);
        let b = triple[1].position.div_elem(&radii);
        let c = triple[2].position.div_elem(&radii);
        let triangle = Triangle::new(a, b, c).ok_or(GeomError::DegenerateTriangle { offset })?;
        self.triangles.push(triangle);
        Ok(())
    }

    /// Replaces the registry with every complete triangle in `vertices`.
    ///
    /// Degenerate triangles are skipped and counted; trailing vertices that do
    /// not form a full triangle are ignored.
    ///
    /// # Errors
    /// Returns [`GeomError::InvalidRadii`] before touching the registry if the
    /// radii are unusable.
    pub fn load_mesh(&mut self, vertices: &[Vertex], radii: Vec3) -> Result<IngestReport, GeomError> {
        validate_radii(radii)?;
        self.clear();

        let mut report = IngestReport {
            trailing_vertices: vertices.len() % 3,
            ..IngestReport::default()
        };
        for offset in (0..vertices.len() - report.trailing_vertices).step_by(3) {
            match self.push(offset, vertices, radii) {
                Ok(()) => {}
                Err(GeomError::DegenerateTriangle { offset }) => {
                    warn!(offset, "skipping degenerate collision triangle");
                    report.skipped_degenerate += 1;
                }
                Err(err) => return Err(err),
            }
        }
        report.triangles = self.triangles.len();

        debug!(
            triangles = report.triangles,
            skipped = report.skipped_degenerate,
            trailing = report.trailing_vertices,
            "collision mesh loaded"
        );
        Ok(report)
    }
}

fn validate_radii(radii: Vec3) -> Result<(), GeomError> {
    if radii.to_array().iter().all(|r| r.is_finite() && *r > 0.0) {
        Ok(())
    } else {
        Err(GeomError::InvalidRadii(radii.to_array()))
    }
}
