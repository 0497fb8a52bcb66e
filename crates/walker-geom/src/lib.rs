// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Collision core for the scenewalker.

This crate provides:
- Ellipsoid-space collision triangles (`Triangle`) and the registry that owns
  them (`CollisionWorld`).
- Analytic unit-sphere sweep solvers against vertices and edges (`sweep`).
- One sweep-and-slide step (`CollisionWorld::detect`) and the positional
  wall-hug correction (`CollisionWorld::wall_hug`).
- A fixed analytic regression suite (`selftest::run`).

Design notes:
- Geometry is pre-divided by the player's per-axis radii so the player is a
  unit sphere; callers own the conversion in and out of that space.
- Triangle normals point into the solid. Meshes must be wound so that
  `cross(b - a, c - a)` faces out of the solid.
- Queries are brute force over every triangle, in insertion order; the first
  triangle to reach the minimal time of impact wins.
- Misses are `None`, never errors.
"]

/// Error types for triangle ingestion.
pub mod error;
/// Mesh vertex records handed over by the model loader.
pub mod mesh;
/// Analytic regression suite for the sweep solvers.
pub mod selftest;
/// Unit-sphere sweep solvers against vertices and edges.
pub mod sweep;
/// Foundational collision types.
pub mod types;
/// Triangle registry and the detect / wall-hug passes.
pub mod world;

pub use error::GeomError;
pub use mesh::Vertex;
pub use sweep::{edge::line_crash_time, point::point_crash_time, EdgeHit};
pub use types::triangle::Triangle;
pub use world::{Contact, ContactKind, CollisionWorld, IngestReport, Sweep};
