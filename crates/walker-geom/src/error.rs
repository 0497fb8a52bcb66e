// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Error type for building the collision registry from mesh data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// Fewer than three vertices remain at the requested offset.
    #[error("vertex offset {offset} needs three vertices but the buffer holds {len}")]
    VertexOutOfRange {
        /// Requested offset of the first vertex.
        offset: usize,
        /// Length of the vertex buffer.
        len: usize,
    },
    /// Player radii must be positive and finite on every axis.
    #[error("player radii must be positive and finite, got {0:?}")]
    InvalidRadii([f32; 3]),
    /// The three vertices are collinear (or coincide) in ellipsoid space.
    #[error("degenerate triangle at vertex offset {offset}")]
    DegenerateTriangle {
        /// Offset of the first vertex of the rejected triangle.
        offset: usize,
    },
}
