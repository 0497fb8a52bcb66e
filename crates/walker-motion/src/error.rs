// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;
use walker_geom::GeomError;

/// Errors raised while configuring a walker or loading its collision mesh.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MotionError {
    /// A [`crate::WalkerConfig`] field is out of range.
    #[error("invalid walker config: {0}")]
    InvalidConfig(String),
    /// The collision core rejected the mesh.
    #[error(transparent)]
    Geom(#[from] GeomError),
}
