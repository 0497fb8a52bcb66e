// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Player controller for the scenewalker.
//!
//! A [`Walker`] owns the player's world-space position and vertical state and
//! drives one [`walker_geom::CollisionWorld`] query pair per tick: a
//! horizontal sweep for walking, then a vertical sweep for gravity and
//! jumping. Conversion into and out of ellipsoid space happens here so the
//! collision core only ever sees a unit sphere.

mod config;
mod error;
mod walker;

pub use config::WalkerConfig;
pub use error::MotionError;
pub use walker::{TickReport, WalkInput, Walker};
