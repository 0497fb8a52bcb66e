// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core collision types.
//!
//! Conventions:
//! - Everything here lives in ellipsoid space: the player is a unit sphere.
//! - Triangle normals point into the solid, so a positive plane distance means
//!   the query point is on the open side of the surface.

#[doc = "Ellipsoid-space collision triangle with inward normal and plane constant."]
pub mod triangle;
