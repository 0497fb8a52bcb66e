// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles and fixtures for scenewalker crates.
//!
//! - [`InMemoryConfigStore`]: config store fake with call counting and
//!   injectable failures.
//! - [`meshes`]: small hand-wound vertex buffers (floor, room, walled floor) with the
//!   winding the collision core expects.

pub mod config;
pub mod meshes;

pub use config::InMemoryConfigStore;
