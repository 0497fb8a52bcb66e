// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Tunable walker parameters.
//!
//! Speeds are per tick in world units. Missing fields fall back to the
//! defaults when deserializing, so a config file only needs the values it
//! changes.

use serde::{Deserialize, Serialize};

use crate::MotionError;

/// Configuration for a [`crate::Walker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkerConfig {
    /// Per-axis radii of the player ellipsoid.
    pub radii: [f32; 3],
    /// Downward speed added every tick.
    pub gravity: f32,
    /// Upward speed set by a jump.
    pub jump_speed: f32,
    /// Terminal downward speed.
    pub max_fall_speed: f32,
    /// Horizontal speed at full input.
    pub walk_speed: f32,
    /// Initial centre of the ellipsoid.
    pub spawn: [f32; 3],
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            radii: [0.4, 0.8, 0.4],
            gravity: 0.01,
            jump_speed: 0.25,
            max_fall_speed: 1.0,
            walk_speed: 0.08,
            spawn: [0.0, 2.0, 0.0],
        }
    }
}

impl WalkerConfig {
    /// Checks that radii are positive and every speed is finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), MotionError> {
        if !self.radii.iter().all(|r| r.is_finite() && *r > 0.0) {
            return Err(MotionError::InvalidConfig(format!(
                "radii must be positive and finite, got {:?}",
                self.radii
            )));
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("max_fall_speed", self.max_fall_speed),
            ("walk_speed", self.walk_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MotionError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.spawn.iter().all(|c| c.is_finite()) {
            return Err(MotionError::InvalidConfig(format!(
                "spawn must be finite, got {:?}",
                self.spawn
            )));
        }
        Ok(())
    }
}
