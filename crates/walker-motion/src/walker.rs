// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use tracing::{debug, instrument};
use walker_geom::{CollisionWorld, Contact, IngestReport, Vertex};
use walker_math::{clamp, Vec3};

use crate::{MotionError, WalkerConfig};

/// Downward share of a unit contact normal below which the walker slides
/// instead of standing (about 60° from vertical).
const GROUND_NORMAL_Y: f32 = 0.5;

/// Movement intent for one tick.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct WalkInput {
    /// Forward axis in `[-1, 1]`; positive walks along the view direction.
    pub forward: f32,
    /// Strafe axis in `[-1, 1]`; positive walks to the right.
    pub strafe: f32,
    /// Jump request. Ignored unless the walker is grounded.
    pub jump: bool,
}

/// Outcome of one [`Walker::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TickReport {
    /// World-space centre after the tick.
    pub position: Vec3,
    /// Whether the walker ended the tick supported from below.
    pub grounded: bool,
    /// Vertical speed carried into the next tick.
    pub vertical_speed: f32,
    /// Contact from the walking sweep, in ellipsoid space.
    pub horizontal_contact: Option<Contact>,
    /// Contact from the gravity/jump sweep, in ellipsoid space.
    pub vertical_contact: Option<Contact>,
}

/// Player ellipsoid walking through a [`CollisionWorld`].
///
/// The world must have been loaded with this walker's radii (see
/// [`Walker::load_mesh`]); positions handed in and out are world space.
#[derive(Debug, Clone)]
pub struct Walker {
    config: WalkerConfig,
    radii: Vec3,
    position: Vec3,
    vertical_speed: f32,
    grounded: bool,
}

impl Walker {
    /// Creates a walker at `config.spawn`, airborne and at rest.
    pub fn new(config: WalkerConfig) -> Result<Self, MotionError> {
        config.validate()?;
        Ok(Self {
            radii: Vec3::from(config.radii),
            position: Vec3::from(config.spawn),
            vertical_speed: 0.0,
            grounded: false,
            config,
        })
    }

    /// Active configuration.
    pub const fn config(&self) -> &WalkerConfig {
        &self.config
    }

    /// Ellipsoid radii as a vector.
    pub const fn radii(&self) -> Vec3 {
        self.radii
    }

    /// World-space centre of the ellipsoid.
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether the last tick ended on the ground.
    pub const fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Current vertical speed (positive is up).
    pub const fn vertical_speed(&self) -> f32 {
        self.vertical_speed
    }

    /// Teleports to `position` and drops any vertical motion.
    pub fn spawn(&mut self, position: Vec3) {
        self.position = position;
        self.vertical_speed = 0.0;
        self.grounded = false;
    }

    /// Replaces the contents of `world` with `vertices`, scaled by this
    /// walker's radii.
    pub fn load_mesh(
        &self,
        world: &mut CollisionWorld,
        vertices: &[Vertex],
    ) -> Result<IngestReport, MotionError> {
        Ok(world.load_mesh(vertices, self.radii)?)
    }

    /// Advances one tick: walk, then fall or jump.
    ///
    /// `yaw` is the view heading in radians; zero looks down `-Z` and
    /// positive values turn towards `+X`.
    #[instrument(level = "trace", skip(self, world), fields(pos = ?self.position))]
    pub fn tick(&mut self, world: &CollisionWorld, input: WalkInput, yaw: f32) -> TickReport {
        let mut pos = self.position.div_elem(&self.radii);

        let walk = self.walk_velocity(input, yaw).div_elem(&self.radii);
        let horizontal = world.detect(pos, walk);
        pos = world.wall_hug(horizontal.end_position());

        if input.jump && self.grounded {
            debug!(speed = self.config.jump_speed, "jump");
            self.vertical_speed = self.config.jump_speed;
        }
        self.vertical_speed = (self.vertical_speed - self.config.gravity).max(-self.config.max_fall_speed);
        let falling = self.vertical_speed <= 0.0;

        let fall = Vec3::new(0.0, self.vertical_speed, 0.0).div_elem(&self.radii);
        let vertical = world.detect(pos, fall);
        let swept = vertical.end_position();
        pos = world.wall_hug(swept);

        // Resting contact can land a hair inside the floor, where the sweep
        // finds nothing and only the push-out notices the support.
        let pushed_up = pos.y() > swept.y();
        let supported = vertical.contact.is_some_and(|contact| self.stands_on(&contact));
        self.grounded = falling && (supported || pushed_up);
        // A steep contact while falling is a lip or a slope to slide off, so
        // the fall keeps its speed.
        if self.grounded || (!falling && vertical.hit()) {
            self.vertical_speed = 0.0;
        }

        self.position = pos.mul_elem(&self.radii);
        TickReport {
            position: self.position,
            grounded: self.grounded,
            vertical_speed: self.vertical_speed,
            horizontal_contact: horizontal.contact,
            vertical_contact: vertical.contact,
        }
    }

    /// Whether `contact` pushes up on the walker steeply enough to stand on.
    ///
    /// The contact normal lives in ellipsoid space; dividing by the radii
    /// gives the world-space surface normal at the touch point.
    fn stands_on(&self, contact: &Contact) -> bool {
        contact.normal.div_elem(&self.radii).normalize().y() < -GROUND_NORMAL_Y
    }

    /// World-space walking velocity for `input` at heading `yaw`.
    ///
    /// Diagonal input is scaled back so it never exceeds `walk_speed`.
    pub fn walk_velocity(&self, input: WalkInput, yaw: f32) -> Vec3 {
        let forward = clamp(input.forward, -1.0, 1.0);
        let strafe = clamp(input.strafe, -1.0, 1.0);
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let ahead = Vec3::new(sin_yaw, 0.0, -cos_yaw);
        let right = Vec3::new(cos_yaw, 0.0, sin_yaw);

        let mut wish = ahead * forward + right * strafe;
        let len = wish.length();
        if len > 1.0 {
            wish = wish / len;
        }
        wish * self.config.walk_speed
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    fn walker() -> Walker {
        Walker::new(WalkerConfig::default()).expect("default config")
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = WalkerConfig {
            radii: [0.4, -0.8, 0.4],
            ..WalkerConfig::default()
        };
        assert!(matches!(Walker::new(cfg), Err(MotionError::InvalidConfig(_))));
    }

    #[test]
    fn forward_at_zero_yaw_walks_down_negative_z() {
        let w = walker();
        let v = w.walk_velocity(
            WalkInput {
                forward: 1.0,
                ..WalkInput::default()
            },
            0.0,
        );
        assert!(v.approx_eq(&Vec3::new(0.0, 0.0, -0.08), 1e-6));

        let right = w.walk_velocity(
            WalkInput {
                strafe: 1.0,
                ..WalkInput::default()
            },
            0.0,
        );
        assert!(right.approx_eq(&Vec3::new(0.08, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn diagonal_input_is_capped_at_walk_speed() {
        let w = walker();
        let v = w.walk_velocity(
            WalkInput {
                forward: 1.0,
                strafe: 1.0,
                jump: false,
            },
            0.3,
        );
        assert!((v.length() - 0.08).abs() < 1e-6);
        assert_eq!(v.y(), 0.0);
    }

    #[test]
    fn empty_world_free_falls_to_terminal_speed() {
        let mut w = walker();
        let world = CollisionWorld::new();
        let start = w.position();
        let mut report = w.tick(&world, WalkInput::default(), 0.0);
        assert!(!report.grounded);
        assert!((report.vertical_speed + 0.01).abs() < 1e-6);
        for _ in 0..200 {
            report = w.tick(&world, WalkInput::default(), 0.0);
        }
        assert_eq!(report.vertical_speed, -1.0);
        assert!(report.position.y() < start.y());
    }

    #[test]
    fn jump_request_in_the_air_is_ignored() {
        let mut w = walker();
        let world = CollisionWorld::new();
        let report = w.tick(
            &world,
            WalkInput {
                jump: true,
                ..WalkInput::default()
            },
            0.0,
        );
        assert!(report.vertical_speed < 0.0);
    }

    #[test]
    fn spawn_resets_vertical_state() {
        let mut w = walker();
        let world = CollisionWorld::new();
        let _ = w.tick(&world, WalkInput::default(), 0.0);
        w.spawn(Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(w.position(), Vec3::new(1.0, 4.0, 1.0));
        assert_eq!(w.vertical_speed(), 0.0);
        assert!(!w.is_grounded());
    }
}
