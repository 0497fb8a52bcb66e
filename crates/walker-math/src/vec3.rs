// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::EPSILON;

/// 3D vector used for points, velocities, and normals.
///
/// * Components are plain `f32`; whether a value is in world space or in the
///   player's ellipsoid space is up to the calling context.
/// * Component-wise [`Vec3::mul_elem`] and [`Vec3::div_elem`] convert between
///   the two spaces given per-axis player radii.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vec3 {
    data: [f32; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { data: [x, y, z] }
    }

    /// Creates a vector with all three components set to `value`.
    pub const fn splat(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        self.data
    }

    /// X component.
    pub const fn x(self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(self) -> f32 {
        self.data[2]
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.data[0] * other.data[0] + self.data[1] * other.data[1] + self.data[2] * other.data[2]
    }

    /// Cross product with another vector.
    pub fn cross(&self, other: &Self) -> Self {
        let [ax, ay, az] = self.data;
        let [bx, by, bz] = other.data;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length (magnitude).
    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    /// Normalises the vector, returning the zero vector if length ≤ `EPSILON`.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len <= EPSILON {
            return Self::ZERO;
        }
        *self * (1.0 / len)
    }

    /// Component-wise product.
    pub fn mul_elem(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] * other.data[0],
            self.data[1] * other.data[1],
            self.data[2] * other.data[2],
        )
    }

    /// Component-wise quotient. Callers guarantee `other` has no zero lanes.
    pub fn div_elem(&self, other: &Self) -> Self {
        Self::new(
            self.data[0] / other.data[0],
            self.data[1] / other.data[1],
            self.data[2] / other.data[2],
        )
    }

    /// Returns `true` if every component is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|c| *c == 0.0)
    }

    /// Returns `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Returns `true` when every component of `self` and `other` differ by
    /// less than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f32) -> bool {
        self.data
            .iter()
            .zip(other.data.iter())
            .all(|(a, b)| (a - b).abs() < tolerance)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self { data: value }
    }
}

impl From<Vec3> for [f32; 3] {
    fn from(value: Vec3) -> Self {
        value.data
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] + rhs.data[0],
            self.data[1] + rhs.data[1],
            self.data[2] + rhs.data[2],
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.data[0] - rhs.data[0],
            self.data[1] - rhs.data[1],
            self.data[2] - rhs.data[2],
        )
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.data[0] * rhs, self.data[1] * rhs, self.data[2] * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.data[0] / rhs, self.data[1] / rhs, self.data[2] / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.data[0], -self.data[1], -self.data[2])
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_named_methods() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(-3.0, 4.0, 1.5);
        assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
        assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
        assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
        assert_eq!((-a).to_array(), [-1.0, 2.0, -0.5]);
        assert_eq!((a / 2.0).to_array(), [0.5, -1.0, 0.25]);
    }

    #[test]
    fn assign_operators_work() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v += Vec3::new(-1.0, 1.0, 0.0);
        assert_eq!(v.to_array(), [0.0, 3.0, 3.0]);
        v -= Vec3::new(0.0, 1.0, 1.0);
        assert_eq!(v.to_array(), [0.0, 2.0, 2.0]);
        v *= 0.5;
        assert_eq!(v.to_array(), [0.0, 1.0, 1.0]);
    }

    #[test]
    fn cross_follows_right_hand_rule() {
        assert_eq!(Vec3::UNIT_X.cross(&Vec3::UNIT_Y), Vec3::UNIT_Z);
        assert_eq!(Vec3::UNIT_Y.cross(&Vec3::UNIT_Z), Vec3::UNIT_X);
    }

    #[test]
    fn normalize_degenerate_returns_zero() {
        assert!(Vec3::new(1e-9, 0.0, 0.0).normalize().is_zero());
        let n = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert!(n.approx_eq(&Vec3::new(0.6, 0.0, 0.8), 1e-6));
    }

    #[test]
    fn elementwise_scaling_round_trips() {
        let radii = Vec3::new(0.4, 0.8, 0.4);
        let p = Vec3::new(2.0, -1.6, 0.8);
        let e = p.div_elem(&radii);
        assert!(e.approx_eq(&Vec3::new(5.0, -2.0, 2.0), 1e-5));
        assert!(e.mul_elem(&radii).approx_eq(&p, 1e-5));
    }
}
