// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Fixed analytic regression cases for the sweep solvers.
//!
//! Shipped with the library so a host can verify the solvers on the target
//! platform at startup. Results are reported through `tracing`.

use thiserror::Error;
use tracing::{error, info};
use walker_math::{approx_eq, Vec3, COMPARE_TOLERANCE};

use crate::sweep::{edge::line_crash_time, point::point_crash_time};

/// A self-test case whose result differed from the analytic value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelfTestError {
    /// Time of impact mismatch (`None` is a miss).
    #[error("self-test `{case}`: expected time {expected:?}, got {actual:?}")]
    Time {
        /// Case name.
        case: &'static str,
        /// Analytic time of impact.
        expected: Option<f32>,
        /// Computed time of impact.
        actual: Option<f32>,
    },
    /// Edge touch point mismatch.
    #[error("self-test `{case}`: expected touch point {expected:?}, got {actual:?}")]
    TouchPoint {
        /// Case name.
        case: &'static str,
        /// Analytic touch point.
        expected: [f32; 3],
        /// Computed touch point.
        actual: [f32; 3],
    },
}

struct PointCase {
    name: &'static str,
    pos: Vec3,
    v: Vec3,
    vertex: Vec3,
    expected: Option<f32>,
}

fn point_cases() -> [PointCase; 4] {
    let glancing = 1.0 - 30f32.to_radians().cos();
    [
        PointCase {
            name: "vertex head-on",
            pos: Vec3::ZERO,
            v: Vec3::UNIT_X,
            vertex: Vec3::new(3.0, 0.0, 0.0),
            expected: Some(2.0),
        },
        PointCase {
            name: "vertex miss",
            pos: Vec3::ZERO,
            v: Vec3::UNIT_X,
            vertex: Vec3::new(2.0, 2.0, 0.0),
            expected: None,
        },
        PointCase {
            name: "vertex glancing x",
            pos: Vec3::ZERO,
            v: Vec3::UNIT_X,
            vertex: Vec3::new(1.0, 0.5, 0.0),
            expected: Some(glancing),
        },
        PointCase {
            name: "vertex glancing y",
            pos: Vec3::ZERO,
            v: Vec3::UNIT_Y,
            vertex: Vec3::new(0.5, 1.0, 0.0),
            expected: Some(glancing),
        },
    ]
}

fn same_time(expected: Option<f32>, actual: Option<f32>) -> bool {
    match (expected, actual) {
        (Some(e), Some(a)) => approx_eq(e, a),
        (None, None) => true,
        _ => false,
    }
}

fn check() -> Result<(), SelfTestError> {
    for case in point_cases() {
        let actual = point_crash_time(case.pos, case.v, case.vertex);
        if !same_time(case.expected, actual) {
            return Err(SelfTestError::Time {
                case: case.name,
                expected: case.expected,
                actual,
            });
        }
    }

    let case = "edge head-on";
    let hit = line_crash_time(
        Vec3::ZERO,
        Vec3::UNIT_X,
        Vec3::new(4.0, -1.0, 0.0),
        Vec3::new(4.0, 1.0, 0.0),
    );
    let Some(hit) = hit.filter(|h| approx_eq(h.time, 3.0)) else {
        return Err(SelfTestError::Time {
            case,
            expected: Some(3.0),
            actual: hit.map(|h| h.time),
        });
    };
    let expected_touch = Vec3::new(4.0, 0.0, 0.0);
    if !hit.touch_point.approx_eq(&expected_touch, COMPARE_TOLERANCE) {
        return Err(SelfTestError::TouchPoint {
            case,
            expected: expected_touch.to_array(),
            actual: hit.touch_point.to_array(),
        });
    }
    Ok(())
}

/// Runs every case, logging the outcome.
///
/// # Errors
/// Returns the first case whose result differs from its analytic value by
/// [`COMPARE_TOLERANCE`] or more.
pub fn run() -> Result<(), SelfTestError> {
    match check() {
        Ok(()) => {
            info!("collision self-test passed");
            Ok(())
        }
        Err(err) => {
            error!(%err, "collision self-test failed");
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_cases_pass() {
        assert_eq!(run(), Ok(()));
    }

    #[test]
    fn mismatch_formats_case_name() {
        let err = SelfTestError::Time {
            case: "vertex miss",
            expected: None,
            actual: Some(0.5),
        };
        assert!(err.to_string().contains("vertex miss"));
    }
}
