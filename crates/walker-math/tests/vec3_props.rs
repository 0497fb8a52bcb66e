// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;
use proptest::test_runner::{Config as PropConfig, RngAlgorithm, TestRng, TestRunner};

use walker_math::Vec3;

const SEED_BYTES: [u8; 32] = [
    0x17, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0,
];

fn runner() -> TestRunner {
    let rng = TestRng::from_seed(RngAlgorithm::ChaCha, &SEED_BYTES);
    TestRunner::new_with_rng(PropConfig::default(), rng)
}

fn vec3() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-100.0f32..100.0).prop_map(Vec3::from)
}

#[test]
fn cross_is_orthogonal_to_both_inputs() {
    runner()
        .run(&(vec3(), vec3()), |(a, b)| {
            let c = a.cross(&b);
            let scale = (a.length() * b.length()).max(1.0);
            prop_assert!(c.dot(&a).abs() <= 1e-4 * scale * a.length().max(1.0));
            prop_assert!(c.dot(&b).abs() <= 1e-4 * scale * b.length().max(1.0));
            Ok(())
        })
        .expect("cross orthogonality");
}

#[test]
fn normalize_is_unit_or_zero() {
    runner()
        .run(&vec3(), |v| {
            let n = v.normalize();
            prop_assert!(n.is_zero() || (n.length() - 1.0).abs() < 1e-5);
            Ok(())
        })
        .expect("normalize length");
}
