// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scenewalker developer CLI.
//!
//! Runs the collision self-test, drives a [`walker_motion::Walker`] through a
//! JSON mesh without a frontend, and seeds the on-disk walker config.

pub mod cli;
