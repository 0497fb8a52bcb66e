// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for scenewalker tools.
//! Keeps the CLI and any host adapter thin and storage-agnostic.

pub mod config;
