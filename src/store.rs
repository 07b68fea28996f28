// SPDX-License-Identifier: FSL-1.1
/// key-value store builder
pub mod builder;

/// hash-backed key-value store
pub mod map;

pub use builder::Builder;
pub use map::KeyValueStore;
