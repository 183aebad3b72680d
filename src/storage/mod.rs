// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Versioned in-memory storage.
//!
//! Every write appends a new [`Version`] to the key's chain instead of
//! mutating in place; the only in-place mutation is marking a version as
//! ended by an overwriting or deleting transaction. Which versions a reader
//! observes is decided one level up, by the visibility predicate.

mod store;
mod version;

pub use store::VersionStore;
pub use version::{Key, Value, Version};
