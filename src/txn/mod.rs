// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Transaction model, registry, and commit-time conflict detection.
//!
//! # Key Concepts
//!
//! ## In-progress snapshot
//!
//! At begin time every transaction captures the set of transaction ids that
//! were still running. Repeatable read and stricter levels use it to pin the
//! reader's view of the world: a write by a transaction in that set stays
//! invisible even after it commits.
//!
//! ## Read and write sets
//!
//! Each transaction accumulates the keys it has read and written. At commit,
//! snapshot transactions are checked for write-write conflicts against
//! overlapping committed transactions, and serializable transactions
//! additionally for read-write conflicts. Losing the check aborts the
//! committer; the first committer always wins.

mod conflict;
mod error;
mod table;
mod transaction;

pub use conflict::{read_write_conflict, validate_commit, write_write_conflict};
pub use error::{ConflictError, UnknownIsolationLevel};
pub use table::TransactionTable;
pub use transaction::{IsolationLevel, Transaction, TxnId, TxnState};
