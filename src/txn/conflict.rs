// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Commit-time conflict detection.
//!
//! Snapshot and serializable transactions are validated at commit against
//! every committed transaction that overlapped them: the transactions that
//! were already running when the committer began, plus every transaction
//! that began during the committer's lifetime.

use super::error::ConflictError;
use super::table::TransactionTable;
use super::transaction::{IsolationLevel, Transaction};

/// Returns true if the two transactions wrote a common key.
pub fn write_write_conflict(a: &Transaction, b: &Transaction) -> bool {
    !a.writeset().is_disjoint(b.writeset())
}

/// Returns true if `a` read a key that `b` wrote.
pub fn read_write_conflict(a: &Transaction, b: &Transaction) -> bool {
    !a.readset().is_disjoint(b.writeset())
}

/// Validates `txn` for commit.
///
/// Write-write conflicts block snapshot isolation and stricter; read-write
/// conflicts additionally block serializable. Weaker levels commit without
/// validation.
pub fn validate_commit(table: &TransactionTable, txn: &Transaction) -> Result<(), ConflictError> {
    if txn.isolation() >= IsolationLevel::Snapshot
        && overlaps_committed(table, txn, write_write_conflict)
    {
        return Err(ConflictError::WriteWrite);
    }

    if txn.isolation() >= IsolationLevel::Serializable
        && overlaps_committed(table, txn, read_write_conflict)
    {
        return Err(ConflictError::ReadWrite);
    }

    Ok(())
}

/// Returns true if any committed transaction overlapping `txn` satisfies
/// `conflict`.
fn overlaps_committed(
    table: &TransactionTable,
    txn: &Transaction,
    conflict: fn(&Transaction, &Transaction) -> bool,
) -> bool {
    // Already running when `txn` began, committed since.
    for &id in txn.inprogress() {
        let other = table.get(id);
        if other.is_committed() && conflict(txn, other) {
            return true;
        }
    }

    // Began during `txn`'s lifetime. The range starts at the committer
    // itself, which is still in progress and so filtered out here.
    table
        .started_at_or_after(txn.id())
        .any(|other| other.is_committed() && conflict(txn, other))
}
