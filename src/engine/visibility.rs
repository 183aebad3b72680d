// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Isolation-parameterized visibility.
//!
//! The predicate decides, for one reader transaction and one version,
//! whether the reader may observe that version. Each isolation level gets
//! its own clause set; the 1999 ANSI SQL standard (page 84) describes the
//! intent of each level.

use crate::storage::Version;
use crate::txn::{IsolationLevel, Transaction, TransactionTable, TxnState};

/// Returns true if `version` is visible to `reader`.
pub fn visible(table: &TransactionTable, reader: &Transaction, version: &Version) -> bool {
    match reader.isolation() {
        IsolationLevel::ReadUncommitted => read_uncommitted(version),
        IsolationLevel::ReadCommitted => read_committed(table, reader, version),
        // Repeatable read, snapshot and serializable share the predicate;
        // they differ only in commit-time validation.
        _ => snapshot_based(table, reader, version),
    }
}

/// Every write is visible, committed or not; only deletion hides a version.
fn read_uncommitted(version: &Version) -> bool {
    version.is_live()
}

/// Committed writes plus the reader's own, respecting the reader's deletes.
fn read_committed(table: &TransactionTable, reader: &Transaction, version: &Version) -> bool {
    let creator = version.created_by();

    // Created by another transaction that has not committed.
    if creator != reader.id() && table.get(creator).state() != TxnState::Committed {
        return false;
    }

    match version.ended_by() {
        None => true,
        // Deleted or overwritten by the reader itself.
        Some(end) if end == reader.id() => false,
        // Deleted by another transaction that has committed.
        Some(end) => table.get(end).state() != TxnState::Committed,
    }
}

/// The reader sees the database as of its own begin time: writes by
/// transactions that had not committed by then stay invisible even after
/// they commit.
fn snapshot_based(table: &TransactionTable, reader: &Transaction, version: &Version) -> bool {
    let creator = version.created_by();

    // Created after the reader began.
    if creator > reader.id() {
        return false;
    }

    // Created by a transaction still running when the reader began.
    if reader.inprogress().contains(&creator) {
        return false;
    }

    // Created by another transaction that has not committed.
    if creator != reader.id() && table.get(creator).state() != TxnState::Committed {
        return false;
    }

    match version.ended_by() {
        None => true,
        // Deleted or overwritten by the reader itself.
        Some(end) if end == reader.id() => false,
        // Ended by a transaction that committed before the reader began.
        Some(end) => {
            !(end < reader.id()
                && !reader.inprogress().contains(&end)
                && table.get(end).state() == TxnState::Committed)
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::storage::Value;
    use crate::txn::TxnId;
    use proptest::prelude::*;

    fn snapshot_levels() -> impl Strategy<Value = IsolationLevel> {
        prop::sample::select(vec![
            IsolationLevel::RepeatableRead,
            IsolationLevel::Snapshot,
            IsolationLevel::Serializable,
        ])
    }

    proptest! {
        #[test]
        fn future_creators_are_never_visible(
            isolation in snapshot_levels(),
            count in 2..12u64,
            reader_index in 0..11usize,
            terminal in prop::collection::vec(prop::option::of(any::<bool>()), 12),
            ended_by_creator in any::<bool>(),
        ) {
            prop_assume!((reader_index as u64) < count - 1);

            let mut table = TransactionTable::new();
            let ids: Vec<TxnId> = (0..count).map(|_| table.begin(isolation)).collect();
            for (i, state) in terminal.iter().take(count as usize).enumerate() {
                if i == reader_index {
                    continue;
                }
                match state {
                    Some(true) => table.set_state(ids[i], TxnState::Committed),
                    Some(false) => table.set_state(ids[i], TxnState::Aborted),
                    None => {}
                }
            }

            let creator = ids[count as usize - 1];
            let mut version = Version::new(creator, Value::from("v"));
            if ended_by_creator {
                version.mark_end(creator);
            }

            let reader = table.get(ids[reader_index]);
            prop_assert!(!visible(&table, reader, &version));
        }
    }
}
