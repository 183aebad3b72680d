// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Registry of every transaction the database has begun.

use std::collections::{BTreeMap, BTreeSet};

use crate::storage::Key;

use super::transaction::{IsolationLevel, Transaction, TxnId, TxnState};

/// The transaction table.
///
/// Owns the single copy of every transaction ever begun and never prunes:
/// visibility decisions for long-lived readers may reference the state of
/// very old transactions, and ids are never recycled. All reads and
/// mutations of a transaction go through the table, so commit-time conflict
/// detection always sees current read/write sets.
#[derive(Debug)]
pub struct TransactionTable {
    transactions: BTreeMap<TxnId, Transaction>,
    next_id: u64,
}

impl TransactionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            transactions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Begins a new transaction at the given isolation level.
    ///
    /// Allocates the next id, captures the set of currently in-progress
    /// transaction ids, and registers the transaction in progress.
    pub fn begin(&mut self, isolation: IsolationLevel) -> TxnId {
        let id = TxnId(self.next_id);
        self.next_id += 1;

        let inprogress = self.inprogress_ids();
        self.transactions
            .insert(id, Transaction::new(id, isolation, inprogress));
        id
    }

    /// Looks up a transaction by id.
    ///
    /// # Panics
    ///
    /// Panics on an unregistered id: ids are never recycled, so this is a
    /// caller bug.
    pub fn get(&self, id: TxnId) -> &Transaction {
        self.transactions
            .get(&id)
            .expect("transaction id is registered")
    }

    fn get_mut(&mut self, id: TxnId) -> &mut Transaction {
        self.transactions
            .get_mut(&id)
            .expect("transaction id is registered")
    }

    /// Transitions a transaction to a terminal state.
    pub fn set_state(&mut self, id: TxnId, state: TxnState) {
        self.get_mut(id).set_state(state);
    }

    /// Ids of all transactions currently in progress.
    pub fn inprogress_ids(&self) -> BTreeSet<TxnId> {
        self.transactions
            .iter()
            .filter(|(_, txn)| txn.is_in_progress())
            .map(|(id, _)| *id)
            .collect()
    }

    /// Transactions whose id is `id` or later, in id order.
    pub fn started_at_or_after(&self, id: TxnId) -> impl Iterator<Item = &Transaction> {
        self.transactions.range(id..).map(|(_, txn)| txn)
    }

    pub(crate) fn record_read(&mut self, id: TxnId, key: Key) {
        self.get_mut(id).record_read(key);
    }

    pub(crate) fn record_write(&mut self, id: TxnId, key: Key) {
        self.get_mut(id).record_write(key);
    }

    /// Number of transactions ever begun.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if no transaction has ever begun.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl Default for TransactionTable {
    fn default() -> Self {
        Self::new()
    }
}
