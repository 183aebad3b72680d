// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! The database engine.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::storage::{Key, Value, Version, VersionStore};
use crate::txn::{validate_commit, IsolationLevel, TransactionTable, TxnId, TxnState};

use super::config::DatabaseConfig;
use super::connection::Connection;
use super::error::DatabaseError;
use super::visibility::visible;

/// The MVCC engine.
///
/// All mutable state sits behind a single mutex held for the duration of
/// each command, so commands from concurrent connections execute atomically
/// and in submission order. Transaction ids reflect the order of begins.
pub struct Database {
    state: Mutex<State>,
    committed: AtomicU64,
    aborted: AtomicU64,
}

struct State {
    default_isolation: IsolationLevel,
    store: VersionStore,
    transactions: TransactionTable,
}

impl Database {
    /// Creates a database with the default configuration.
    pub fn new() -> Self {
        Self::with_config(DatabaseConfig::default())
    }

    /// Creates a database from `config`.
    pub fn with_config(config: DatabaseConfig) -> Self {
        Self {
            state: Mutex::new(State {
                default_isolation: config.default_isolation,
                store: VersionStore::new(),
                transactions: TransactionTable::new(),
            }),
            committed: AtomicU64::new(0),
            aborted: AtomicU64::new(0),
        }
    }

    /// Opens a new connection.
    pub fn connection(&self) -> Connection<'_> {
        Connection::new(self)
    }

    /// Transactions committed so far.
    pub fn committed_count(&self) -> u64 {
        self.committed.load(Ordering::Relaxed)
    }

    /// Transactions aborted so far, whether explicitly or by failed commit.
    pub fn aborted_count(&self) -> u64 {
        self.aborted.load(Ordering::Relaxed)
    }

    pub(crate) fn begin(&self) -> TxnId {
        let mut state = self.state.lock();
        let isolation = state.default_isolation;
        let id = state.transactions.begin(isolation);
        debug!("began transaction {} at {}", id, isolation);
        id
    }

    /// Transitions transaction `id` to the terminal state `target`,
    /// running commit validation first when committing.
    ///
    /// A failed validation aborts the transaction and returns the conflict.
    pub(crate) fn complete(&self, id: TxnId, target: TxnState) -> Result<(), DatabaseError> {
        let mut state = self.state.lock();
        let txn = state.transactions.get(id);
        assert!(txn.is_in_progress(), "transaction {id} is not in progress");

        if target == TxnState::Committed {
            if let Err(conflict) = validate_commit(&state.transactions, txn) {
                state.transactions.set_state(id, TxnState::Aborted);
                self.aborted.fetch_add(1, Ordering::Relaxed);
                debug!("aborted transaction {}: {}", id, conflict);
                return Err(conflict.into());
            }
        }

        state.transactions.set_state(id, target);
        if target == TxnState::Committed {
            self.committed.fetch_add(1, Ordering::Relaxed);
            debug!("committed transaction {}", id);
        } else {
            self.aborted.fetch_add(1, Ordering::Relaxed);
            debug!("aborted transaction {}", id);
        }
        Ok(())
    }

    /// Reads the newest version of `key` visible to transaction `id`.
    ///
    /// The key lands in the transaction's readset whether or not a version
    /// is found.
    pub(crate) fn read(&self, id: TxnId, key: &Key) -> Result<Value, DatabaseError> {
        let mut state = self.state.lock();
        state.transactions.record_read(id, key.clone());

        let state = &*state;
        let txn = state.transactions.get(id);
        for version in state.store.chain(key).iter().rev() {
            if visible(&state.transactions, txn, version) {
                return Ok(version.value().clone());
            }
        }
        Err(DatabaseError::NoSuchKey)
    }

    /// Writes `value` as the new version of `key` for transaction `id`.
    ///
    /// Every version currently visible to the transaction is marked as
    /// ended by it before the new live version is appended. Always
    /// succeeds; returns the written value.
    pub(crate) fn write(&self, id: TxnId, key: Key, value: Value) -> Value {
        let mut state = self.state.lock();
        Self::end_visible_versions(&mut state, id, &key);
        state.transactions.record_write(id, key.clone());
        state.store.append(key, Version::new(id, value.clone()));
        value
    }

    /// Deletes `key` for transaction `id` by marking every visible version
    /// as ended by it. Fails if nothing was visible.
    pub(crate) fn remove(&self, id: TxnId, key: &Key) -> Result<(), DatabaseError> {
        let mut state = self.state.lock();
        if !Self::end_visible_versions(&mut state, id, key) {
            return Err(DatabaseError::NoSuchKey);
        }
        state.transactions.record_write(id, key.clone());
        Ok(())
    }

    /// Marks every version of `key` visible to transaction `id` as ended by
    /// it. Returns true if any version was marked.
    fn end_visible_versions(state: &mut State, id: TxnId, key: &Key) -> bool {
        let txn = state.transactions.get(id);
        let ended: Vec<usize> = state
            .store
            .chain(key)
            .iter()
            .enumerate()
            .filter(|(_, version)| visible(&state.transactions, txn, version))
            .map(|(index, _)| index)
            .collect();

        let found = !ended.is_empty();
        for index in ended {
            state.store.mark_end(key, index, id);
        }
        found
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
