// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Connections and the command dispatcher.

use tracing::debug;

use crate::storage::{Key, Value};
use crate::txn::{TxnId, TxnState};

use super::database::Database;
use super::error::DatabaseError;

/// A client connection.
///
/// A connection holds at most one active transaction and routes the six
/// commands through the engine. Commands from distinct connections may
/// interleave freely; that interleaving is what the isolation levels
/// arbitrate.
pub struct Connection<'db> {
    db: &'db Database,
    tx: Option<TxnId>,
}

impl<'db> Connection<'db> {
    pub(crate) fn new(db: &'db Database) -> Self {
        Self { db, tx: None }
    }

    /// The active transaction, if any.
    pub fn transaction_id(&self) -> Option<TxnId> {
        self.tx
    }

    /// Begins a transaction at the database's default isolation level.
    ///
    /// # Panics
    ///
    /// Panics if a transaction is already active.
    pub fn begin(&mut self) -> TxnId {
        assert!(self.tx.is_none(), "a transaction is already active");
        let id = self.db.begin();
        self.tx = Some(id);
        id
    }

    /// Commits the active transaction.
    ///
    /// On conflict the transaction has been aborted and the error is
    /// returned; either way the connection no longer has an active
    /// transaction.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn commit(&mut self) -> Result<(), DatabaseError> {
        let id = self.active();
        self.tx = None;
        self.db.complete(id, TxnState::Committed)
    }

    /// Aborts the active transaction and clears it from the connection.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn abort(&mut self) -> Result<(), DatabaseError> {
        let id = self.active();
        self.tx = None;
        self.db.complete(id, TxnState::Aborted)
    }

    /// Reads the value of `key` visible to the active transaction.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn get(&mut self, key: impl Into<Key>) -> Result<Value, DatabaseError> {
        let id = self.active();
        self.db.read(id, &key.into())
    }

    /// Writes `value` as the new version of `key`.
    ///
    /// Succeeds whether or not the key already exists; returns the written
    /// value.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn set(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Value {
        let id = self.active();
        self.db.write(id, key.into(), value.into())
    }

    /// Deletes `key`; fails if no version of it is visible.
    ///
    /// # Panics
    ///
    /// Panics if no transaction is active.
    pub fn delete(&mut self, key: impl Into<Key>) -> Result<(), DatabaseError> {
        let id = self.active();
        self.db.remove(id, &key.into())
    }

    fn active(&self) -> TxnId {
        self.tx.expect("no active transaction")
    }

    /// Routes a text command.
    ///
    /// `begin` returns the new transaction id as decimal text; `commit`,
    /// `abort` and `delete` return empty text; `get` and `set` return the
    /// value. Unknown commands fail with `unimplemented` and change no
    /// state.
    ///
    /// # Panics
    ///
    /// Panics on a known command with the wrong argument count, and on the
    /// transaction-state violations of the typed methods.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> Result<String, DatabaseError> {
        debug!("executing {} {:?}", command, args);

        match command {
            "begin" => Ok(self.begin().to_string()),
            "commit" => self.commit().map(|()| String::new()),
            "abort" => self.abort().map(|()| String::new()),
            "get" => {
                assert_eq!(args.len(), 1, "get takes one argument");
                self.get(args[0]).map(|value| value.as_str().to_owned())
            }
            "set" => {
                assert_eq!(args.len(), 2, "set takes two arguments");
                Ok(self.set(args[0], args[1]).as_str().to_owned())
            }
            "delete" => {
                assert_eq!(args.len(), 1, "delete takes one argument");
                self.delete(args[0]).map(|()| String::new())
            }
            _ => Err(DatabaseError::Unimplemented),
        }
    }
}
