// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! RubidiumDB: an in-memory multi-version concurrency control (MVCC)
//! key-value engine with the five SQL-standard isolation levels.
//!
//! Writes append versions instead of mutating in place; reads walk each
//! key's version chain under a visibility predicate parameterized by the
//! reader's isolation level and its begin-time snapshot of in-progress
//! transactions. Snapshot and serializable transactions are validated at
//! commit time against the committed transactions that overlapped them.
//!
//! # Example
//!
//! ```
//! use rubidiumdb::{Database, DatabaseError};
//!
//! let db = Database::new();
//!
//! let mut writer = db.connection();
//! writer.begin();
//! writer.set("x", "hey");
//!
//! // Read committed: the write is invisible elsewhere until commit.
//! let mut reader = db.connection();
//! reader.begin();
//! assert_eq!(reader.get("x"), Err(DatabaseError::NoSuchKey));
//!
//! writer.commit().unwrap();
//! assert_eq!(reader.get("x").unwrap().as_str(), "hey");
//! ```

pub mod engine;
pub mod storage;
pub mod txn;

pub use engine::{visible, Connection, Database, DatabaseConfig, DatabaseError};
pub use storage::{Key, Value, Version, VersionStore};
pub use txn::{
    ConflictError, IsolationLevel, Transaction, TransactionTable, TxnId, TxnState,
    UnknownIsolationLevel,
};
