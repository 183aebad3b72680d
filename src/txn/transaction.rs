// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Transaction types and state.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::storage::Key;

use super::error::UnknownIsolationLevel;

/// Unique transaction identifier.
///
/// Ids are issued densely from 1 and never recycled; 0 stands for "none"
/// and is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxnId(pub u64);

impl fmt::Display for TxnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Transaction isolation levels, ordered by strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum IsolationLevel {
    /// Uncommitted writes are visible to everyone; only deletion hides.
    ReadUncommitted,
    /// Readers observe committed writes plus their own.
    #[default]
    ReadCommitted,
    /// Readers see the database as of their own begin time.
    RepeatableRead,
    /// Repeatable read plus write-write conflict detection at commit.
    Snapshot,
    /// Snapshot plus read-write conflict detection at commit.
    Serializable,
}

impl IsolationLevel {
    /// The configuration name of this level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadUncommitted => "read uncommitted",
            Self::ReadCommitted => "read committed",
            Self::RepeatableRead => "repeatable read",
            Self::Snapshot => "snapshot",
            Self::Serializable => "serializable",
        }
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsolationLevel {
    type Err = UnknownIsolationLevel;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "read uncommitted" => Ok(Self::ReadUncommitted),
            "read committed" => Ok(Self::ReadCommitted),
            "repeatable read" => Ok(Self::RepeatableRead),
            "snapshot" => Ok(Self::Snapshot),
            "serializable" => Ok(Self::Serializable),
            _ => Err(UnknownIsolationLevel(name.to_owned())),
        }
    }
}

/// Transaction state.
///
/// The initial state is `InProgress`; `Aborted` and `Committed` are
/// terminal and a transaction transitions at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnState {
    InProgress,
    Aborted,
    Committed,
}

/// A transaction and the bookkeeping its isolation level relies on.
#[derive(Debug)]
pub struct Transaction {
    id: TxnId,
    isolation: IsolationLevel,
    state: TxnState,

    // Used by repeatable read and stricter.
    /// Ids of transactions in progress at the moment this one began, never
    /// including its own. Captured once; never updated.
    inprogress: BTreeSet<TxnId>,

    // Used by snapshot isolation and stricter.
    /// Keys this transaction has read during its lifetime.
    readset: BTreeSet<Key>,
    /// Keys this transaction has written or deleted during its lifetime.
    writeset: BTreeSet<Key>,
}

impl Transaction {
    pub(crate) fn new(id: TxnId, isolation: IsolationLevel, inprogress: BTreeSet<TxnId>) -> Self {
        Self {
            id,
            isolation,
            state: TxnState::InProgress,
            inprogress,
            readset: BTreeSet::new(),
            writeset: BTreeSet::new(),
        }
    }

    /// Returns the transaction id.
    #[inline]
    pub fn id(&self) -> TxnId {
        self.id
    }

    /// Returns the isolation level.
    #[inline]
    pub fn isolation(&self) -> IsolationLevel {
        self.isolation
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> TxnState {
        self.state
    }

    /// Returns true if the transaction is in progress.
    #[inline]
    pub fn is_in_progress(&self) -> bool {
        self.state == TxnState::InProgress
    }

    /// Returns true if the transaction has committed.
    #[inline]
    pub fn is_committed(&self) -> bool {
        self.state == TxnState::Committed
    }

    /// Returns true if the transaction has aborted.
    #[inline]
    pub fn is_aborted(&self) -> bool {
        self.state == TxnState::Aborted
    }

    /// Ids of transactions that were in progress when this one began.
    #[inline]
    pub fn inprogress(&self) -> &BTreeSet<TxnId> {
        &self.inprogress
    }

    /// Keys read so far.
    #[inline]
    pub fn readset(&self) -> &BTreeSet<Key> {
        &self.readset
    }

    /// Keys written or deleted so far.
    #[inline]
    pub fn writeset(&self) -> &BTreeSet<Key> {
        &self.writeset
    }

    /// Transitions to a terminal state.
    ///
    /// # Panics
    ///
    /// Panics if the transaction is already terminal, or if `state` is
    /// `InProgress`.
    pub(crate) fn set_state(&mut self, state: TxnState) {
        assert!(
            self.state == TxnState::InProgress,
            "transaction {} is already terminal",
            self.id
        );
        assert!(
            state != TxnState::InProgress,
            "transaction {} cannot transition back to in progress",
            self.id
        );
        self.state = state;
    }

    pub(crate) fn record_read(&mut self, key: Key) {
        self.readset.insert(key);
    }

    pub(crate) fn record_write(&mut self, key: Key) {
        self.writeset.insert(key);
    }
}
