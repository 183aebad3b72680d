// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Transaction error types.

/// Commit-time conflict verdicts for snapshot isolation and stricter.
///
/// The message texts are stable identities; callers match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConflictError {
    #[error("write-write conflict")]
    WriteWrite,

    #[error("read-write conflict")]
    ReadWrite,
}

/// Returned when an isolation level name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown isolation level: {0}")]
pub struct UnknownIsolationLevel(pub String);
