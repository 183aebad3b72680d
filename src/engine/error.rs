// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! User-facing error type.

use crate::txn::ConflictError;

/// Errors returned to the connection caller.
///
/// The message texts are stable identities; callers match on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatabaseError {
    /// No version of the requested key is visible to the transaction.
    #[error("no such key")]
    NoSuchKey,

    /// Commit failed validation; the transaction has already been aborted.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The dispatcher does not know the command.
    #[error("unimplemented")]
    Unimplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_message_identities() {
        assert_eq!(DatabaseError::NoSuchKey.to_string(), "no such key");
        assert_eq!(
            DatabaseError::from(ConflictError::WriteWrite).to_string(),
            "write-write conflict"
        );
        assert_eq!(
            DatabaseError::from(ConflictError::ReadWrite).to_string(),
            "read-write conflict"
        );
        assert_eq!(DatabaseError::Unimplemented.to_string(), "unimplemented");
    }
}
