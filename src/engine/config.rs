// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! Database configuration.

use crate::txn::IsolationLevel;

/// Configuration for database initialization.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    /// Isolation level applied to new transactions (read committed unless
    /// set otherwise).
    pub default_isolation: IsolationLevel,
}

impl DatabaseConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the isolation level applied to new transactions.
    pub fn with_default_isolation(mut self, isolation: IsolationLevel) -> Self {
        self.default_isolation = isolation;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_read_committed() {
        assert_eq!(
            DatabaseConfig::new().default_isolation,
            IsolationLevel::ReadCommitted
        );
    }

    #[test]
    fn test_builder() {
        let config = DatabaseConfig::default().with_default_isolation(IsolationLevel::Snapshot);
        assert_eq!(config.default_isolation, IsolationLevel::Snapshot);
    }
}
