// Copyright 2025 Ojima Abraham
// SPDX-License-Identifier: Apache-2.0

//! The engine facade: database, connections, visibility, configuration.
//!
//! Connections submit commands; the database executes each one atomically
//! against the version store and transaction table; the visibility
//! predicate decides what every reader observes.
//!
//! # Example
//!
//! ```
//! use rubidiumdb::{Database, DatabaseConfig, IsolationLevel};
//!
//! let db = Database::with_config(
//!     DatabaseConfig::default().with_default_isolation(IsolationLevel::Snapshot),
//! );
//!
//! let mut conn = db.connection();
//! conn.begin();
//! conn.set("counter", "1");
//! assert_eq!(conn.get("counter").unwrap().as_str(), "1");
//! conn.commit().unwrap();
//! ```

mod config;
mod connection;
mod database;
mod error;
mod visibility;

pub use config::DatabaseConfig;
pub use connection::Connection;
pub use database::Database;
pub use error::DatabaseError;
pub use visibility::visible;
