//! SQLite backend for the Heirloom record service.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. Each variant gets its own store type
//! and its own database file.

mod connection;
mod encode;
mod harmony;
mod legacy;
mod schema;

pub mod error;

pub use error::{Error, Result};
pub use harmony::SqliteHarmonyStore;
pub use legacy::SqliteLegacyStore;

#[cfg(test)]
mod tests;
