//! Integration tests for both SQLite stores against in-memory databases.
