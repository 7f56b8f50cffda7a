//! Error types for `heirloom-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unknown post status: {0:?}")]
  UnknownPostStatus(String),

  #[error("unknown message status: {0:?}")]
  UnknownMessageStatus(String),

  #[error("unknown member role: {0:?}")]
  UnknownMemberRole(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Coarse classification of a storage failure, used by the HTTP layer to
/// pick a status code without knowing the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A uniqueness or primary-key constraint rejected the write.
  Conflict,
  /// A not-null, foreign-key or check constraint rejected the write.
  Invalid,
  /// Anything else: I/O, connection loss, corrupt rows.
  Internal,
}

/// Implemented by every storage backend error type.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn kind(&self) -> ErrorKind;
}
