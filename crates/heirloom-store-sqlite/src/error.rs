//! Error type for `heirloom-store-sqlite`.

use heirloom_core::{ErrorKind, StoreError};
use rusqlite::{ErrorCode, ffi};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl StoreError for Error {
  fn kind(&self) -> ErrorKind {
    match self {
      Error::Database(tokio_rusqlite::Error::Rusqlite(e)) => classify(e),
      Error::Database(_) => ErrorKind::Internal,
    }
  }
}

/// Map SQLite constraint failures onto the coarse [`ErrorKind`] taxonomy.
fn classify(e: &rusqlite::Error) -> ErrorKind {
  match e {
    rusqlite::Error::SqliteFailure(err, _)
      if err.code == ErrorCode::ConstraintViolation =>
    {
      match err.extended_code {
        ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
          ErrorKind::Conflict
        }
        _ => ErrorKind::Invalid,
      }
    }
    _ => ErrorKind::Internal,
  }
}
