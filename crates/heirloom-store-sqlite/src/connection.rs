//! Connection setup and the small query helpers every store method goes
//! through. Each helper runs exactly one statement on the connection thread.

use std::path::Path;

use rusqlite::{OptionalExtension as _, Params, Row};
use tokio_rusqlite::Connection;

use crate::Result;

/// Maps one result row onto a domain type.
pub type RowMapper<T> = fn(&Row<'_>) -> rusqlite::Result<T>;

/// Open (or create) a database at `path` and apply `schema`.
pub async fn open(path: &Path, schema: &'static str) -> Result<Connection> {
  let conn = Connection::open(path).await?;
  init_schema(&conn, schema).await?;
  tracing::debug!(path = %path.display(), "opened sqlite store");
  Ok(conn)
}

/// Open a private in-memory database and apply `schema`.
pub async fn open_in_memory(schema: &'static str) -> Result<Connection> {
  let conn = Connection::open_in_memory().await?;
  init_schema(&conn, schema).await?;
  Ok(conn)
}

async fn init_schema(conn: &Connection, schema: &'static str) -> Result<()> {
  conn
    .call(move |conn| {
      conn.execute_batch(schema)?;
      Ok(())
    })
    .await?;
  Ok(())
}

/// Run a statement and collect every row it yields.
pub async fn fetch_all<T, P>(
  conn: &Connection,
  sql: &'static str,
  params: P,
  map: RowMapper<T>,
) -> Result<Vec<T>>
where
  T: Send + 'static,
  P: Params + Send + 'static,
{
  let rows = conn
    .call(move |conn| {
      let mut stmt = conn.prepare(sql)?;
      let rows = stmt
        .query_map(params, map)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      Ok(rows)
    })
    .await?;
  Ok(rows)
}

/// Run a statement that must yield exactly one row, typically an
/// `INSERT … RETURNING`.
pub async fn fetch_one<T, P>(
  conn: &Connection,
  sql: &'static str,
  params: P,
  map: RowMapper<T>,
) -> Result<T>
where
  T: Send + 'static,
  P: Params + Send + 'static,
{
  let row = conn
    .call(move |conn| Ok(conn.query_row(sql, params, map)?))
    .await?;
  Ok(row)
}

/// Run a statement that yields at most one row, typically an
/// `UPDATE … RETURNING` whose `WHERE` clause may match nothing.
pub async fn fetch_optional<T, P>(
  conn: &Connection,
  sql: &'static str,
  params: P,
  map: RowMapper<T>,
) -> Result<Option<T>>
where
  T: Send + 'static,
  P: Params + Send + 'static,
{
  let row = conn
    .call(move |conn| Ok(conn.query_row(sql, params, map).optional()?))
    .await?;
  Ok(row)
}

/// Run a statement and return the number of affected rows.
pub async fn execute<P>(
  conn: &Connection,
  sql: &'static str,
  params: P,
) -> Result<usize>
where
  P: Params + Send + 'static,
{
  let changed = conn
    .call(move |conn| Ok(conn.execute(sql, params)?))
    .await?;
  Ok(changed)
}
