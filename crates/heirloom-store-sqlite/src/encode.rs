//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings with fixed microsecond precision
//! so that lexical order matches chronological order. Calendar dates are
//! stored as `YYYY-MM-DD`. Status flags are stored as their display names.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use heirloom_core::status::{MemberRole, MessageStatus, PostStatus};
use rusqlite::{Row, types::Type};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// The server-assigned timestamp for a row being written now.
pub fn now() -> String { encode_dt(Utc::now()) }

fn decode_dt(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
  DateTime::parse_from_rfc3339(s).map(|dt| dt.with_timezone(&Utc))
}

// ─── NaiveDate ───────────────────────────────────────────────────────────────

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn encode_date(d: NaiveDate) -> String { d.format(DATE_FORMAT).to_string() }

pub fn encode_opt_date(d: Option<NaiveDate>) -> Option<String> {
  d.map(encode_date)
}

fn decode_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
  NaiveDate::parse_from_str(s, DATE_FORMAT)
}

// ─── Column readers ──────────────────────────────────────────────────────────

/// Read a text column and parse it, reporting parse failures as a rusqlite
/// conversion error so they surface from inside the connection closure.
fn get_parsed<T, E>(
  row: &Row<'_>,
  col: &str,
  parse: impl FnOnce(&str) -> Result<T, E>,
) -> rusqlite::Result<T>
where
  E: std::error::Error + Send + Sync + 'static,
{
  let raw: String = row.get(col)?;
  parse(&raw).map_err(|e| conversion_failure(row, col, e))
}

fn get_opt_parsed<T, E>(
  row: &Row<'_>,
  col: &str,
  parse: impl FnOnce(&str) -> Result<T, E>,
) -> rusqlite::Result<Option<T>>
where
  E: std::error::Error + Send + Sync + 'static,
{
  let raw: Option<String> = row.get(col)?;
  raw
    .as_deref()
    .map(parse)
    .transpose()
    .map_err(|e| conversion_failure(row, col, e))
}

fn conversion_failure<E>(row: &Row<'_>, col: &str, e: E) -> rusqlite::Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  let idx = row.as_ref().column_index(col).unwrap_or_default();
  rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))
}

pub fn get_dt(row: &Row<'_>, col: &str) -> rusqlite::Result<DateTime<Utc>> {
  get_parsed(row, col, decode_dt)
}

pub fn get_date(row: &Row<'_>, col: &str) -> rusqlite::Result<NaiveDate> {
  get_parsed(row, col, decode_date)
}

pub fn get_opt_date(
  row: &Row<'_>,
  col: &str,
) -> rusqlite::Result<Option<NaiveDate>> {
  get_opt_parsed(row, col, decode_date)
}

pub fn get_post_status(
  row: &Row<'_>,
  col: &str,
) -> rusqlite::Result<PostStatus> {
  get_parsed(row, col, PostStatus::parse)
}

pub fn get_message_status(
  row: &Row<'_>,
  col: &str,
) -> rusqlite::Result<MessageStatus> {
  get_parsed(row, col, MessageStatus::parse)
}

pub fn get_member_role(
  row: &Row<'_>,
  col: &str,
) -> rusqlite::Result<MemberRole> {
  get_parsed(row, col, MemberRole::parse)
}
