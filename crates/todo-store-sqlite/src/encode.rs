//! Encoding and decoding helpers between domain types and SQLite rows.
//!
//! Timestamps are stored as RFC 3339 strings; everything else maps onto a
//! native SQLite type.

use chrono::{DateTime, Utc};
use todo_core::{item::Item, list::List};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const LIST_COLUMNS: &str = "id, title, status, created_at, updated_at";

pub const ITEM_COLUMNS: &str =
  "id, list_id, text, status, created_at, updated_at";

/// Raw values read directly from a `lists` row, selected with
/// [`LIST_COLUMNS`].
pub struct RawList {
  pub id:         i64,
  pub title:      Option<String>,
  pub status:     Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawList {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      title:      row.get(1)?,
      status:     row.get(2)?,
      created_at: row.get(3)?,
      updated_at: row.get(4)?,
    })
  }

  pub fn into_list(self) -> Result<List> {
    Ok(List {
      id:         self.id,
      title:      self.title,
      status:     self.status,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw values read directly from an `items` row, selected with
/// [`ITEM_COLUMNS`].
pub struct RawItem {
  pub id:         i64,
  pub list_id:    i64,
  pub text:       String,
  pub status:     Option<String>,
  pub created_at: String,
  pub updated_at: String,
}

impl RawItem {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:         row.get(0)?,
      list_id:    row.get(1)?,
      text:       row.get(2)?,
      status:     row.get(3)?,
      created_at: row.get(4)?,
      updated_at: row.get(5)?,
    })
  }

  pub fn into_item(self) -> Result<Item> {
    Ok(Item {
      id:         self.id,
      list_id:    self.list_id,
      text:       self.text,
      status:     self.status,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn dt_roundtrip_keeps_subsecond_precision() {
    let now = Utc::now();
    assert_eq!(decode_dt(&encode_dt(now)).unwrap(), now);
  }

  #[test]
  fn decode_dt_rejects_garbage() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
