//! [`SqliteStore`] — the SQLite implementation of [`TodoStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use todo_core::{
  item::{Item, ItemPatch, NewItem},
  list::{List, ListParams},
  store::TodoStore,
};

use crate::{
  encode::{ITEM_COLUMNS, LIST_COLUMNS, RawItem, RawList, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A list/item store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

fn select_list(
  conn: &rusqlite::Connection,
  id: i64,
) -> rusqlite::Result<Option<RawList>> {
  conn
    .query_row(
      &format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = ?1"),
      rusqlite::params![id],
      RawList::from_row,
    )
    .optional()
}

/// Item lookups always carry the owning list's id.
fn select_item(
  conn: &rusqlite::Connection,
  list_id: i64,
  id: i64,
) -> rusqlite::Result<Option<RawItem>> {
  conn
    .query_row(
      &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1 AND list_id = ?2"),
      rusqlite::params![id, list_id],
      RawItem::from_row,
    )
    .optional()
}

// ─── TodoStore impl ──────────────────────────────────────────────────────────

impl TodoStore for SqliteStore {
  type Error = Error;

  // ── Lists ─────────────────────────────────────────────────────────────────

  async fn list_lists(&self) -> Result<Vec<List>> {
    let raws: Vec<RawList> = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {LIST_COLUMNS} FROM lists ORDER BY id"))?;
        let rows = stmt
          .query_map([], RawList::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawList::into_list).collect()
  }

  async fn create_list(&self, params: ListParams) -> Result<List> {
    let now = encode_dt(Utc::now());

    let raw: RawList = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO lists (title, status, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?3)",
          rusqlite::params![params.title, params.status, now],
        )?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(
          &format!("SELECT {LIST_COLUMNS} FROM lists WHERE id = ?1"),
          rusqlite::params![id],
          RawList::from_row,
        )?)
      })
      .await?;

    tracing::debug!(list_id = raw.id, "inserted list");
    raw.into_list()
  }

  async fn get_list(&self, id: i64) -> Result<Option<List>> {
    let raw: Option<RawList> = self
      .conn
      .call(move |conn| Ok(select_list(conn, id)?))
      .await?;

    raw.map(RawList::into_list).transpose()
  }

  async fn update_list(&self, id: i64, patch: ListParams) -> Result<Option<List>> {
    let now = encode_dt(Utc::now());

    let raw: Option<RawList> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE lists
           SET title      = COALESCE(?1, title),
               status     = COALESCE(?2, status),
               updated_at = ?3
           WHERE id = ?4",
          rusqlite::params![patch.title, patch.status, now, id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_list(conn, id)?)
      })
      .await?;

    raw.map(RawList::into_list).transpose()
  }

  async fn delete_list(&self, id: i64) -> Result<bool> {
    // Items go with it through `ON DELETE CASCADE`.
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM lists WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;

    if deleted > 0 {
      tracing::debug!(list_id = id, "deleted list and its items");
    }
    Ok(deleted > 0)
  }

  // ── Items ─────────────────────────────────────────────────────────────────

  async fn list_items(&self, list_id: i64) -> Result<Vec<Item>> {
    let raws: Vec<RawItem> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {ITEM_COLUMNS} FROM items WHERE list_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![list_id], RawItem::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawItem::into_item).collect()
  }

  async fn create_item(&self, list_id: i64, item: NewItem) -> Result<Item> {
    let now = encode_dt(Utc::now());

    let raw: RawItem = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO items (list_id, text, status, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?4)",
          rusqlite::params![list_id, item.text, item.status, now],
        )?;
        let id = conn.last_insert_rowid();
        Ok(conn.query_row(
          &format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = ?1"),
          rusqlite::params![id],
          RawItem::from_row,
        )?)
      })
      .await?;

    tracing::debug!(list_id, item_id = raw.id, "inserted item");
    raw.into_item()
  }

  async fn get_item(&self, list_id: i64, id: i64) -> Result<Option<Item>> {
    let raw: Option<RawItem> = self
      .conn
      .call(move |conn| Ok(select_item(conn, list_id, id)?))
      .await?;

    raw.map(RawItem::into_item).transpose()
  }

  async fn update_item(
    &self,
    list_id: i64,
    id:      i64,
    patch:   ItemPatch,
  ) -> Result<Option<Item>> {
    let now = encode_dt(Utc::now());

    let raw: Option<RawItem> = self
      .conn
      .call(move |conn| {
        let changed = conn.execute(
          "UPDATE items
           SET text       = COALESCE(?1, text),
               status     = COALESCE(?2, status),
               updated_at = ?3
           WHERE id = ?4 AND list_id = ?5",
          rusqlite::params![patch.text, patch.status, now, id, list_id],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        Ok(select_item(conn, list_id, id)?)
      })
      .await?;

    raw.map(RawItem::into_item).transpose()
  }

  async fn delete_item(&self, list_id: i64, id: i64) -> Result<bool> {
    let deleted = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM items WHERE id = ?1 AND list_id = ?2",
          rusqlite::params![id, list_id],
        )?)
      })
      .await?;

    Ok(deleted > 0)
  }
}
