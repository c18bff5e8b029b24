//! The `TodoStore` trait.
//!
//! Implemented by storage backends (e.g. `todo-store-sqlite`). The REST layer
//! depends on this abstraction, not on any concrete backend.
//!
//! Absence of a row is never an error: lookups return `Option` and deletes
//! return `bool`, leaving the caller to decide how to surface it.

use std::future::Future;

use crate::{
  item::{Item, ItemPatch, NewItem},
  list::{List, ListParams},
};

/// Abstraction over a list/item store backend.
///
/// Deleting a list must also delete every item that belongs to it. Item
/// accessors are always scoped by the owning list's id, so an item id that
/// exists under a different list is reported as absent.
pub trait TodoStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Lists ─────────────────────────────────────────────────────────────

  /// Every list in the store, in insertion order.
  fn list_lists(
    &self,
  ) -> impl Future<Output = Result<Vec<List>, Self::Error>> + Send + '_;

  /// Persist a new list. The id and both timestamps are assigned by the store.
  fn create_list(
    &self,
    params: ListParams,
  ) -> impl Future<Output = Result<List, Self::Error>> + Send + '_;

  fn get_list(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<List>, Self::Error>> + Send + '_;

  /// Overwrite the supplied fields and refresh `updated_at`. Returns the
  /// updated list, or `None` if it does not exist.
  fn update_list(
    &self,
    id: i64,
    patch: ListParams,
  ) -> impl Future<Output = Result<Option<List>, Self::Error>> + Send + '_;

  /// Delete a list together with all of its items. Returns `false` if no
  /// such list existed.
  fn delete_list(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Items ─────────────────────────────────────────────────────────────

  /// Every item owned by `list_id`, in insertion order.
  fn list_items(
    &self,
    list_id: i64,
  ) -> impl Future<Output = Result<Vec<Item>, Self::Error>> + Send + '_;

  /// Persist a new item under `list_id`.
  fn create_item(
    &self,
    list_id: i64,
    item: NewItem,
  ) -> impl Future<Output = Result<Item, Self::Error>> + Send + '_;

  fn get_item(
    &self,
    list_id: i64,
    id: i64,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  fn update_item(
    &self,
    list_id: i64,
    id: i64,
    patch: ItemPatch,
  ) -> impl Future<Output = Result<Option<Item>, Self::Error>> + Send + '_;

  fn delete_item(
    &self,
    list_id: i64,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
