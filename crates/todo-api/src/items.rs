//! Handlers for `/lists/:list_id/items` endpoints.
//!
//! Every handler resolves the parent list first; a missing or malformed
//! `list_id` is a 404 before anything else is attempted. Items are then looked
//! up scoped to that list, so an id that belongs to another list is a 404 too.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/lists/:list_id/items` | Items of the list |
//! | `POST`   | `/lists/:list_id/items` | Body: `{"item": {"text":..,"status":..}}`; 201, or 422 without `text` |
//! | `GET`    | `/lists/:list_id/items/:id` | |
//! | `PUT`/`PATCH` | `/lists/:list_id/items/:id` | Partial update; 204 |
//! | `DELETE` | `/lists/:list_id/items/:id` | 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use todo_core::{
  item::{Item, ItemParams},
  list::List,
  store::TodoStore,
};

use crate::{
  error::{ApiError, parse_id},
  lists::find_list,
};

/// Request body for create and update: the writable fields wrapped under
/// an `item` key. Any `list_id` the client sends is ignored.
#[derive(Debug, Deserialize)]
pub struct ItemBody {
  pub item: ItemParams,
}

fn item_not_found(list_id: i64, id: i64) -> ApiError {
  ApiError::NotFound(format!("item {id} not found in list {list_id}"))
}

async fn find_item<S>(store: &S, list: &List, raw_id: &str) -> Result<Item, ApiError>
where
  S: TodoStore,
{
  let id = parse_id(raw_id, "item")?;
  store
    .get_item(list.id, id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| item_not_found(list.id, id))
}

// ─── Index ────────────────────────────────────────────────────────────────────

/// `GET /lists/:list_id/items`
pub async fn index<S>(
  State(store): State<Arc<S>>,
  Path(list_id): Path<String>,
) -> Result<Json<Vec<Item>>, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &list_id).await?;
  let items = store.list_items(list.id).await.map_err(ApiError::store)?;
  Ok(Json(items))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /lists/:list_id/items` — returns 201 + the stored [`Item`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Path(list_id): Path<String>,
  body: Result<Json<ItemBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &list_id).await?;
  let Json(body) = body?;
  let new_item = body.item.validate_new()?;

  let item = store
    .create_item(list.id, new_item)
    .await
    .map_err(ApiError::store)?;
  tracing::debug!(list_id = list.id, item_id = item.id, "created item");
  Ok((StatusCode::CREATED, Json(item)))
}

// ─── Show ─────────────────────────────────────────────────────────────────────

/// `GET /lists/:list_id/items/:id`
pub async fn show<S>(
  State(store): State<Arc<S>>,
  Path((list_id, id)): Path<(String, String)>,
) -> Result<Json<Item>, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &list_id).await?;
  Ok(Json(find_item(store.as_ref(), &list, &id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT|PATCH /lists/:list_id/items/:id` — 204 on success.
///
/// An update whose `text` is `null` or blank is dropped as a whole: nothing
/// is written and the response is still 204.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path((list_id, id)): Path<(String, String)>,
  body: Result<Json<ItemBody>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &list_id).await?;
  let item = find_item(store.as_ref(), &list, &id).await?;
  let Json(body) = body?;

  let Some(patch) = body.item.into_patch() else {
    tracing::debug!(
      list_id = list.id,
      item_id = item.id,
      "skipped item update with blank text"
    );
    return Ok(StatusCode::NO_CONTENT);
  };

  store
    .update_item(list.id, item.id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| item_not_found(list.id, item.id))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Destroy ──────────────────────────────────────────────────────────────────

/// `DELETE /lists/:list_id/items/:id` — 204 on success.
pub async fn destroy<S>(
  State(store): State<Arc<S>>,
  Path((list_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &list_id).await?;
  let item = find_item(store.as_ref(), &list, &id).await?;

  if !store
    .delete_item(list.id, item.id)
    .await
    .map_err(ApiError::store)?
  {
    return Err(item_not_found(list.id, item.id));
  }
  tracing::debug!(list_id = list.id, item_id = item.id, "deleted item");
  Ok(StatusCode::NO_CONTENT)
}
