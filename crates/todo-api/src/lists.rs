//! Handlers for `/lists` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/lists` | Every list |
//! | `POST`   | `/lists` | Body: `{"list": {"title":..,"status":..}}`; returns 201 |
//! | `GET`    | `/lists/:id` | 404 if not found |
//! | `PUT`/`PATCH` | `/lists/:id` | Partial update; 204 |
//! | `DELETE` | `/lists/:id` | Deletes the list and its items; 204 |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use todo_core::{
  list::{List, ListParams},
  store::TodoStore,
};

use crate::error::{ApiError, parse_id};

/// Request body for create and update: the writable fields wrapped under
/// a `list` key.
#[derive(Debug, Deserialize)]
pub struct ListBody {
  pub list: ListParams,
}

/// Resolve `raw_id` to an existing list or fail with [`ApiError::NotFound`].
pub(crate) async fn find_list<S>(store: &S, raw_id: &str) -> Result<List, ApiError>
where
  S: TodoStore,
{
  let id = parse_id(raw_id, "list")?;
  store
    .get_list(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("list {id} not found")))
}

// ─── Index ────────────────────────────────────────────────────────────────────

/// `GET /lists`
pub async fn index<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<List>>, ApiError>
where
  S: TodoStore,
{
  let lists = store.list_lists().await.map_err(ApiError::store)?;
  Ok(Json(lists))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /lists` — returns 201 + the stored [`List`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<ListBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: TodoStore,
{
  let list = store.create_list(body.list).await.map_err(ApiError::store)?;
  tracing::debug!(list_id = list.id, "created list");
  Ok((StatusCode::CREATED, Json(list)))
}

// ─── Show ─────────────────────────────────────────────────────────────────────

/// `GET /lists/:id`
pub async fn show<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<List>, ApiError>
where
  S: TodoStore,
{
  Ok(Json(find_list(store.as_ref(), &id).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT|PATCH /lists/:id` — 204 on success.
///
/// The list is resolved before the body is looked at, so a missing list is a
/// 404 even when the body is malformed.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<ListBody>, JsonRejection>,
) -> Result<StatusCode, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &id).await?;
  let Json(body) = body?;

  store
    .update_list(list.id, body.list)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("list {} not found", list.id)))?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Destroy ──────────────────────────────────────────────────────────────────

/// `DELETE /lists/:id` — 204 on success; the list's items are removed too.
pub async fn destroy<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: TodoStore,
{
  let list = find_list(store.as_ref(), &id).await?;

  if !store.delete_list(list.id).await.map_err(ApiError::store)? {
    return Err(ApiError::NotFound(format!("list {} not found", list.id)));
  }
  tracing::debug!(list_id = list.id, "deleted list");
  Ok(StatusCode::NO_CONTENT)
}
