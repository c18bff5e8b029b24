//! JSON REST API for lists and their items.
//!
//! Exposes an axum [`Router`] backed by any [`todo_core::store::TodoStore`].
//! Transport concerns (binding, tracing layers) are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = todo_api::api_router(Arc::new(store));
//! ```

pub mod error;
pub mod items;
pub mod lists;

use std::sync::Arc;

use axum::{Router, routing::get};
use todo_core::store::TodoStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TodoStore + 'static,
{
  Router::new()
    // Lists
    .route("/lists", get(lists::index::<S>).post(lists::create::<S>))
    .route(
      "/lists/{id}",
      get(lists::show::<S>)
        .put(lists::update::<S>)
        .patch(lists::update::<S>)
        .delete(lists::destroy::<S>),
    )
    // Items
    .route(
      "/lists/{list_id}/items",
      get(items::index::<S>).post(items::create::<S>),
    )
    .route(
      "/lists/{list_id}/items/{id}",
      get(items::show::<S>)
        .put(items::update::<S>)
        .patch(items::update::<S>)
        .delete(items::destroy::<S>),
    )
    .with_state(store)
}
