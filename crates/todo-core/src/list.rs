//! List — the top-level resource that owns a collection of items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted list.
///
/// Every field other than the store-assigned id and timestamps is optional;
/// lists carry no model-level validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
  pub id:         i64,
  pub title:      Option<String>,
  pub status:     Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The writable subset of a [`List`], used for both creation and partial
/// updates. A `None` field is left unset on create and unchanged on update.
///
/// Unknown fields in the incoming JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
  pub title:  Option<String>,
  pub status: Option<String>,
}
