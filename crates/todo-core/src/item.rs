//! Item — a resource owned by exactly one list.
//!
//! `text` is the only required attribute in the model. It is enforced by
//! [`ItemParams::validate_new`] before an insert, by
//! [`ItemParams::into_patch`] before an update, and by a `NOT NULL` column in
//! the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// A persisted item. `list_id` is fixed at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
  pub id:         i64,
  pub list_id:    i64,
  pub text:       String,
  pub status:     Option<String>,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// The writable subset of an [`Item`] as submitted by a client.
///
/// There is deliberately no `list_id` here: ownership comes from the route.
///
/// `text` keeps an explicit `null` apart from an absent key: `None` means the
/// key was missing, `Some(None)` means it was sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemParams {
  #[serde(default, deserialize_with = "present")]
  pub text:   Option<Option<String>>,
  pub status: Option<String>,
}

/// Marks a key that appeared in the payload, even with a `null` value.
fn present<'de, D, T>(d: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(d).map(Some)
}

/// A create payload that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
  pub text:   String,
  pub status: Option<String>,
}

/// An update that keeps the item valid. A `None` field is left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
  pub text:   Option<String>,
  pub status: Option<String>,
}

const TEXT_BLANK: Error = Error::Validation {
  field:  "text",
  reason: "can't be blank",
};

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

impl ItemParams {
  /// Turn the params into a [`NewItem`], requiring a non-blank `text`.
  pub fn validate_new(self) -> Result<NewItem> {
    match self.text {
      Some(Some(text)) if !is_blank(&text) => Ok(NewItem {
        text,
        status: self.status,
      }),
      _ => Err(TEXT_BLANK),
    }
  }

  /// Turn the params into an [`ItemPatch`].
  ///
  /// An absent `text` leaves the stored one alone. A `text` sent as `null` or
  /// blank would make the item invalid, so the whole update is dropped and
  /// `None` is returned; no field of it is applied.
  pub fn into_patch(self) -> Option<ItemPatch> {
    let text = match self.text {
      None => None,
      Some(Some(text)) if !is_blank(&text) => Some(text),
      Some(_) => return None,
    };
    Some(ItemPatch {
      text,
      status: self.status,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn params(json: &str) -> ItemParams { serde_json::from_str(json).unwrap() }

  #[test]
  fn validate_new_accepts_text() {
    let item = params(r#"{"text":"First Item","status":"Unstarted"}"#)
      .validate_new()
      .unwrap();
    assert_eq!(item.text, "First Item");
    assert_eq!(item.status.as_deref(), Some("Unstarted"));
  }

  #[test]
  fn validate_new_rejects_missing_text() {
    let err = params(r#"{"status":"Unstarted"}"#).validate_new().unwrap_err();
    assert_eq!(err.to_string(), "text can't be blank");
  }

  #[test]
  fn validate_new_rejects_null_and_whitespace_text() {
    for json in [r#"{"text":null}"#, r#"{"text":"   "}"#] {
      assert!(
        matches!(
          params(json).validate_new(),
          Err(Error::Validation { field: "text", .. })
        ),
        "{json}"
      );
    }
  }

  #[test]
  fn null_text_is_distinct_from_missing_text() {
    assert_eq!(params(r#"{"status":"x"}"#).text, None);
    assert_eq!(params(r#"{"text":null}"#).text, Some(None));
  }

  #[test]
  fn into_patch_allows_missing_text() {
    let patch = params(r#"{"status":"Paused"}"#).into_patch().unwrap();
    assert_eq!(patch, ItemPatch {
      text:   None,
      status: Some("Paused".into()),
    });
  }

  #[test]
  fn into_patch_keeps_supplied_text() {
    let patch = params(r#"{"text":"Edited"}"#).into_patch().unwrap();
    assert_eq!(patch.text.as_deref(), Some("Edited"));
    assert!(patch.status.is_none());
  }

  #[test]
  fn into_patch_drops_update_with_blank_or_null_text() {
    for json in [
      r#"{"text":"","status":"Started"}"#,
      r#"{"text":" ","status":"Started"}"#,
      r#"{"text":null,"status":"Started"}"#,
    ] {
      assert!(params(json).into_patch().is_none(), "{json}");
    }
  }

  #[test]
  fn params_ignore_unknown_fields() {
    let parsed = params(r#"{"text":"a","status":"b","list_id":99,"id":7}"#);
    assert_eq!(parsed, ItemParams {
      text:   Some(Some("a".into())),
      status: Some("b".into()),
    });
  }
}
