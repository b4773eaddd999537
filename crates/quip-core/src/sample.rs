//! Sample types — the single entity of the quip service.
//!
//! A sample is a person/catchphrase/category record with an approval flag.
//! Unapproved samples stay invisible through the public single-item read
//! endpoint until a moderator flips `approved`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ─── Sample ──────────────────────────────────────────────────────────────────

/// A persisted sample. The id is assigned by the store on insert.
///
/// String fields are always materialised — an absent category is stored and
/// rendered as `""`, never as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
  pub id:          Uuid,
  pub person:      String,
  pub category:    String,
  pub catchphrase: String,
  /// Unix timestamp; set once at creation and never changed.
  pub inserted_at: i64,
  /// Unix timestamp; refreshed on every mutation.
  pub updated_at:  i64,
  pub approved:    bool,
}

// ─── NewSample ───────────────────────────────────────────────────────────────

/// Input to [`crate::store::SampleStore::insert`].
/// The id is always assigned by the store; it is not accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSample {
  pub person:      String,
  pub category:    String,
  pub catchphrase: String,
  pub inserted_at: i64,
  pub updated_at:  i64,
  pub approved:    bool,
}

// ─── SampleDraft ─────────────────────────────────────────────────────────────

/// The inbound wire shape of a sample: every field optional.
///
/// Unknown keys in the body are ignored rather than rejected, since clients
/// round-trip whole serialised documents back through the write endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SampleDraft {
  pub person:      Option<String>,
  pub category:    Option<String>,
  pub catchphrase: Option<String>,
  pub inserted_at: Option<i64>,
  pub updated_at:  Option<i64>,
  pub approved:    Option<bool>,
}

impl SampleDraft {
  /// Apply the defaulting rules and produce a [`NewSample`]: missing strings
  /// become `""`, a missing `approved` becomes `false`, and missing
  /// timestamps become `now`. Client-supplied values are honored when
  /// present.
  pub fn into_new_sample(self, now: i64) -> NewSample {
    NewSample {
      person:      self.person.unwrap_or_default(),
      category:    self.category.unwrap_or_default(),
      catchphrase: self.catchphrase.unwrap_or_default(),
      inserted_at: self.inserted_at.unwrap_or(now),
      updated_at:  self.updated_at.unwrap_or(now),
      approved:    self.approved.unwrap_or(false),
    }
  }
}

// ─── SamplePatch ─────────────────────────────────────────────────────────────

/// The client-settable field set for a partial update.
///
/// Timestamps are deliberately absent: `inserted_at` is immutable and
/// `updated_at` is stamped by the server on every merge.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamplePatch {
  pub person:      Option<String>,
  pub category:    Option<String>,
  pub catchphrase: Option<String>,
  pub approved:    Option<bool>,
}

#[cfg(test)]
mod tests {
  use super::*;

  const NOW: i64 = 1_700_000_000;

  #[test]
  fn draft_defaults_apply() {
    let sample = SampleDraft::default().into_new_sample(NOW);
    assert_eq!(sample.person, "");
    assert_eq!(sample.category, "");
    assert_eq!(sample.catchphrase, "");
    assert_eq!(sample.inserted_at, NOW);
    assert_eq!(sample.updated_at, NOW);
    assert!(!sample.approved);
  }

  #[test]
  fn draft_honors_client_values() {
    let draft = SampleDraft {
      person:      Some("Apple".into()),
      category:    Some("Cherry Pie".into()),
      catchphrase: Some("Banana".into()),
      inserted_at: Some(1234),
      updated_at:  Some(1234),
      approved:    Some(true),
    };
    let sample = draft.into_new_sample(NOW);
    assert_eq!(sample.person, "Apple");
    assert_eq!(sample.category, "Cherry Pie");
    assert_eq!(sample.catchphrase, "Banana");
    assert_eq!(sample.inserted_at, 1234);
    assert_eq!(sample.updated_at, 1234);
    assert!(sample.approved);
  }

  #[test]
  fn draft_with_backdated_insert_still_stamps_update_to_now() {
    let draft = SampleDraft {
      inserted_at: Some(5),
      ..SampleDraft::default()
    };
    let sample = draft.into_new_sample(NOW);
    assert_eq!(sample.inserted_at, 5);
    assert_eq!(sample.updated_at, NOW);
  }

  fn sample() -> Sample {
    Sample {
      id:          Uuid::new_v4(),
      person:      "Apple".into(),
      category:    String::new(),
      catchphrase: "I love Nutella.".into(),
      inserted_at: NOW,
      updated_at:  NOW,
      approved:    false,
    }
  }

  #[test]
  fn serialises_all_fields_with_empty_strings() {
    let value = serde_json::to_value(sample()).unwrap();
    let object = value.as_object().unwrap();
    for key in [
      "id",
      "person",
      "category",
      "catchphrase",
      "inserted_at",
      "updated_at",
      "approved",
    ] {
      assert!(object.contains_key(key), "missing key {key}");
    }
    assert_eq!(object["category"], "");
  }

  #[test]
  fn json_round_trip_is_lossless() {
    let original = sample();
    let json = serde_json::to_string(&original).unwrap();
    let decoded: Sample = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
  }

  #[test]
  fn patch_ignores_unknown_and_server_controlled_keys() {
    let patch: SamplePatch =
      serde_json::from_str(r#"{"person":"Pari","inserted_at":42,"_id":"x"}"#)
        .unwrap();
    assert_eq!(patch.person.as_deref(), Some("Pari"));
    assert!(patch.category.is_none());
    assert!(patch.catchphrase.is_none());
    assert!(patch.approved.is_none());
  }
}
