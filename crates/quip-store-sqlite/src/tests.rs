//! Tests for `SqliteSampleStore` against an in-memory database.

use quip_core::{
  sample::{NewSample, SamplePatch},
  store::SampleStore,
};
use uuid::Uuid;

use crate::SqliteSampleStore;

async fn store() -> SqliteSampleStore {
  SqliteSampleStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_sample(person: &str, inserted_at: i64, approved: bool) -> NewSample {
  NewSample {
    person:      person.into(),
    category:    String::new(),
    catchphrase: "I love Nutella.".into(),
    inserted_at,
    updated_at:  inserted_at,
    approved,
  }
}

// ─── Insert / find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_id_and_round_trips() {
  let s = store().await;

  let inserted = s
    .insert(new_sample("Apple", 1_700_000_000, false))
    .await
    .unwrap();

  let fetched = s.find(inserted.id).await.unwrap();
  assert_eq!(fetched, Some(inserted));
}

#[tokio::test]
async fn inserts_get_distinct_ids() {
  let s = store().await;
  let a = s.insert(new_sample("a", 100, false)).await.unwrap();
  let b = s.insert(new_sample("b", 100, false)).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  let result = s.find(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

// ─── Unapproved listing ──────────────────────────────────────────────────────

#[tokio::test]
async fn find_unapproved_respects_limit_and_flag() {
  let s = store().await;
  s.insert(new_sample("first", 100, false)).await.unwrap();
  s.insert(new_sample("second", 200, false)).await.unwrap();
  s.insert(new_sample("third", 300, false)).await.unwrap();
  s.insert(new_sample("shipped", 50, true)).await.unwrap();

  let pending = s.find_unapproved(2).await.unwrap();
  assert_eq!(pending.len(), 2);
  assert!(pending.iter().all(|q| !q.approved));
  // Oldest first.
  assert_eq!(pending[0].person, "first");
  assert_eq!(pending[1].person, "second");
}

#[tokio::test]
async fn find_unapproved_with_zero_limit_is_empty() {
  let s = store().await;
  s.insert(new_sample("first", 100, false)).await.unwrap();
  let pending = s.find_unapproved(0).await.unwrap();
  assert!(pending.is_empty());
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_merges_only_set_fields() {
  let s = store().await;
  let sample = s.insert(new_sample("Apple", 100, false)).await.unwrap();

  let patch = SamplePatch {
    category: Some("Delectable Advice".into()),
    ..SamplePatch::default()
  };
  let matched = s.update(sample.id, patch, 500).await.unwrap();
  assert!(matched);

  let fetched = s.find(sample.id).await.unwrap().unwrap();
  assert_eq!(fetched.category, "Delectable Advice");
  assert_eq!(fetched.person, "Apple");
  assert_eq!(fetched.catchphrase, "I love Nutella.");
  assert_eq!(fetched.inserted_at, 100);
  assert_eq!(fetched.updated_at, 500);
}

#[tokio::test]
async fn update_can_flip_approved() {
  let s = store().await;
  let sample = s.insert(new_sample("Apple", 100, false)).await.unwrap();

  let patch = SamplePatch {
    approved: Some(true),
    ..SamplePatch::default()
  };
  s.update(sample.id, patch, 500).await.unwrap();

  let fetched = s.find(sample.id).await.unwrap().unwrap();
  assert!(fetched.approved);
}

#[tokio::test]
async fn update_with_empty_patch_still_stamps_updated_at() {
  let s = store().await;
  let sample = s.insert(new_sample("Apple", 100, false)).await.unwrap();

  s.update(sample.id, SamplePatch::default(), 900).await.unwrap();

  let fetched = s.find(sample.id).await.unwrap().unwrap();
  assert_eq!(fetched.updated_at, 900);
  assert_eq!(fetched.inserted_at, 100);
}

#[tokio::test]
async fn update_missing_returns_false() {
  let s = store().await;
  let matched = s
    .update(Uuid::new_v4(), SamplePatch::default(), 500)
    .await
    .unwrap();
  assert!(!matched);
}

// ─── Remove ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_deletes_the_document() {
  let s = store().await;
  let sample = s.insert(new_sample("Apple", 100, true)).await.unwrap();

  let removed = s.remove(sample.id).await.unwrap();
  assert!(removed);
  assert!(s.find(sample.id).await.unwrap().is_none());
}

#[tokio::test]
async fn remove_missing_returns_false() {
  let s = store().await;
  let removed = s.remove(Uuid::new_v4()).await.unwrap();
  assert!(!removed);
}
