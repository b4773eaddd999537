//! The `SampleStore` trait — the document collection seen as a black box.
//!
//! Implemented by storage backends (e.g. `quip-store-sqlite`). The HTTP
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use uuid::Uuid;

use crate::sample::{NewSample, Sample, SamplePatch};

/// Abstraction over the sample collection: find, insert, update, remove.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait SampleStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert a new sample. The store assigns the id and returns the
  /// persisted record.
  fn insert(
    &self,
    input: NewSample,
  ) -> impl Future<Output = Result<Sample, Self::Error>> + Send + '_;

  /// Retrieve a sample by id. Returns `None` if not found.
  fn find(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Sample>, Self::Error>> + Send + '_;

  /// Up to `limit` samples with `approved == false`, oldest first.
  fn find_unapproved(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Sample>, Self::Error>> + Send + '_;

  /// Merge the set fields of `patch` into the document and stamp
  /// `updated_at`. Returns `false` when no document matched; a missing
  /// document is not an error.
  fn update(
    &self,
    id: Uuid,
    patch: SamplePatch,
    updated_at: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Remove a sample. Returns `false` when no document matched.
  fn remove(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
