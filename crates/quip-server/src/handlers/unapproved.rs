//! Handlers for the `/unapproved` moderation endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/unapproved/{n}` | Public; up to `n` samples pending approval |
//! | `POST` | `/unapproved` | Auth; batch submission, `application/json` only |

use axum::{
  Json,
  extract::{Path, State},
  http::{HeaderMap, StatusCode, header},
};
use bytes::Bytes;
use chrono::Utc;
use quip_core::{
  sample::{Sample, SampleDraft},
  store::SampleStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, auth::Authenticated, error::Error};

/// Wire wrapper for the unapproved listing: `{"samples": [...]}`.
#[derive(Debug, Serialize)]
pub struct SampleListing {
  pub samples: Vec<Sample>,
}

/// Wire wrapper for a batch submission: `{"samples": [{...}, ...]}`.
#[derive(Debug, Deserialize)]
pub struct SampleBatch {
  pub samples: Vec<SampleDraft>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /unapproved/{n}` — up to `n` samples pending approval, oldest first.
/// The count must parse as a non-negative integer.
pub async fn list<S>(
  State(state): State<AppState<S>>,
  Path(count): Path<String>,
) -> Result<Json<SampleListing>, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let limit: usize = count.parse().map_err(|_| Error::InvalidCount)?;

  let samples = state
    .store
    .find_unapproved(limit)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(Json(SampleListing { samples }))
}

// ─── Submit ───────────────────────────────────────────────────────────────────

/// `POST /unapproved` — accept a batch of drafts and insert each one with
/// the per-item defaults applied. Items need no required fields; whatever is
/// missing is defaulted. A store failure aborts the request with the batch
/// partially inserted.
pub async fn submit<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<StatusCode, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  if !is_json(&headers) {
    return Err(Error::WrongContentType);
  }

  let batch: SampleBatch = serde_json::from_slice(&body)?;

  let now = Utc::now().timestamp();
  let count = batch.samples.len();
  for draft in batch.samples {
    state
      .store
      .insert(draft.into_new_sample(now))
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;
  }

  tracing::debug!(count, "accepted unapproved batch");

  Ok(StatusCode::CREATED)
}

/// Media-type check; parameters such as `; charset=utf-8` are tolerated.
fn is_json(headers: &HeaderMap) -> bool {
  headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.split(';').next())
    .is_some_and(|mt| mt.trim().eq_ignore_ascii_case("application/json"))
}
