//! Handlers for the `/sample` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/sample/id/{id}` | Public; only approved samples are served |
//! | `POST`   | `/sample` | Auth; creates, returns the new id as plain text |
//! | `POST`   | `/sample/id/{id}` | Auth; partial update |
//! | `DELETE` | `/sample/id/{id}` | Auth |

use axum::{
  Json,
  extract::{Path, State},
  http::{StatusCode, header},
  response::{IntoResponse, Response},
};
use bytes::Bytes;
use chrono::Utc;
use quip_core::{
  sample::{Sample, SampleDraft, SamplePatch},
  store::SampleStore,
};
use uuid::Uuid;

use crate::{AppState, ServerConfig, auth::Authenticated, error::Error};

/// Parse the id path segment as a store identifier.
fn parse_id(raw: &str) -> Result<Uuid, Error> {
  Uuid::parse_str(raw).map_err(|_| Error::MalformedId)
}

/// Canonical URL for a sample id; used for `Location` headers.
fn sample_url(config: &ServerConfig, id: Uuid) -> String {
  format!("{}/sample/id/{}", config.public_url, id)
}

// ─── Fetch ────────────────────────────────────────────────────────────────────

/// `GET /sample/id/{id}` — 404 if absent, 400 until approved.
pub async fn fetch<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<Json<Sample>, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;

  let sample = state
    .store
    .find(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or(Error::NotFound)?;

  if !sample.approved {
    return Err(Error::NotApproved);
  }

  Ok(Json(sample))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /sample` — requires `person` and `catchphrase`, in that order of
/// complaint. Creation timestamps are authoritative here, whatever the
/// client sent. Responds 201 with a `Location` header and the new id as the
/// plain-text body.
pub async fn create<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  body: Bytes,
) -> Result<Response, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let draft: SampleDraft = serde_json::from_slice(&body)?;

  if draft.person.is_none() {
    return Err(Error::MissingField("person"));
  }
  if draft.catchphrase.is_none() {
    return Err(Error::MissingField("catchphrase"));
  }

  let now = Utc::now().timestamp();
  let mut input = draft.into_new_sample(now);
  input.inserted_at = now;
  input.updated_at = now;

  let sample = state
    .store
    .insert(input)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  tracing::debug!(id = %sample.id, "created sample");

  Ok(
    (
      StatusCode::CREATED,
      [(header::LOCATION, sample_url(&state.config, sample.id))],
      sample.id.to_string(),
    )
      .into_response(),
  )
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `POST /sample/id/{id}` — merge the supplied fields into the document and
/// refresh `updated_at`. Fields outside the client-settable set are ignored;
/// in particular `inserted_at` cannot be overwritten. Updating an id with no
/// document behind it is a no-op, not an error.
pub async fn update<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  body: Bytes,
) -> Result<Response, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;
  let patch: SamplePatch = serde_json::from_slice(&body)?;

  let now = Utc::now().timestamp();
  state
    .store
    .update(id, patch, now)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(
    (
      StatusCode::CREATED,
      [(header::LOCATION, sample_url(&state.config, id))],
    )
      .into_response(),
  )
}

// ─── Remove ───────────────────────────────────────────────────────────────────

/// `DELETE /sample/id/{id}` — 200 whether or not the document existed.
pub async fn remove<S>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
) -> Result<StatusCode, Error>
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let id = parse_id(&id)?;

  state
    .store
    .remove(id)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;

  Ok(StatusCode::OK)
}
