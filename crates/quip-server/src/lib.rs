//! HTTP layer for the quip sample service.
//!
//! Exposes an axum [`Router`] implementing the sample CRUD surface backed by
//! any [`SampleStore`], with HTTP basic auth gating the write operations.

pub mod auth;
pub mod error;
pub mod handlers;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use quip_core::store::SampleStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;
use handlers::{samples, unapproved};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from the environment's config
/// file.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  /// Public base URL, used to build `Location` headers.
  pub public_url:          String,
  pub store_path:          PathBuf,
  pub admin_username:      String,
  /// PHC string produced by argon2; see `--hash-password`.
  pub admin_password_hash: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: SampleStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
  pub auth:   Arc<AuthConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the sample service.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: SampleStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/sample", post(samples::create::<S>))
    .route(
      "/sample/id/{id}",
      get(samples::fetch::<S>)
        .post(samples::update::<S>)
        .delete(samples::remove::<S>),
    )
    .route("/unapproved", post(unapproved::submit::<S>))
    .route("/unapproved/{count}", get(unapproved::list::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
