//! Error type and axum `IntoResponse` implementation.
//!
//! Responses are plain text. Several bodies are fixed strings that existing
//! clients match on exactly; they must not be reworded.

use axum::{
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("Not authorized")]
  Unauthorized,

  #[error("ID not in valid format.")]
  MalformedId,

  #[error("No sample with matching ID found.")]
  NotFound,

  #[error("sample has not been approved.")]
  NotApproved,

  #[error("Missing required field :{0}")]
  MissingField(&'static str),

  #[error("Content-Type must be application/json.")]
  WrongContentType,

  #[error("Sample count must be a non-negative integer.")]
  InvalidCount,

  #[error("Malformed JSON body: {0}")]
  BadBody(#[from] serde_json::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Unauthorized => {
        let mut res =
          (StatusCode::UNAUTHORIZED, self.to_string()).into_response();
        res.headers_mut().insert(
          header::WWW_AUTHENTICATE,
          HeaderValue::from_static("Basic realm=\"quip\""),
        );
        res
      }
      Error::MalformedId
      | Error::NotApproved
      | Error::MissingField(_)
      | Error::WrongContentType
      | Error::InvalidCount
      | Error::BadBody(_) => {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
      }
      Error::NotFound => {
        (StatusCode::NOT_FOUND, self.to_string()).into_response()
      }
      Error::Store(e) => {
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
      }
    }
  }
}
