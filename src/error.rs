use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
  Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
  #[error("Validation error: {0}")]
  ValidationError(String),

  #[error("Config error: {0}")]
  ConfigError(String),

  #[error("Not found: {0}")]
  NotFoundError(String),

  #[error("Transport error: {0}")]
  TransportError(String),

  #[error("HTTP {status}: {message}")]
  UpstreamStatus { status: u16, message: String },

  #[error("Unexpected response body: {0}")]
  DecodeError(String),
}

impl From<reqwest::Error> for AppError {
  fn from(err: reqwest::Error) -> Self {
      if err.is_decode() {
          Self::DecodeError(err.to_string())
      } else {
          Self::TransportError(err.to_string())
      }
  }
}

impl From<serde_json::Error> for AppError {
  fn from(err: serde_json::Error) -> Self {
      Self::DecodeError(err.to_string())
  }
}

impl From<validator::ValidationErrors> for AppError {
  fn from(err: validator::ValidationErrors) -> Self {
      Self::ValidationError(err.to_string())
  }
}

impl AppError {
  pub fn status_code(&self) -> StatusCode {
      match self {
          AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
          AppError::NotFoundError(_) => StatusCode::NOT_FOUND,
          AppError::ConfigError(_) => StatusCode::INTERNAL_SERVER_ERROR,
          AppError::TransportError(_)
          | AppError::UpstreamStatus { .. }
          | AppError::DecodeError(_) => StatusCode::BAD_GATEWAY,
      }
  }
}

impl IntoResponse for AppError {
  fn into_response(self) -> Response {
      let status = self.status_code();
      let error_message = match self {
          AppError::ConfigError(_) => "A configuration error occurred".to_string(),
          AppError::TransportError(err) => format!("Upstream unreachable: {}", err),
          other => other.to_string(),
      };

      let body = Json(json!({
          "status": "error",
          "message": error_message,
      }));

      (status, body).into_response()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn upstream_failures_map_to_bad_gateway() {
      let status = AppError::UpstreamStatus {
          status: 401,
          message: "API key missing.".into(),
      };
      assert_eq!(status.status_code(), StatusCode::BAD_GATEWAY);
      assert_eq!(status.to_string(), "HTTP 401: API key missing.");
      assert_eq!(
          AppError::TransportError("refused".into()).status_code(),
          StatusCode::BAD_GATEWAY
      );
  }

  #[test]
  fn client_errors_keep_their_status() {
      assert_eq!(
          AppError::ValidationError("id".into()).into_response().status(),
          StatusCode::BAD_REQUEST
      );
      assert_eq!(
          AppError::NotFoundError("exchange 9".into()).into_response().status(),
          StatusCode::NOT_FOUND
      );
  }

  #[test]
  fn malformed_json_is_a_decode_error() {
      let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
          .unwrap_err()
          .into();
      assert!(matches!(err, AppError::DecodeError(_)));
  }
}
