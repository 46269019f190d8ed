//! Error types for the employee API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::models::ErrorResponse;

// == Api Error Enum ==
/// Unified error type for the employee API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request payload failed validation
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Requested employee does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Upstream service is throttling requests
    #[error("Rate limited by upstream service")]
    RateLimited {
        /// Raw `Retry-After` header value, if upstream sent one
        retry_after: Option<String>,
    },

    /// Upstream returned an unusable response or could not be reached
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status this error maps to at the facade boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Upstream(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to API callers.
    fn public_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::NotFound(_) => "Requested resource was not found.".to_string(),
            ApiError::RateLimited { .. } => {
                "Rate limit exceeded. Please try again later.".to_string()
            }
            ApiError::Upstream(msg) => msg.clone(),
            ApiError::Internal(_) => "An unexpected error occurred.".to_string(),
        }
    }
}

// == Conversions ==
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Upstream(format!("Upstream request timed out: {}", err))
        } else if err.is_decode() {
            ApiError::Upstream(format!("Upstream returned a malformed response: {}", err))
        } else {
            ApiError::Upstream(format!("Upstream request failed: {}", err))
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            warn!("Request rejected: {}", self);
        }

        let body = Json(ErrorResponse::new(status, self.public_message()));
        let mut response = (status, body).into_response();

        if let ApiError::RateLimited {
            retry_after: Some(value),
        } = &self
        {
            if let Ok(value) = HeaderValue::from_str(value) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the employee API.
pub type Result<T> = std::result::Result<T, ApiError>;
