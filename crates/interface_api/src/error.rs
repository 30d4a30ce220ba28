//! API error handling
//!
//! Every handler returns `Result<_, ApiError>`. Domain errors convert into
//! `ApiError`, which renders as a JSON body with a matching status code:
//!
//! | Domain error               | Status |
//! |----------------------------|--------|
//! | not found                  | 404    |
//! | validation failure         | 422    |
//! | storage conflict           | 409    |
//! | internal fault, storage    | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_client::ClientError;
use domain_policy::PolicyError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, field) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", None),
            ApiError::Validation { field, .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation_error", Some(field.clone()))
            }
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict", None),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None),
            ApiError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error", None),
        };

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            e @ PortError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            PortError::Validation { message, field } => {
                ApiError::validation(field.unwrap_or_default(), message)
            }
            PortError::Conflict { message } => ApiError::Conflict(message),
            other => ApiError::Storage(other.to_string()),
        }
    }
}

impl From<PolicyError> for ApiError {
    fn from(err: PolicyError) -> Self {
        match err {
            e @ PolicyError::NotFound { .. } => ApiError::NotFound(e.to_string()),
            PolicyError::Validation(failure) => {
                ApiError::validation(failure.field.as_str(), failure.reason)
            }
            PolicyError::InternalFault(message) => ApiError::Internal(message),
            PolicyError::Persistence(port) => ApiError::from(port),
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Validation { field, message } => ApiError::validation(field, message),
            e @ ClientError::NotFound(_) => ApiError::NotFound(e.to_string()),
            ClientError::Persistence(port) => ApiError::from(port),
        }
    }
}

/// Reports the first failing field of a request DTO
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by_key(|(name, _)| name.to_string());
        match fields.into_iter().next() {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"));
                ApiError::validation(field.to_string(), message)
            }
            None => ApiError::validation("request", "Request is invalid"),
        }
    }
}
