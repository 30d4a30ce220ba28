//! Client domain errors

use thiserror::Error;

use core_kernel::{ClientId, PortError};

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    /// A client field violates a required-field rule
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Client with the given ID was not found
    #[error("Client not found with ID: {0}")]
    NotFound(ClientId),

    /// The storage collaborator failed
    #[error("Client storage error: {0}")]
    Persistence(PortError),
}

impl ClientError {
    /// Creates a validation error for the named field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ClientError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Returns the offending field for validation errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClientError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<PortError> for ClientError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Validation { message, .. } => ClientError::Validation {
                field: "client",
                message,
            },
            other => ClientError::Persistence(other),
        }
    }
}
