//! Policy domain errors

use thiserror::Error;

use core_kernel::{PortError, TemporalError};
use domain_client::ClientError;

use crate::strategy::PricingError;
use crate::validation::ValidationFailure;

/// Errors that can occur in the policy domain
#[derive(Debug, Error)]
pub enum PolicyError {
    /// A referenced client or policy does not exist
    #[error("{entity} not found with ID: {id}")]
    NotFound { entity: String, id: String },

    /// The application broke a validation rule
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The engine reached a state valid input cannot produce
    #[error("Internal fault: {0}")]
    InternalFault(String),

    /// The storage collaborator failed
    #[error("Policy storage error: {0}")]
    Persistence(PortError),
}

impl PolicyError {
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        PolicyError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PolicyError::NotFound { .. })
    }
}

impl From<PortError> for PolicyError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => PolicyError::NotFound {
                entity: entity_type,
                id,
            },
            other => PolicyError::Persistence(other),
        }
    }
}

impl From<PricingError> for PolicyError {
    fn from(err: PricingError) -> Self {
        PolicyError::InternalFault(err.to_string())
    }
}

impl From<TemporalError> for PolicyError {
    fn from(err: TemporalError) -> Self {
        PolicyError::InternalFault(err.to_string())
    }
}

impl From<ClientError> for PolicyError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound(id) => PolicyError::not_found("Client", id),
            ClientError::Persistence(port) => PolicyError::from(port),
            other => PolicyError::InternalFault(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyType;
    use crate::validation::PolicyField;

    #[test]
    fn test_port_not_found_maps_to_not_found() {
        let err = PolicyError::from(PortError::not_found("Policy", "POL-1"));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Policy not found with ID: POL-1");
    }

    #[test]
    fn test_pricing_error_is_internal_fault() {
        let err = PolicyError::from(PricingError::MissingAttribute {
            policy_type: PolicyType::VariableLife,
            field: PolicyField::InvestmentComponent,
        });
        assert!(matches!(err, PolicyError::InternalFault(_)));
    }

    #[test]
    fn test_validation_message_is_the_reason() {
        let err = PolicyError::from(ValidationFailure::new(
            PolicyField::StartDate,
            "Start date is required",
        ));
        assert_eq!(err.to_string(), "Start date is required");
    }
}
