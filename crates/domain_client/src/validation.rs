//! Client validation rules
//!
//! Checked in order, stopping at the first violation:
//! - first name present and non-blank
//! - last name present and non-blank
//! - email present and non-blank
//! - date of birth present
//! - annual income, when given, is a non-negative number

use tracing::warn;

use crate::client::NewClient;
use crate::error::ClientError;

/// Validator for client creation requests
pub struct ClientValidator;

impl ClientValidator {
    /// Validates a client request, returning the first violated rule
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domain_client::{ClientValidator, NewClient};
    ///
    /// let request = NewClient::default();
    /// let error = ClientValidator::validate(&request).unwrap_err();
    /// assert_eq!(error.field(), Some("firstName"));
    /// ```
    pub fn validate(client: &NewClient) -> Result<(), ClientError> {
        let result = Self::check(client);
        if let Err(ref error) = result {
            warn!(field = error.field().unwrap_or("client"), %error, "Client rejected");
        }
        result
    }

    fn check(client: &NewClient) -> Result<(), ClientError> {
        if is_blank(&client.first_name) {
            return Err(ClientError::validation("firstName", "First name is required"));
        }
        if is_blank(&client.last_name) {
            return Err(ClientError::validation("lastName", "Last name is required"));
        }
        if is_blank(&client.email) {
            return Err(ClientError::validation("email", "Email is required"));
        }
        if client.date_of_birth.is_none() {
            return Err(ClientError::validation("dateOfBirth", "Date of birth is required"));
        }
        if let Some(income) = client.annual_income {
            // NaN fails this comparison too
            if !(income >= 0.0) {
                return Err(ClientError::validation(
                    "annualIncome",
                    "Annual income must be a non-negative number",
                ));
            }
        }
        Ok(())
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid() -> NewClient {
        NewClient {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 2),
            annual_income: Some(60000.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_client_passes() {
        assert!(ClientValidator::validate(&valid()).is_ok());
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let mut client = valid();
        client.last_name = "   ".to_string();
        let error = ClientValidator::validate(&client).unwrap_err();
        assert_eq!(error.field(), Some("lastName"));
    }

    #[test]
    fn test_first_failure_wins() {
        let client = NewClient {
            email: String::new(),
            date_of_birth: None,
            ..valid()
        };
        let error = ClientValidator::validate(&client).unwrap_err();
        assert_eq!(error.field(), Some("email"));
    }

    #[test]
    fn test_negative_income_rejected() {
        let mut client = valid();
        client.annual_income = Some(-1.0);
        let error = ClientValidator::validate(&client).unwrap_err();
        assert_eq!(error.field(), Some("annualIncome"));
    }
}
