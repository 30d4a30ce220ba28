//! Client Domain Tests
//!
//! Covers the ordered required-field rules of client validation and the JSON
//! form of client records.
//!
//! # Test Organization
//!
//! - `validation_order` - fail-fast ordering of the required-field rules
//! - `client_records` - stored client helpers and serialization

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::ClientId;
use domain_client::{Client, ClientError, ClientValidator, NewClient};

fn complete_request() -> NewClient {
    NewClient {
        first_name: "Maria".to_string(),
        last_name: "Garcia".to_string(),
        email: "maria.garcia@example.com".to_string(),
        phone: Some("+1-555-0100".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1975, 9, 30),
        address: Some("12 Main St".to_string()),
        occupation: Some("Architect".to_string()),
        annual_income: Some(250000.0),
    }
}

mod validation_order {
    use super::*;

    #[test]
    fn test_empty_request_reports_first_name() {
        let error = ClientValidator::validate(&NewClient::default()).unwrap_err();
        assert_eq!(error.field(), Some("firstName"));
        assert_eq!(error.to_string(), "First name is required");
    }

    #[test]
    fn test_each_rule_in_turn() {
        let mut request = complete_request();
        assert!(ClientValidator::validate(&request).is_ok());

        request.date_of_birth = None;
        assert_eq!(ClientValidator::validate(&request).unwrap_err().field(), Some("dateOfBirth"));

        request.email = " ".to_string();
        assert_eq!(ClientValidator::validate(&request).unwrap_err().field(), Some("email"));

        request.last_name = String::new();
        assert_eq!(ClientValidator::validate(&request).unwrap_err().field(), Some("lastName"));
    }

    #[test]
    fn test_optional_contact_fields_not_required() {
        let request = NewClient {
            phone: None,
            address: None,
            occupation: None,
            annual_income: None,
            ..complete_request()
        };
        assert!(ClientValidator::validate(&request).is_ok());
    }

    #[test]
    fn test_nan_income_rejected() {
        let request = NewClient {
            annual_income: Some(f64::NAN),
            ..complete_request()
        };
        let error = ClientValidator::validate(&request).unwrap_err();
        assert!(matches!(error, ClientError::Validation { field: "annualIncome", .. }));
    }
}

mod client_records {
    use super::*;

    #[test]
    fn test_from_new_copies_fields() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let client = Client::from_new(ClientId::new(), complete_request(), now).unwrap();

        assert_eq!(client.annual_income, 250000.0);
        assert_eq!(client.occupation.as_deref(), Some("Architect"));
        assert_eq!(client.created_at, now);
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2024, 9, 29).unwrap()), 48);
        assert_eq!(client.age_on(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()), 49);
    }

    #[test]
    fn test_date_of_birth_serializes_as_calendar_date() {
        let client = Client::from_new(ClientId::new(), complete_request(), Utc::now()).unwrap();
        let json = serde_json::to_value(&client).unwrap();
        assert_eq!(json["date_of_birth"], "1975-09-30");
    }
}
