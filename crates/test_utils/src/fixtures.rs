//! Pre-built Test Fixtures
//!
//! Consistent, predictable data for unit and integration tests. The
//! reference client is 44 on [`TemporalFixtures::today`], which makes a
//! 20-year 100,000 term policy cost 294.5333...

use chrono::{NaiveDate, Utc};
use core_kernel::{ClientId, FixedClock};
use domain_client::{Client, NewClient};
use domain_policy::{PolicyApplication, PolicyType};

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The "current" day used by fixed clocks (June 1, 2024)
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    /// Standard policy start date (Jan 1, 2024)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// A leap-day start date
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    pub fn fixed_clock() -> FixedClock {
        FixedClock::new(Self::today())
    }
}

/// Fixture for clients
pub struct ClientFixtures;

impl ClientFixtures {
    /// Registration request for the reference client
    pub fn new_client() -> NewClient {
        NewClient {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: Some("+1-555-0100".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
            address: Some("1 Main Street".to_string()),
            occupation: Some("Engineer".to_string()),
            annual_income: Some(60000.0),
        }
    }

    /// The reference client: born 1980-01-01, earning 60,000
    pub fn reference_client() -> Client {
        Client::from_new(ClientId::new_v7(), Self::new_client(), Utc::now())
            .expect("reference client has a date of birth")
    }

    /// A client earning above the income discount cap
    pub fn high_earner() -> Client {
        let mut client = Self::reference_client();
        client.annual_income = 500_000.0;
        client
    }
}

/// Fixture for policy applications
pub struct ApplicationFixtures;

impl ApplicationFixtures {
    /// 20-year, 100,000 term policy starting on [`TemporalFixtures::policy_start`]
    pub fn term_life() -> PolicyApplication {
        Self::for_type(PolicyType::TermLife)
    }

    /// A valid application for the given type with every type-specific
    /// attribute it needs
    pub fn for_type(policy_type: PolicyType) -> PolicyApplication {
        let mut application = PolicyApplication {
            policy_type: Some(policy_type.as_str().to_string()),
            coverage_amount: Some(100000.0),
            start_date: Some("2024-01-01".to_string()),
            beneficiary_name: Some("John Doe".to_string()),
            beneficiary_relation: Some("Spouse".to_string()),
            ..Default::default()
        };
        match policy_type {
            PolicyType::TermLife => application.term_years = Some(20),
            PolicyType::UniversalLife => application.interest_rate = Some(4.0),
            PolicyType::VariableLife => application.investment_component = Some(25000.0),
            _ => {}
        }
        application
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_client_age() {
        let client = ClientFixtures::reference_client();
        assert_eq!(client.age_on(TemporalFixtures::today()), 44);
    }

    #[test]
    fn test_every_type_fixture_names_its_type() {
        for policy_type in PolicyType::ALL {
            let application = ApplicationFixtures::for_type(policy_type);
            assert_eq!(application.policy_type.as_deref(), Some(policy_type.as_str()));
        }
    }
}
