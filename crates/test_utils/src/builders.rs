//! Test Data Builders
//!
//! Builders let tests set only the fields they care about.

use chrono::{Datelike, NaiveDate, Utc};
use core_kernel::ClientId;
use domain_client::Client;
use domain_policy::{PolicyApplication, PolicyTerms, PolicyType, PolicyValidator};

use crate::fixtures::{ApplicationFixtures, ClientFixtures};

/// Builder for stored clients
pub struct TestClientBuilder {
    client: Client,
}

impl Default for TestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClientBuilder {
    /// Starts from the reference client
    pub fn new() -> Self {
        Self {
            client: ClientFixtures::reference_client(),
        }
    }

    pub fn with_id(mut self, id: ClientId) -> Self {
        self.client.id = id;
        self
    }

    pub fn with_date_of_birth(mut self, date_of_birth: NaiveDate) -> Self {
        self.client.date_of_birth = date_of_birth;
        self
    }

    pub fn with_annual_income(mut self, income: f64) -> Self {
        self.client.annual_income = income;
        self
    }

    /// Sets the date of birth so the client is `age` on `as_of`
    pub fn aged(mut self, age: u32, as_of: NaiveDate) -> Self {
        self.client.date_of_birth = as_of
            .with_year(as_of.year() - age as i32)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(as_of.year() - age as i32, 2, 28).unwrap());
        self
    }

    pub fn build(mut self) -> Client {
        self.client.updated_at = Utc::now();
        self.client
    }
}

/// Builder for policy applications
pub struct TestApplicationBuilder {
    application: PolicyApplication,
}

impl TestApplicationBuilder {
    /// Starts from a valid application of the given type
    pub fn new(policy_type: PolicyType) -> Self {
        Self {
            application: ApplicationFixtures::for_type(policy_type),
        }
    }

    pub fn term_life() -> Self {
        Self::new(PolicyType::TermLife)
    }

    pub fn with_coverage(mut self, amount: f64) -> Self {
        self.application.coverage_amount = Some(amount);
        self
    }

    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.application.start_date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    pub fn with_raw_start_date(mut self, raw: impl Into<String>) -> Self {
        self.application.start_date = Some(raw.into());
        self
    }

    pub fn with_term_years(mut self, years: i32) -> Self {
        self.application.term_years = Some(years);
        self
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.application.interest_rate = Some(rate);
        self
    }

    pub fn with_investment_component(mut self, amount: f64) -> Self {
        self.application.investment_component = Some(amount);
        self
    }

    pub fn convertible(mut self, convertible: bool) -> Self {
        self.application.convertible = Some(convertible);
        self
    }

    pub fn without_beneficiary(mut self) -> Self {
        self.application.beneficiary_name = None;
        self.application.beneficiary_relation = None;
        self
    }

    pub fn build(self) -> PolicyApplication {
        self.application
    }

    /// Builds and validates, panicking if the application is invalid
    pub fn build_terms(self) -> PolicyTerms {
        PolicyValidator::validate(&self.application).expect("builder produced an invalid application")
    }
}
