//! Base premium calculation
//!
//! The base premium is the type-agnostic part of the price. It depends on the
//! client's age, the coverage amount and the client's income:
//!
//! ```text
//! age_factor      = 1 + age / 50
//! coverage_factor = log10(coverage) / 5
//! income_factor   = 1 - min(income, 200000) / 200000 * 0.2
//! base            = coverage / 1000 * age_factor * coverage_factor * income_factor
//! ```
//!
//! All arithmetic is `f64` and nothing is rounded here.

use chrono::NaiveDate;
use serde::Serialize;

use domain_client::Client;

/// Age in years that doubles the age factor
pub const AGE_DIVISOR: f64 = 50.0;

/// Divisor applied to the decimal logarithm of the coverage amount
pub const COVERAGE_LOG_DIVISOR: f64 = 5.0;

/// Coverage is priced per this many units
pub const COVERAGE_UNIT: f64 = 1000.0;

/// Income above this level earns no further discount
pub const INCOME_CAP: f64 = 200_000.0;

/// Discount reached at the income cap
pub const MAX_INCOME_DISCOUNT: f64 = 0.2;

/// The intermediate values of a base premium calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumFactors {
    pub age: i32,
    pub age_factor: f64,
    pub coverage_factor: f64,
    pub income_factor: f64,
    pub base_premium: f64,
}

impl PremiumFactors {
    /// Computes the factors from raw inputs
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_policy::PremiumFactors;
    ///
    /// let factors = PremiumFactors::compute(44, 100000.0, 60000.0);
    /// assert!((factors.base_premium - 176.72).abs() < 1e-9);
    /// ```
    pub fn compute(age: i32, coverage_amount: f64, annual_income: f64) -> Self {
        let age_factor = 1.0 + (f64::from(age) / AGE_DIVISOR);
        let coverage_factor = coverage_amount.log10() / COVERAGE_LOG_DIVISOR;
        let income_factor = 1.0 - (annual_income.min(INCOME_CAP) / INCOME_CAP * MAX_INCOME_DISCOUNT);
        let base_premium =
            (coverage_amount / COVERAGE_UNIT) * age_factor * coverage_factor * income_factor;

        Self {
            age,
            age_factor,
            coverage_factor,
            income_factor,
            base_premium,
        }
    }

    /// Computes the factors for a client on the given day
    pub fn for_client(client: &Client, coverage_amount: f64, as_of: NaiveDate) -> Self {
        Self::compute(client.age_on(as_of), coverage_amount, client.annual_income)
    }
}
