//! Property-Based Test Generators
//!
//! Proptest strategies that produce data satisfying the domain's input
//! rules, so properties can focus on pricing behaviour.

use chrono::{Duration, NaiveDate};
use core_kernel::{ClientId, PolicyId};
use domain_policy::{PolicyApplication, PolicyType};
use proptest::prelude::*;

/// Strategy for any policy type
pub fn policy_type_strategy() -> impl Strategy<Value = PolicyType> {
    proptest::sample::select(PolicyType::ALL.to_vec())
}

/// Strategy for client ages (0 to 100)
pub fn age_strategy() -> impl Strategy<Value = i32> {
    0i32..=100i32
}

/// Strategy for coverage amounts above 1, where the coverage factor is positive
pub fn coverage_strategy() -> impl Strategy<Value = f64> {
    1_000.0f64..10_000_000.0f64
}

/// Strategy for annual incomes, spanning both sides of the discount cap
pub fn income_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0f64
}

/// Strategy for term lengths accepted by term policies
pub fn term_years_strategy() -> impl Strategy<Value = u32> {
    1u32..=50u32
}

/// Strategy for policy start dates between 2000 and 2040, leap days included
pub fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..14_610i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for valid applications of any type
pub fn application_strategy() -> impl Strategy<Value = PolicyApplication> {
    (
        policy_type_strategy(),
        coverage_strategy(),
        start_date_strategy(),
        term_years_strategy(),
        0.0f64..10.0f64,
        0.0f64..1_000_000.0f64,
        any::<bool>(),
    )
        .prop_map(
            |(policy_type, coverage, start, term, rate, investment, convertible)| {
                PolicyApplication {
                    policy_type: Some(policy_type.as_str().to_string()),
                    coverage_amount: Some(coverage),
                    start_date: Some(start.format("%Y-%m-%d").to_string()),
                    term_years: Some(term as i32),
                    beneficiary_name: Some("John Doe".to_string()),
                    beneficiary_relation: Some("Spouse".to_string()),
                    cash_value: None,
                    investment_component: Some(investment),
                    interest_rate: Some(rate),
                    convertible: Some(convertible),
                }
            },
        )
}

/// Strategy for generating ClientId
pub fn client_id_strategy() -> impl Strategy<Value = ClientId> {
    any::<[u8; 16]>().prop_map(|bytes| ClientId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating PolicyId
pub fn policy_id_strategy() -> impl Strategy<Value = PolicyId> {
    any::<[u8; 16]>().prop_map(|bytes| PolicyId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}
