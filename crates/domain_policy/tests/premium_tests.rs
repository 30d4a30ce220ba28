//! Premium Calculation Tests
//!
//! Tests for the base premium and the policy-type strategies:
//! - Base premium factors for age, coverage and income
//! - The multiplier applied by each policy type
//! - Behaviour of the engine on unvalidated terms
//!
//! # Test Organization
//!
//! - `base_factors` - PremiumFactors from raw inputs and from a client
//! - `strategy_table` - premium for every policy type over one base premium
//! - `strategy_faults` - missing attributes and non-finite results

use chrono::{NaiveDate, Utc};
use core_kernel::ClientId;
use domain_client::{Client, NewClient};
use domain_policy::{
    PolicyField, PolicyTerms, PolicyType, PremiumFactors, PricingError, PricingStrategy,
};

// ============================================================================
// TEST FIXTURES
// ============================================================================

fn client(date_of_birth: NaiveDate, income: f64) -> Client {
    Client::from_new(
        ClientId::new(),
        NewClient {
            first_name: "Ada".to_string(),
            last_name: "Byron".to_string(),
            email: "ada@example.com".to_string(),
            date_of_birth: Some(date_of_birth),
            annual_income: Some(income),
            ..Default::default()
        },
        Utc::now(),
    )
    .unwrap()
}

fn terms(policy_type: PolicyType) -> PolicyTerms {
    PolicyTerms {
        policy_type,
        coverage_amount: 100000.0,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        term_years: Some(20),
        beneficiary_name: "Jane Doe".to_string(),
        beneficiary_relation: "Spouse".to_string(),
        cash_value: None,
        investment_component: Some(25000.0),
        interest_rate: Some(2.0),
        convertible: Some(false),
    }
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// BASE FACTORS
// ============================================================================

mod base_factors {
    use super::*;

    /// Born 1980-01-01, priced on 2024-06-01: 44 years old
    #[test]
    fn test_reference_client() {
        let client = client(NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(), 60000.0);
        let factors = PremiumFactors::for_client(
            &client,
            100000.0,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        );
        assert_eq!(factors.age, 44);
        assert_close(factors.base_premium, 176.72);
    }

    /// The age only advances on the birthday itself
    #[test]
    fn test_age_before_and_on_birthday() {
        let client = client(NaiveDate::from_ymd_opt(1990, 7, 15).unwrap(), 0.0);
        let before = PremiumFactors::for_client(&client, 1000.0, NaiveDate::from_ymd_opt(2024, 7, 14).unwrap());
        let on = PremiumFactors::for_client(&client, 1000.0, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(before.age, 33);
        assert_eq!(on.age, 34);
        assert!(on.base_premium > before.base_premium);
    }

    /// A coverage of 1 has a zero coverage factor and therefore a zero premium
    #[test]
    fn test_unit_coverage_prices_to_zero() {
        assert_eq!(PremiumFactors::compute(40, 1.0, 50000.0).base_premium, 0.0);
    }

    #[test]
    fn test_income_discount_scales_linearly_to_cap() {
        assert_close(PremiumFactors::compute(40, 1000.0, 100000.0).income_factor, 0.9);
        assert_close(PremiumFactors::compute(40, 1000.0, 200000.0).income_factor, 0.8);
        assert_close(PremiumFactors::compute(40, 1000.0, 900000.0).income_factor, 0.8);
    }
}

// ============================================================================
// STRATEGY TABLE
// ============================================================================

mod strategy_table {
    use super::*;

    /// Premium for each type over a base premium of 100
    #[test]
    fn test_each_type_over_base_100() {
        let expected = [
            (PolicyType::TermLife, 100.0 * (1.0 + 20.0 / 30.0)),
            (PolicyType::WholeLife, 250.0),
            (PolicyType::UniversalLife, 100.0 * 2.0 * 0.8),
            (PolicyType::VariableLife, 100.0 * 2.2 * 1.25),
            (PolicyType::IndexedUniversalLife, 230.0),
            (PolicyType::FinalExpense, 80.0),
            (PolicyType::GroupLife, 60.0),
        ];
        for (policy_type, premium) in expected {
            let strategy = PricingStrategy::for_terms(&terms(policy_type)).unwrap();
            assert_close(strategy.price(100.0).unwrap(), premium);
        }
    }

    #[test]
    fn test_convertible_term_life_costs_ten_percent_more() {
        let plain = PricingStrategy::for_terms(&terms(PolicyType::TermLife)).unwrap();
        let convertible = PricingStrategy::for_terms(&PolicyTerms {
            convertible: Some(true),
            ..terms(PolicyType::TermLife)
        })
        .unwrap();
        assert_close(convertible.price(100.0).unwrap(), plain.price(100.0).unwrap() * 1.1);
    }

    /// Types other than term life ignore a term length
    #[test]
    fn test_term_does_not_affect_whole_life() {
        let short = PricingStrategy::for_terms(&PolicyTerms {
            term_years: Some(1),
            ..terms(PolicyType::WholeLife)
        })
        .unwrap();
        let long = PricingStrategy::for_terms(&terms(PolicyType::WholeLife)).unwrap();
        assert_eq!(short, long);
    }
}

// ============================================================================
// STRATEGY FAULTS
// ============================================================================

mod strategy_faults {
    use super::*;

    #[test]
    fn test_term_life_without_term() {
        let err = PricingStrategy::for_terms(&PolicyTerms {
            term_years: None,
            ..terms(PolicyType::TermLife)
        })
        .unwrap_err();
        assert_eq!(
            err,
            PricingError::MissingAttribute {
                policy_type: PolicyType::TermLife,
                field: PolicyField::TermYears,
            }
        );
    }

    #[test]
    fn test_variable_life_without_investment() {
        let err = PricingStrategy::for_terms(&PolicyTerms {
            investment_component: None,
            ..terms(PolicyType::VariableLife)
        })
        .unwrap_err();
        assert!(matches!(err, PricingError::MissingAttribute { field: PolicyField::InvestmentComponent, .. }));
    }

    /// A zero coverage reaching the variable life formula divides by zero
    #[test]
    fn test_variable_life_zero_coverage_is_non_finite() {
        let strategy = PricingStrategy::for_terms(&PolicyTerms {
            coverage_amount: 0.0,
            ..terms(PolicyType::VariableLife)
        })
        .unwrap();
        assert!(matches!(strategy.price(10.0), Err(PricingError::NonFinite { .. })));
    }
}
