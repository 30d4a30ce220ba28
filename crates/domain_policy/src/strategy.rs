//! Policy-type pricing
//!
//! Each policy type adjusts the base premium with its own multiplier. The
//! strategy for a policy is picked once from its terms and carries exactly the
//! attributes its formula reads:
//!
//! | Type                     | Premium                                              |
//! |--------------------------|------------------------------------------------------|
//! | `TERM_LIFE`              | base × (1 + term / 30) × (1.1 if convertible)        |
//! | `WHOLE_LIFE`             | base × 2.5                                           |
//! | `UNIVERSAL_LIFE`         | base × 2.0 × (1 − interest rate / 10)                |
//! | `VARIABLE_LIFE`          | base × 2.2 × (1 + investment / coverage)             |
//! | `INDEXED_UNIVERSAL_LIFE` | base × 2.3                                           |
//! | `FINAL_EXPENSE`          | base × 0.8                                           |
//! | `GROUP_LIFE`             | base × 0.6                                           |

use thiserror::Error;

use crate::policy::{PolicyTerms, PolicyType};
use crate::validation::PolicyField;

/// Errors raised while selecting or applying a pricing strategy
///
/// Validated terms never produce these; seeing one means terms reached the
/// engine without passing the validator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("{policy_type} pricing requires {field}")]
    MissingAttribute {
        policy_type: PolicyType,
        field: PolicyField,
    },

    #[error("{policy_type} premium is not a finite number: {value}")]
    NonFinite { policy_type: PolicyType, value: f64 },
}

/// The pricing rule for one policy type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingStrategy {
    TermLife { term_years: u32, convertible: bool },
    WholeLife,
    UniversalLife { interest_rate: f64 },
    VariableLife { investment_component: f64, coverage_amount: f64 },
    IndexedUniversalLife,
    FinalExpense,
    GroupLife,
}

impl PricingStrategy {
    /// Selects the strategy for a policy's terms
    pub fn for_terms(terms: &PolicyTerms) -> Result<Self, PricingError> {
        let missing = |field| PricingError::MissingAttribute {
            policy_type: terms.policy_type,
            field,
        };

        Ok(match terms.policy_type {
            PolicyType::TermLife => PricingStrategy::TermLife {
                term_years: terms.term_years.ok_or_else(|| missing(PolicyField::TermYears))?,
                convertible: terms.convertible.unwrap_or(false),
            },
            PolicyType::WholeLife => PricingStrategy::WholeLife,
            PolicyType::UniversalLife => PricingStrategy::UniversalLife {
                interest_rate: terms.interest_rate.ok_or_else(|| missing(PolicyField::InterestRate))?,
            },
            PolicyType::VariableLife => PricingStrategy::VariableLife {
                investment_component: terms
                    .investment_component
                    .ok_or_else(|| missing(PolicyField::InvestmentComponent))?,
                coverage_amount: terms.coverage_amount,
            },
            PolicyType::IndexedUniversalLife => PricingStrategy::IndexedUniversalLife,
            PolicyType::FinalExpense => PricingStrategy::FinalExpense,
            PolicyType::GroupLife => PricingStrategy::GroupLife,
        })
    }

    pub fn policy_type(&self) -> PolicyType {
        match self {
            PricingStrategy::TermLife { .. } => PolicyType::TermLife,
            PricingStrategy::WholeLife => PolicyType::WholeLife,
            PricingStrategy::UniversalLife { .. } => PolicyType::UniversalLife,
            PricingStrategy::VariableLife { .. } => PolicyType::VariableLife,
            PricingStrategy::IndexedUniversalLife => PolicyType::IndexedUniversalLife,
            PricingStrategy::FinalExpense => PolicyType::FinalExpense,
            PricingStrategy::GroupLife => PolicyType::GroupLife,
        }
    }

    /// Applies the type adjustment to a base premium
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::NonFinite`] when the result is NaN or infinite.
    pub fn price(&self, base_premium: f64) -> Result<f64, PricingError> {
        let premium = match *self {
            PricingStrategy::TermLife { term_years, convertible } => {
                let term_factor = 1.0 + (f64::from(term_years) / 30.0);
                let conversion_factor = if convertible { 1.1 } else { 1.0 };
                base_premium * term_factor * conversion_factor
            }
            PricingStrategy::WholeLife => base_premium * 2.5,
            PricingStrategy::UniversalLife { interest_rate } => {
                base_premium * 2.0 * (1.0 - (interest_rate / 10.0))
            }
            PricingStrategy::VariableLife {
                investment_component,
                coverage_amount,
            } => base_premium * 2.2 * (1.0 + (investment_component / coverage_amount)),
            PricingStrategy::IndexedUniversalLife => base_premium * 2.3,
            PricingStrategy::FinalExpense => base_premium * 0.8,
            PricingStrategy::GroupLife => base_premium * 0.6,
        };

        if premium.is_finite() {
            Ok(premium)
        } else {
            Err(PricingError::NonFinite {
                policy_type: self.policy_type(),
                value: premium,
            })
        }
    }
}
