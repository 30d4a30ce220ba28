//! Policy validation
//!
//! The validator turns a [`PolicyApplication`] into [`PolicyTerms`] or reports
//! the first rule it breaks. Rules run in a fixed order:
//!
//! 1. coverage amount present and positive
//! 2. start date present
//! 3. start date formatted `YYYY-MM-DD`
//! 4. policy type present and known
//! 5. beneficiary name present
//! 6. beneficiary relation present
//! 7. the rule specific to the policy type, if any (a term policy's end date
//!    must also be representable)

use std::fmt;

use chrono::NaiveDate;
use core_kernel::add_years;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::policy::{PolicyApplication, PolicyTerms, PolicyType, UnknownPolicyType};

/// Names of the policy fields a rule can reject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PolicyField {
    CoverageAmount,
    StartDate,
    PolicyType,
    BeneficiaryName,
    BeneficiaryRelation,
    TermYears,
    InterestRate,
    InvestmentComponent,
}

impl PolicyField {
    /// The field name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyField::CoverageAmount => "coverageAmount",
            PolicyField::StartDate => "startDate",
            PolicyField::PolicyType => "policyType",
            PolicyField::BeneficiaryName => "beneficiaryName",
            PolicyField::BeneficiaryRelation => "beneficiaryRelation",
            PolicyField::TermYears => "termYears",
            PolicyField::InterestRate => "interestRate",
            PolicyField::InvestmentComponent => "investmentComponent",
        }
    }
}

impl fmt::Display for PolicyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A broken validation rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ValidationFailure {
    pub field: PolicyField,
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(field: PolicyField, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Validator for policy applications
pub struct PolicyValidator;

impl PolicyValidator {
    /// Validates an application, returning its typed terms
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationFailure`] in rule order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_policy::{PolicyApplication, PolicyField, PolicyValidator};
    ///
    /// let application = PolicyApplication {
    ///     coverage_amount: Some(0.0),
    ///     ..Default::default()
    /// };
    /// let failure = PolicyValidator::validate(&application).unwrap_err();
    /// assert_eq!(failure.field, PolicyField::CoverageAmount);
    /// assert_eq!(failure.reason, "Coverage amount must be greater than 0");
    /// ```
    pub fn validate(application: &PolicyApplication) -> Result<PolicyTerms, ValidationFailure> {
        match Self::check(application) {
            Ok(terms) => {
                debug!(policy_type = %terms.policy_type, "Policy application accepted");
                Ok(terms)
            }
            Err(failure) => {
                warn!(field = %failure.field, reason = %failure.reason, "Policy application rejected");
                Err(failure)
            }
        }
    }

    fn check(application: &PolicyApplication) -> Result<PolicyTerms, ValidationFailure> {
        // NaN fails the comparison as well
        let coverage_amount = match application.coverage_amount {
            Some(amount) if amount > 0.0 => amount,
            _ => {
                return Err(ValidationFailure::new(
                    PolicyField::CoverageAmount,
                    "Coverage amount must be greater than 0",
                ))
            }
        };

        let raw_start = application.start_date.as_deref().ok_or_else(|| {
            ValidationFailure::new(PolicyField::StartDate, "Start date is required")
        })?;
        let start_date = parse_start_date(raw_start).ok_or_else(|| {
            ValidationFailure::new(
                PolicyField::StartDate,
                "Invalid start date format. Expected format: YYYY-MM-DD",
            )
        })?;

        let policy_type: PolicyType = application
            .policy_type
            .as_deref()
            .ok_or_else(|| ValidationFailure::new(PolicyField::PolicyType, "Policy type is required"))?
            .parse()
            .map_err(|e: UnknownPolicyType| {
                ValidationFailure::new(PolicyField::PolicyType, e.to_string())
            })?;

        let beneficiary_name = required_text(
            application.beneficiary_name.as_deref(),
            PolicyField::BeneficiaryName,
            "Beneficiary name is required",
        )?;
        let beneficiary_relation = required_text(
            application.beneficiary_relation.as_deref(),
            PolicyField::BeneficiaryRelation,
            "Beneficiary relation is required",
        )?;

        let term_years = match policy_type {
            PolicyType::TermLife => {
                let years = match application.term_years {
                    Some(years) if years > 0 => years as u32,
                    _ => {
                        return Err(ValidationFailure::new(
                            PolicyField::TermYears,
                            "Term years must be greater than 0 for Term Life policies",
                        ))
                    }
                };
                if add_years(start_date, years).is_err() {
                    return Err(ValidationFailure::new(
                        PolicyField::TermYears,
                        "Term years puts the end date outside the supported calendar range",
                    ));
                }
                Some(years)
            }
            _ => application
                .term_years
                .and_then(|years| u32::try_from(years).ok()),
        };

        match policy_type {
            PolicyType::UniversalLife if application.interest_rate.is_none() => {
                return Err(ValidationFailure::new(
                    PolicyField::InterestRate,
                    "Interest rate is required for Universal Life policies",
                ));
            }
            PolicyType::VariableLife if application.investment_component.is_none() => {
                return Err(ValidationFailure::new(
                    PolicyField::InvestmentComponent,
                    "Investment component is required for Variable Life policies",
                ));
            }
            _ => {}
        }

        Ok(PolicyTerms {
            policy_type,
            coverage_amount,
            start_date,
            term_years,
            beneficiary_name,
            beneficiary_relation,
            cash_value: application.cash_value,
            investment_component: application.investment_component,
            interest_rate: application.interest_rate,
            convertible: application.convertible,
        })
    }
}

/// Parses a strict `YYYY-MM-DD` date
///
/// chrono's `%Y-%m-%d` alone also takes one-digit months and days, a signed
/// year and leading whitespace.
fn parse_start_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

fn required_text(
    value: Option<&str>,
    field: PolicyField,
    reason: &'static str,
) -> Result<String, ValidationFailure> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        _ => Err(ValidationFailure::new(field, reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application(policy_type: &str) -> PolicyApplication {
        PolicyApplication {
            policy_type: Some(policy_type.to_string()),
            coverage_amount: Some(100000.0),
            start_date: Some("2024-01-01".to_string()),
            term_years: Some(20),
            beneficiary_name: Some("Jane Doe".to_string()),
            beneficiary_relation: Some("Spouse".to_string()),
            ..Default::default()
        }
    }

    fn field_of(application: &PolicyApplication) -> PolicyField {
        PolicyValidator::validate(application).unwrap_err().field
    }

    #[test]
    fn test_valid_term_life() {
        let terms = PolicyValidator::validate(&application("TERM_LIFE")).unwrap();
        assert_eq!(terms.policy_type, PolicyType::TermLife);
        assert_eq!(terms.term_years, Some(20));
        assert_eq!(terms.start_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_negative_and_nan_coverage_rejected() {
        for amount in [-5.0, 0.0, f64::NAN] {
            let mut app = application("WHOLE_LIFE");
            app.coverage_amount = Some(amount);
            assert_eq!(field_of(&app), PolicyField::CoverageAmount);
        }
    }

    #[test]
    fn test_start_date_format() {
        let mut app = application("WHOLE_LIFE");
        app.start_date = Some("01/01/2024".to_string());
        let failure = PolicyValidator::validate(&app).unwrap_err();
        assert_eq!(failure.field, PolicyField::StartDate);
        assert_eq!(failure.reason, "Invalid start date format. Expected format: YYYY-MM-DD");

        app.start_date = Some("2023-02-29".to_string());
        assert_eq!(field_of(&app), PolicyField::StartDate);
    }

    #[test]
    fn test_unknown_policy_type() {
        let failure = PolicyValidator::validate(&application("HEALTH")).unwrap_err();
        assert_eq!(failure.field, PolicyField::PolicyType);
        assert_eq!(failure.reason, "Unknown policy type: HEALTH");
    }

    #[test]
    fn test_blank_beneficiary_name() {
        let mut app = application("WHOLE_LIFE");
        app.beneficiary_name = Some("  ".to_string());
        assert_eq!(field_of(&app), PolicyField::BeneficiaryName);
    }

    #[test]
    fn test_term_life_requires_positive_term() {
        let mut app = application("TERM_LIFE");
        app.term_years = Some(0);
        assert_eq!(field_of(&app), PolicyField::TermYears);
        app.term_years = None;
        assert_eq!(field_of(&app), PolicyField::TermYears);
    }

    #[test]
    fn test_other_types_ignore_term() {
        let mut app = application("FINAL_EXPENSE");
        app.term_years = None;
        assert!(PolicyValidator::validate(&app).is_ok());
    }

    #[test]
    fn test_field_display_is_camel_case() {
        assert_eq!(PolicyField::BeneficiaryRelation.to_string(), "beneficiaryRelation");
        assert_eq!(
            serde_json::to_string(&PolicyField::InvestmentComponent).unwrap(),
            "\"investmentComponent\""
        );
    }
}
