//! Policy records
//!
//! A policy moves through three shapes:
//!
//! ```text
//! PolicyApplication --validate--> PolicyTerms --price--> NewPolicy --persist--> Policy
//! ```
//!
//! [`PolicyApplication`] is the raw request and accepts anything the client
//! sends. [`PolicyTerms`] is the validated, typed form the pricing engine
//! reads. [`NewPolicy`] is a priced policy waiting for the storage layer to
//! assign it an identity, and [`Policy`] is the stored record.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{add_years, ClientId, PolicyId, TemporalError};

/// The closed set of life insurance products the engine can price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    TermLife,
    WholeLife,
    UniversalLife,
    VariableLife,
    IndexedUniversalLife,
    FinalExpense,
    GroupLife,
}

impl PolicyType {
    pub const ALL: [PolicyType; 7] = [
        PolicyType::TermLife,
        PolicyType::WholeLife,
        PolicyType::UniversalLife,
        PolicyType::VariableLife,
        PolicyType::IndexedUniversalLife,
        PolicyType::FinalExpense,
        PolicyType::GroupLife,
    ];

    /// Returns the wire name (`TERM_LIFE`, `WHOLE_LIFE`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::TermLife => "TERM_LIFE",
            PolicyType::WholeLife => "WHOLE_LIFE",
            PolicyType::UniversalLife => "UNIVERSAL_LIFE",
            PolicyType::VariableLife => "VARIABLE_LIFE",
            PolicyType::IndexedUniversalLife => "INDEXED_UNIVERSAL_LIFE",
            PolicyType::FinalExpense => "FINAL_EXPENSE",
            PolicyType::GroupLife => "GROUP_LIFE",
        }
    }

    /// Only term policies expire
    pub fn has_end_date(&self) -> bool {
        matches!(self, PolicyType::TermLife)
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known policy type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown policy type: {0}")]
pub struct UnknownPolicyType(pub String);

impl FromStr for PolicyType {
    type Err = UnknownPolicyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownPolicyType(s.to_string()))
    }
}

/// A policy request as received, before any checks
///
/// Every field is optional and the type and start date are kept as text so
/// that the validator, not the deserializer, decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyApplication {
    pub policy_type: Option<String>,
    pub coverage_amount: Option<f64>,
    pub start_date: Option<String>,
    pub term_years: Option<i32>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_relation: Option<String>,
    pub cash_value: Option<f64>,
    pub investment_component: Option<f64>,
    pub interest_rate: Option<f64>,
    pub convertible: Option<bool>,
}

/// The validated terms of a policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTerms {
    pub policy_type: PolicyType,
    pub coverage_amount: f64,
    pub start_date: NaiveDate,
    pub term_years: Option<u32>,
    pub beneficiary_name: String,
    pub beneficiary_relation: String,
    pub cash_value: Option<f64>,
    pub investment_component: Option<f64>,
    pub interest_rate: Option<f64>,
    pub convertible: Option<bool>,
}

impl PolicyTerms {
    /// Derives the expiry date: start date plus the term, for term policies only
    ///
    /// A start date of February 29 lands on February 28 when the target year
    /// is not a leap year.
    pub fn end_date(&self) -> Result<Option<NaiveDate>, TemporalError> {
        match (self.policy_type.has_end_date(), self.term_years) {
            (true, Some(years)) => add_years(self.start_date, years).map(Some),
            _ => Ok(None),
        }
    }
}

/// A priced policy that has not been stored yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPolicy {
    pub client_id: ClientId,
    #[serde(flatten)]
    pub terms: PolicyTerms,
    pub premium_amount: f64,
    pub end_date: Option<NaiveDate>,
}

/// A stored policy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub client_id: ClientId,
    #[serde(flatten)]
    pub terms: PolicyTerms,
    pub premium_amount: f64,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Policy {
    /// Builds the stored record for a new policy
    pub fn from_new(id: PolicyId, policy: NewPolicy, now: DateTime<Utc>) -> Self {
        Self {
            id,
            client_id: policy.client_id,
            terms: policy.terms,
            premium_amount: policy.premium_amount,
            end_date: policy.end_date,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn policy_type(&self) -> PolicyType {
        self.terms.policy_type
    }
}

/// The fields of a stored policy that may be changed after issue
///
/// Absent fields leave the stored value as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PolicyAmendment {
    pub coverage_amount: Option<f64>,
    pub term_years: Option<u32>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_relation: Option<String>,
}

impl PolicyAmendment {
    /// Overwrites the amended fields of `terms`
    pub fn apply_to(&self, terms: &mut PolicyTerms) {
        if let Some(coverage) = self.coverage_amount {
            terms.coverage_amount = coverage;
        }
        if let Some(years) = self.term_years {
            terms.term_years = Some(years);
        }
        if let Some(name) = &self.beneficiary_name {
            terms.beneficiary_name = name.clone();
        }
        if let Some(relation) = &self.beneficiary_relation {
            terms.beneficiary_relation = relation.clone();
        }
    }
}
