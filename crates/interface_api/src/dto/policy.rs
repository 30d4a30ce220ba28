//! Policy DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, PolicyId};
use domain_policy::{Policy, PolicyAmendment, PolicyApplication, PolicyType};

use super::premium_display;

/// Body of policy creation and premium calculation requests
///
/// Kept permissive: the policy validator decides what is acceptable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRequest {
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

impl From<PolicyRequest> for PolicyApplication {
    fn from(request: PolicyRequest) -> Self {
        PolicyApplication {
            policy_type: request.policy_type,
            coverage_amount: request.coverage_amount,
            start_date: request.start_date,
            term_years: request.term_years,
            beneficiary_name: request.beneficiary_name,
            beneficiary_relation: request.beneficiary_relation,
            cash_value: request.cash_value,
            investment_component: request.investment_component,
            interest_rate: request.interest_rate,
            convertible: request.convertible,
        }
    }
}

/// Body of `PUT /api/policies/:id`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePolicyRequest {
    pub coverage_amount: Option<f64>,
    pub term_years: Option<u32>,
    pub beneficiary_name: Option<String>,
    pub beneficiary_relation: Option<String>,
}

impl From<UpdatePolicyRequest> for PolicyAmendment {
    fn from(request: UpdatePolicyRequest) -> Self {
        PolicyAmendment {
            coverage_amount: request.coverage_amount,
            term_years: request.term_years,
            beneficiary_name: request.beneficiary_name,
            beneficiary_relation: request.beneficiary_relation,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub id: PolicyId,
    pub client_id: ClientId,
    pub policy_type: PolicyType,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub premium_display: Option<Decimal>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub term_years: Option<u32>,
    pub beneficiary_name: String,
    pub beneficiary_relation: String,
    pub cash_value: Option<f64>,
    pub investment_component: Option<f64>,
    pub interest_rate: Option<f64>,
    pub convertible: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Policy> for PolicyResponse {
    fn from(policy: Policy) -> Self {
        let terms = policy.terms;
        Self {
            id: policy.id,
            client_id: policy.client_id,
            policy_type: terms.policy_type,
            coverage_amount: terms.coverage_amount,
            premium_amount: policy.premium_amount,
            premium_display: premium_display(policy.premium_amount),
            start_date: terms.start_date,
            end_date: policy.end_date,
            term_years: terms.term_years,
            beneficiary_name: terms.beneficiary_name,
            beneficiary_relation: terms.beneficiary_relation,
            cash_value: terms.cash_value,
            investment_component: terms.investment_component,
            interest_rate: terms.interest_rate,
            convertible: terms.convertible,
            created_at: policy.created_at,
            updated_at: policy.updated_at,
        }
    }
}

/// Query string of `POST /api/calculate-premium`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumQuery {
    pub client_id: ClientId,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumResponse {
    pub client_id: ClientId,
    pub premium_amount: f64,
    pub premium_display: Option<Decimal>,
}

impl PremiumResponse {
    pub fn new(client_id: ClientId, premium_amount: f64) -> Self {
        Self {
            client_id,
            premium_amount,
            premium_display: premium_display(premium_amount),
        }
    }
}
