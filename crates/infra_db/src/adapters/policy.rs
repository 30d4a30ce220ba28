//! PostgreSQL Policy Adapter
//!
//! Implements `PolicyPort` on top of [`PolicyRepository`].

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, PolicyId, PortError};
use domain_policy::{NewPolicy, Policy, PolicyPort, PolicyTerms, PolicyType};

use crate::error::DatabaseError;
use crate::repositories::policy::{PolicyRepository, PolicyRow, PolicyValues};

/// PostgreSQL-backed implementation of the PolicyPort trait
#[derive(Debug, Clone)]
pub struct PostgresPolicyAdapter {
    repository: PolicyRepository,
    pool: PgPool,
}

impl PostgresPolicyAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PolicyRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn repository(&self) -> &PolicyRepository {
        &self.repository
    }
}

impl DomainPort for PostgresPolicyAdapter {}

#[async_trait]
impl HealthCheckable for PostgresPolicyAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-policy-adapter").await
    }
}

#[async_trait]
impl PolicyPort for PostgresPolicyAdapter {
    #[instrument(skip(self), fields(policy_id = %id))]
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError> {
        debug!("Fetching policy by ID");
        let row = self.repository.get_by_id(id.into()).await?;
        Ok(row_to_policy(row)?)
    }

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError> {
        let rows = self.repository.find_by_client(client_id.into()).await?;
        rows.into_iter()
            .map(|row| row_to_policy(row).map_err(PortError::from))
            .collect()
    }

    #[instrument(skip(self, policy), fields(client_id = %policy.client_id))]
    async fn insert_policy(&self, policy: NewPolicy) -> Result<Policy, PortError> {
        let id = PolicyId::new_v7();
        debug!(policy_id = %id, "Inserting policy");
        let values = policy_values(
            id,
            policy.client_id,
            &policy.terms,
            policy.premium_amount,
            policy.end_date,
        )?;
        let row = self.repository.insert(values).await?;
        Ok(row_to_policy(row)?)
    }

    #[instrument(skip(self, policy), fields(policy_id = %policy.id))]
    async fn update_policy(&self, policy: &Policy) -> Result<Policy, PortError> {
        let values = policy_values(
            policy.id,
            policy.client_id,
            &policy.terms,
            policy.premium_amount,
            policy.end_date,
        )?;
        let row = self.repository.update(values).await?;
        Ok(row_to_policy(row)?)
    }
}

fn policy_values(
    id: PolicyId,
    client_id: ClientId,
    terms: &PolicyTerms,
    premium_amount: f64,
    end_date: Option<chrono::NaiveDate>,
) -> Result<PolicyValues, DatabaseError> {
    let term_years = terms
        .term_years
        .map(i32::try_from)
        .transpose()
        .map_err(|_| DatabaseError::ConstraintViolation("term_years exceeds INTEGER range".to_string()))?;

    Ok(PolicyValues {
        policy_id: id.into(),
        client_id: client_id.into(),
        policy_type: terms.policy_type.as_str().to_string(),
        coverage_amount: terms.coverage_amount,
        premium_amount,
        start_date: terms.start_date,
        end_date,
        term_years,
        beneficiary_name: terms.beneficiary_name.clone(),
        beneficiary_relation: terms.beneficiary_relation.clone(),
        cash_value: terms.cash_value,
        investment_component: terms.investment_component,
        interest_rate: terms.interest_rate,
        convertible: terms.convertible,
    })
}

/// Converts a policy row to a domain Policy
fn row_to_policy(row: PolicyRow) -> Result<Policy, DatabaseError> {
    let policy_type: PolicyType = row
        .policy_type
        .parse()
        .map_err(|e: domain_policy::UnknownPolicyType| DatabaseError::CorruptRow(e.to_string()))?;

    let term_years = row
        .term_years
        .map(u32::try_from)
        .transpose()
        .map_err(|_| DatabaseError::CorruptRow(format!("negative term_years on policy {}", row.policy_id)))?;

    Ok(Policy {
        id: PolicyId::from_uuid(row.policy_id),
        client_id: ClientId::from_uuid(row.client_id),
        terms: PolicyTerms {
            policy_type,
            coverage_amount: row.coverage_amount,
            start_date: row.start_date,
            term_years,
            beneficiary_name: row.beneficiary_name,
            beneficiary_relation: row.beneficiary_relation,
            cash_value: row.cash_value,
            investment_component: row.investment_component,
            interest_rate: row.interest_rate,
            convertible: row.convertible,
        },
        premium_amount: row.premium_amount,
        end_date: row.end_date,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
