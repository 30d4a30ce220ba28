//! Policy repository implementation
//!
//! Policies are stored one row per policy in the `policies` table. The policy
//! type is kept as its wire name (`TERM_LIFE`, ...) under a CHECK constraint.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

const POLICY_COLUMNS: &str = "policy_id, client_id, policy_type, coverage_amount, premium_amount, \
     start_date, end_date, term_years, beneficiary_name, beneficiary_relation, cash_value, \
     investment_component, interest_rate, convertible, created_at, updated_at";

/// Repository for policy rows
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::PolicyRepository;
///
/// let repo = PolicyRepository::new(pool);
/// let policies = repo.find_by_client(client_id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PolicyRepository {
    pool: PgPool,
}

impl PolicyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a policy by identifier, or `DatabaseError::NotFound`
    pub async fn get_by_id(&self, policy_id: Uuid) -> Result<PolicyRow, DatabaseError> {
        let sql = format!("SELECT {POLICY_COLUMNS} FROM policies WHERE policy_id = $1");
        sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(policy_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Policy", policy_id))
    }

    /// Retrieves all policies owned by a client, oldest first
    pub async fn find_by_client(&self, client_id: Uuid) -> Result<Vec<PolicyRow>, DatabaseError> {
        let sql = format!(
            "SELECT {POLICY_COLUMNS} FROM policies WHERE client_id = $1 \
             ORDER BY created_at, policy_id"
        );
        Ok(sqlx::query_as::<_, PolicyRow>(&sql)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?)
    }

    /// Inserts a policy and returns the stored row
    ///
    /// Fails with `ForeignKeyViolation` when the owning client does not exist.
    pub async fn insert(&self, policy: PolicyValues) -> Result<PolicyRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO policies (policy_id, client_id, policy_type, coverage_amount, \
             premium_amount, start_date, end_date, term_years, beneficiary_name, \
             beneficiary_relation, cash_value, investment_component, interest_rate, convertible) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             RETURNING {POLICY_COLUMNS}"
        );
        Ok(policy.bind_all(sqlx::query_as::<_, PolicyRow>(&sql))
            .fetch_one(&self.pool)
            .await?)
    }

    /// Overwrites the terms, premium and end date of a stored policy
    ///
    /// The owning client and `created_at` never change.
    pub async fn update(&self, policy: PolicyValues) -> Result<PolicyRow, DatabaseError> {
        let sql = format!(
            "UPDATE policies SET policy_type = $3, coverage_amount = $4, premium_amount = $5, \
             start_date = $6, end_date = $7, term_years = $8, beneficiary_name = $9, \
             beneficiary_relation = $10, cash_value = $11, investment_component = $12, \
             interest_rate = $13, convertible = $14, updated_at = now() \
             WHERE policy_id = $1 AND client_id = $2 \
             RETURNING {POLICY_COLUMNS}"
        );
        let policy_id = policy.policy_id;
        policy
            .bind_all(sqlx::query_as::<_, PolicyRow>(&sql))
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Policy", policy_id))
    }
}

/// Database row for a policy
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PolicyRow {
    pub policy_id: Uuid,
    pub client_id: Uuid,
    pub policy_type: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub term_years: Option<i32>,
    pub beneficiary_name: String,
    pub beneficiary_relation: String,
    pub cash_value: Option<f64>,
    pub investment_component: Option<f64>,
    pub interest_rate: Option<f64>,
    pub convertible: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column values written on insert and update
#[derive(Debug, Clone)]
pub struct PolicyValues {
    pub policy_id: Uuid,
    pub client_id: Uuid,
    pub policy_type: String,
    pub coverage_amount: f64,
    pub premium_amount: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub term_years: Option<i32>,
    pub beneficiary_name: String,
    pub beneficiary_relation: String,
    pub cash_value: Option<f64>,
    pub investment_component: Option<f64>,
    pub interest_rate: Option<f64>,
    pub convertible: Option<bool>,
}

type PolicyQuery<'q> =
    sqlx::query::QueryAs<'q, sqlx::Postgres, PolicyRow, sqlx::postgres::PgArguments>;

impl PolicyValues {
    /// Binds `$1..$14` in column order
    fn bind_all(self, query: PolicyQuery<'_>) -> PolicyQuery<'_> {
        query
            .bind(self.policy_id)
            .bind(self.client_id)
            .bind(self.policy_type)
            .bind(self.coverage_amount)
            .bind(self.premium_amount)
            .bind(self.start_date)
            .bind(self.end_date)
            .bind(self.term_years)
            .bind(self.beneficiary_name)
            .bind(self.beneficiary_relation)
            .bind(self.cash_value)
            .bind(self.investment_component)
            .bind(self.interest_rate)
            .bind(self.convertible)
    }
}
