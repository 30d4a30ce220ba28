//! Client repository implementation
//!
//! Plain CRUD over the `clients` table. Policies reference clients with
//! `ON DELETE CASCADE`, so deleting a client row removes its policies in the
//! same statement.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

const CLIENT_COLUMNS: &str = "client_id, first_name, last_name, email, phone, date_of_birth, \
     address, occupation, annual_income, created_at, updated_at";

/// Repository for client rows
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a client by identifier, or `DatabaseError::NotFound`
    pub async fn get_by_id(&self, client_id: Uuid) -> Result<ClientRow, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients WHERE client_id = $1");
        sqlx::query_as::<_, ClientRow>(&sql)
            .bind(client_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Client", client_id))
    }

    /// Lists every client, oldest first
    pub async fn list(&self) -> Result<Vec<ClientRow>, DatabaseError> {
        let sql = format!("SELECT {CLIENT_COLUMNS} FROM clients ORDER BY created_at, client_id");
        Ok(sqlx::query_as::<_, ClientRow>(&sql).fetch_all(&self.pool).await?)
    }

    /// Inserts a client and returns the stored row
    pub async fn insert(&self, client: NewClientRow) -> Result<ClientRow, DatabaseError> {
        let sql = format!(
            "INSERT INTO clients (client_id, first_name, last_name, email, phone, date_of_birth, \
             address, occupation, annual_income) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {CLIENT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ClientRow>(&sql)
            .bind(client.client_id)
            .bind(client.first_name)
            .bind(client.last_name)
            .bind(client.email)
            .bind(client.phone)
            .bind(client.date_of_birth)
            .bind(client.address)
            .bind(client.occupation)
            .bind(client.annual_income)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    /// Deletes a client and, through the foreign key, its policies
    pub async fn delete(&self, client_id: Uuid) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(client_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Client", client_id));
        }
        Ok(())
    }
}

/// Database row for a client
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ClientRow {
    pub client_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for inserting a new client
#[derive(Debug, Clone)]
pub struct NewClientRow {
    pub client_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: f64,
}
