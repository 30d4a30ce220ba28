//! PostgreSQL Client Adapter
//!
//! Implements `ClientPort` on top of [`ClientRepository`]. Identities are
//! UUID v7 so rows sort by creation time.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use core_kernel::{ClientId, DomainPort, HealthCheckResult, HealthCheckable, PortError};
use domain_client::{Client, ClientPort, NewClient};

use crate::repositories::client::{ClientRepository, ClientRow, NewClientRow};

/// PostgreSQL-backed implementation of the ClientPort trait
///
/// Deleting a client relies on the `ON DELETE CASCADE` foreign key from
/// `policies` to remove the client's policies.
#[derive(Debug, Clone)]
pub struct PostgresClientAdapter {
    repository: ClientRepository,
    pool: PgPool,
}

impl PostgresClientAdapter {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ClientRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn repository(&self) -> &ClientRepository {
        &self.repository
    }
}

impl DomainPort for PostgresClientAdapter {}

#[async_trait]
impl HealthCheckable for PostgresClientAdapter {
    async fn health_check(&self) -> HealthCheckResult {
        super::ping(&self.pool, "postgres-client-adapter").await
    }
}

#[async_trait]
impl ClientPort for PostgresClientAdapter {
    #[instrument(skip(self), fields(client_id = %id))]
    async fn get_client(&self, id: ClientId) -> Result<Client, PortError> {
        debug!("Fetching client by ID");
        let row = self.repository.get_by_id(id.into()).await?;
        Ok(row_to_client(row))
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, PortError> {
        let rows = self.repository.list().await?;
        Ok(rows.into_iter().map(row_to_client).collect())
    }

    #[instrument(skip(self, request))]
    async fn create_client(&self, request: NewClient) -> Result<Client, PortError> {
        let row = new_client_row(ClientId::new_v7(), request)?;
        debug!(client_id = %row.client_id, "Inserting client");
        let stored = self.repository.insert(row).await?;
        Ok(row_to_client(stored))
    }

    #[instrument(skip(self), fields(client_id = %id))]
    async fn delete_client(&self, id: ClientId) -> Result<(), PortError> {
        self.repository.delete(id.into()).await?;
        debug!("Client and owned policies deleted");
        Ok(())
    }
}

fn new_client_row(id: ClientId, request: NewClient) -> Result<NewClientRow, PortError> {
    let date_of_birth = request
        .date_of_birth
        .ok_or_else(|| PortError::validation_field("Date of birth is required", "dateOfBirth"))?;

    Ok(NewClientRow {
        client_id: id.into(),
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        phone: request.phone,
        date_of_birth,
        address: request.address,
        occupation: request.occupation,
        annual_income: request.annual_income.unwrap_or(0.0),
    })
}

/// Converts a client row to a domain Client
fn row_to_client(row: ClientRow) -> Client {
    Client {
        id: ClientId::from_uuid(row.client_id),
        first_name: row.first_name,
        last_name: row.last_name,
        email: row.email,
        phone: row.phone,
        date_of_birth: row.date_of_birth,
        address: row.address,
        occupation: row.occupation,
        annual_income: row.annual_income,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}
