//! Client Domain Ports
//!
//! The `ClientPort` trait is what the client and policy services need from
//! client storage. The PostgreSQL adapter lives in `infra_db`; an in-memory
//! adapter is available behind the `mock` feature for tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_client::ports::ClientPort;
//! use std::sync::Arc;
//!
//! let port: Arc<dyn ClientPort> = Arc::new(PostgresClientAdapter::new(pool));
//! let client = port.get_client(client_id).await?;
//! ```

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, HealthCheckable, PortError};

use crate::client::{Client, NewClient};

/// The port trait for client storage
///
/// Identity generation belongs to the implementation: `create_client` returns
/// the stored record with its id assigned.
#[async_trait]
pub trait ClientPort: DomainPort + HealthCheckable {
    /// Retrieves a client by ID, or `PortError::NotFound`
    async fn get_client(&self, id: ClientId) -> Result<Client, PortError>;

    /// Lists all clients, oldest first
    async fn list_clients(&self) -> Result<Vec<Client>, PortError>;

    /// Stores a validated client request and returns the stored record
    async fn create_client(&self, request: NewClient) -> Result<Client, PortError>;

    /// Deletes a client
    ///
    /// A client owns its policies: implementations backed by shared storage
    /// remove the client's policies in the same operation.
    async fn delete_client(&self, id: ClientId) -> Result<(), PortError>;

    /// Checks if a client exists
    async fn exists(&self, id: ClientId) -> Result<bool, PortError> {
        match self.get_client(id).await {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// In-memory implementation of ClientPort for testing
///
/// Holds clients only, so `delete_client` has no policies to cascade to.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    #[derive(Debug, Default)]
    pub struct MockClientPort {
        clients: Arc<RwLock<HashMap<ClientId, Client>>>,
    }

    impl MockClientPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the port with existing clients
        pub async fn with_clients(clients: Vec<Client>) -> Self {
            let port = Self::new();
            {
                let mut store = port.clients.write().await;
                for client in clients {
                    store.insert(client.id, client);
                }
            }
            port
        }
    }

    impl DomainPort for MockClientPort {}

    #[async_trait]
    impl HealthCheckable for MockClientPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-client-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl ClientPort for MockClientPort {
        async fn get_client(&self, id: ClientId) -> Result<Client, PortError> {
            self.clients
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Client", id))
        }

        async fn list_clients(&self) -> Result<Vec<Client>, PortError> {
            let mut clients: Vec<Client> = self.clients.read().await.values().cloned().collect();
            clients.sort_by_key(|c| (c.created_at, c.id));
            Ok(clients)
        }

        async fn create_client(&self, request: NewClient) -> Result<Client, PortError> {
            let client = Client::from_new(ClientId::new_v7(), request, Utc::now())
                .ok_or_else(|| PortError::validation_field("Date of birth is required", "dateOfBirth"))?;
            self.clients.write().await.insert(client.id, client.clone());
            Ok(client)
        }

        async fn delete_client(&self, id: ClientId) -> Result<(), PortError> {
            self.clients
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Client", id))
        }
    }
}
