//! Client domain services

use std::sync::Arc;

use tracing::{info, instrument};

use core_kernel::ClientId;

use crate::client::{Client, NewClient};
use crate::error::ClientError;
use crate::ports::ClientPort;
use crate::validation::ClientValidator;

/// Service for client registration and lookup
///
/// Validates requests before they reach storage and translates port
/// failures into [`ClientError`].
#[derive(Clone)]
pub struct ClientService {
    clients: Arc<dyn ClientPort>,
}

impl ClientService {
    pub fn new(clients: Arc<dyn ClientPort>) -> Self {
        Self { clients }
    }

    /// Validates and stores a new client
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: NewClient) -> Result<Client, ClientError> {
        ClientValidator::validate(&request)?;
        let client = self.clients.create_client(request).await?;
        info!(client_id = %client.id, "Client registered");
        Ok(client)
    }

    pub async fn get(&self, id: ClientId) -> Result<Client, ClientError> {
        self.clients.get_client(id).await.map_err(|e| {
            if e.is_not_found() {
                ClientError::NotFound(id)
            } else {
                ClientError::from(e)
            }
        })
    }

    pub async fn list(&self) -> Result<Vec<Client>, ClientError> {
        Ok(self.clients.list_clients().await?)
    }

    /// Deletes a client together with the policies it owns
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ClientId) -> Result<(), ClientError> {
        self.clients.delete_client(id).await.map_err(|e| {
            if e.is_not_found() {
                ClientError::NotFound(id)
            } else {
                ClientError::from(e)
            }
        })?;
        info!(client_id = %id, "Client deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::mock::MockClientPort;
    use chrono::NaiveDate;

    fn service() -> ClientService {
        ClientService::new(Arc::new(MockClientPort::new()))
    }

    fn request() -> NewClient {
        NewClient {
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            email: "john@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
            annual_income: Some(60000.0),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_and_get() {
        let service = service();
        let client = service.register(request()).await.unwrap();
        assert_eq!(service.get(client.id).await.unwrap().email, "john@example.com");
    }

    #[tokio::test]
    async fn test_register_rejects_invalid_request_before_storage() {
        let service = service();
        let mut invalid = request();
        invalid.first_name.clear();

        let error = service.register(invalid).await.unwrap_err();
        assert_eq!(error.field(), Some("firstName"));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_client_is_not_found() {
        let id = ClientId::new();
        let error = service().get(id).await.unwrap_err();
        assert!(matches!(error, ClientError::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn test_delete() {
        let service = service();
        let client = service.register(request()).await.unwrap();
        service.delete(client.id).await.unwrap();
        assert!(matches!(service.delete(client.id).await, Err(ClientError::NotFound(_))));
    }
}
