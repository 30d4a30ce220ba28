//! Policy Domain Ports
//!
//! The `PolicyPort` trait is what the lifecycle service needs from policy
//! storage. Identities and timestamps are assigned by the implementation.

use async_trait::async_trait;

use core_kernel::{ClientId, DomainPort, HealthCheckable, PolicyId, PortError};

use crate::policy::{NewPolicy, Policy};

/// The port trait for policy storage
#[async_trait]
pub trait PolicyPort: DomainPort + HealthCheckable {
    /// Retrieves a policy by ID, or `PortError::NotFound`
    async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError>;

    /// Lists the policies owned by a client, oldest first
    async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError>;

    /// Stores a priced policy and returns it with its identity assigned
    async fn insert_policy(&self, policy: NewPolicy) -> Result<Policy, PortError>;

    /// Replaces the stored terms and premium of an existing policy
    ///
    /// Returns the record as stored, with `updated_at` refreshed.
    async fn update_policy(&self, policy: &Policy) -> Result<Policy, PortError>;
}

/// In-memory implementation of PolicyPort for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use core_kernel::{AdapterHealth, HealthCheckResult};

    #[derive(Debug, Default)]
    pub struct MockPolicyPort {
        policies: Arc<RwLock<HashMap<PolicyId, Policy>>>,
    }

    impl MockPolicyPort {
        pub fn new() -> Self {
            Self::default()
        }

        /// Number of stored policies
        pub async fn len(&self) -> usize {
            self.policies.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }
    }

    impl DomainPort for MockPolicyPort {}

    #[async_trait]
    impl HealthCheckable for MockPolicyPort {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-policy-port".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms: 0,
                message: None,
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl PolicyPort for MockPolicyPort {
        async fn get_policy(&self, id: PolicyId) -> Result<Policy, PortError> {
            self.policies
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Policy", id))
        }

        async fn find_by_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PortError> {
            let mut policies: Vec<Policy> = self
                .policies
                .read()
                .await
                .values()
                .filter(|p| p.client_id == client_id)
                .cloned()
                .collect();
            policies.sort_by_key(|p| (p.created_at, p.id));
            Ok(policies)
        }

        async fn insert_policy(&self, policy: NewPolicy) -> Result<Policy, PortError> {
            let stored = Policy::from_new(PolicyId::new_v7(), policy, Utc::now());
            self.policies.write().await.insert(stored.id, stored.clone());
            Ok(stored)
        }

        async fn update_policy(&self, policy: &Policy) -> Result<Policy, PortError> {
            let mut store = self.policies.write().await;
            let existing = store
                .get_mut(&policy.id)
                .ok_or_else(|| PortError::not_found("Policy", policy.id))?;
            *existing = Policy {
                created_at: existing.created_at,
                updated_at: Utc::now(),
                ..policy.clone()
            };
            Ok(existing.clone())
        }
    }
}
