//! PostgreSQL adapter integration tests
//!
//! Run the policy lifecycle against a real database in a container.
//! Ignored by default because they need Docker:
//!
//! ```bash
//! cargo test -p test_utils --test postgres_adapters -- --ignored --test-threads=1
//! ```
//!
//! # Test Organization
//!
//! - `clients`: storage round trip and cascade delete
//! - `lifecycle`: create, reprice and read back through the service

use std::sync::Arc;

use chrono::NaiveDate;

use domain_client::ClientService;
use domain_policy::{PolicyAmendment, PolicyError, PolicyLifecycleService, PremiumService};
use test_utils::*;

async fn fresh_database() -> Arc<TestDatabase> {
    let db = get_shared_test_database().await;
    db.clear_data().await.expect("Failed to clear test data");
    db
}

// ============================================================================
// Clients
// ============================================================================

mod clients {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_client_round_trip() {
        let db = fresh_database().await;
        let (clients, _) = db.ports();

        let created = clients.create_client(ClientFixtures::new_client()).await.unwrap();
        let loaded = clients.get_client(created.id).await.unwrap();

        assert_eq!(loaded.email, "jane.doe@example.com");
        assert_eq!(loaded.date_of_birth, NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
        assert_eq!(loaded.annual_income, 60000.0);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_delete_cascades_to_policies() {
        let db = fresh_database().await;
        let (clients, policies) = db.ports();
        let service = PolicyLifecycleService::new(
            clients.clone(),
            policies.clone(),
            PremiumService::new(Arc::new(TemporalFixtures::fixed_clock())),
        );

        let client = clients.create_client(ClientFixtures::new_client()).await.unwrap();
        let policy = service
            .create(client.id, ApplicationFixtures::term_life())
            .await
            .unwrap();

        ClientService::new(clients).delete(client.id).await.unwrap();

        assert!(policies.get_policy(policy.id).await.unwrap_err().is_not_found());
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

mod lifecycle {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_create_and_reprice() {
        let db = fresh_database().await;
        let (clients, policies) = db.ports();
        let service = PolicyLifecycleService::new(
            clients.clone(),
            policies,
            PremiumService::new(Arc::new(TemporalFixtures::fixed_clock())),
        );
        let client = clients.create_client(ClientFixtures::new_client()).await.unwrap();

        let created = service
            .create(client.id, ApplicationFixtures::term_life())
            .await
            .unwrap();
        assert!((created.premium_amount - 294.5333333).abs() < 1e-6);
        assert_eq!(created.end_date, NaiveDate::from_ymd_opt(2044, 1, 1));

        let updated = service
            .update(
                created.id,
                PolicyAmendment {
                    term_years: Some(10),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.premium_amount < created.premium_amount);
        assert_eq!(updated.end_date, created.end_date);
        assert_eq!(updated.created_at, created.created_at);

        let listed = service.policies_for_client(client.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].terms.term_years, Some(10));
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_unknown_client_is_not_found() {
        let db = fresh_database().await;
        let (clients, policies) = db.ports();
        let service = PolicyLifecycleService::new(clients, policies, PremiumService::default());

        let err = service
            .create(core_kernel::ClientId::new(), ApplicationFixtures::term_life())
            .await
            .unwrap_err();
        assert!(matches!(err, PolicyError::NotFound { .. }));
    }
}
