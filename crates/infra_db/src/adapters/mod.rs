//! Domain Adapters
//!
//! PostgreSQL implementations of the domain ports. Each adapter implements
//! its domain's port trait on top of a repository and translates rows into
//! domain records and `DatabaseError` into `PortError`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_client::ClientPort;
//! use domain_policy::PolicyPort;
//! use infra_db::adapters::{PostgresClientAdapter, PostgresPolicyAdapter};
//!
//! let clients: Arc<dyn ClientPort> = Arc::new(PostgresClientAdapter::new(pool.clone()));
//! let policies: Arc<dyn PolicyPort> = Arc::new(PostgresPolicyAdapter::new(pool));
//! ```

use chrono::Utc;
use sqlx::PgPool;

use core_kernel::{AdapterHealth, HealthCheckResult};

pub mod client;
pub mod policy;

pub use client::PostgresClientAdapter;
pub use policy::PostgresPolicyAdapter;

/// Runs `SELECT 1` against the pool and reports the outcome
pub(crate) async fn ping(pool: &PgPool, adapter_id: &str) -> HealthCheckResult {
    let start = std::time::Instant::now();

    let result = sqlx::query_scalar::<_, i32>("SELECT 1").fetch_one(pool).await;

    let latency_ms = start.elapsed().as_millis() as u64;

    let (status, message) = match result {
        Ok(_) => (AdapterHealth::Healthy, None),
        Err(e) => (AdapterHealth::Unhealthy, Some(format!("Database error: {}", e))),
    };

    HealthCheckResult {
        adapter_id: adapter_id.to_string(),
        status,
        latency_ms,
        message,
        checked_at: Utc::now(),
    }
}
