//! Infrastructure Database Layer
//!
//! PostgreSQL persistence for clients and policies using SQLx.
//!
//! # Architecture
//!
//! - [`repositories`] hold the SQL and map result sets to row structs
//! - [`adapters`] implement the domain ports (`ClientPort`, `PolicyPort`) on
//!   top of the repositories
//! - [`pool`] creates the connection pool and applies the embedded
//!   migrations
//!
//! The schema is two tables, `clients` and `policies`, with a cascading
//! foreign key from each policy to its owning client.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, run_migrations, DatabaseConfig};
//! use infra_db::adapters::PostgresPolicyAdapter;
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/insurance_crm")).await?;
//! run_migrations(&pool).await?;
//! let policies = PostgresPolicyAdapter::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, DatabaseConfig, create_pool, run_migrations};
pub use error::DatabaseError;
pub use adapters::{PostgresClientAdapter, PostgresPolicyAdapter};
