//! Test Utilities Crate
//!
//! Shared test infrastructure for the policy engine test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built clients, dates and applications
//! - `builders`: Builder patterns for test data construction
//! - `database`: PostgreSQL test containers with the schema applied
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use generators::*;
