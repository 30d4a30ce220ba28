//! Repository implementations
//!
//! Repositories own the SQL and map rows to plain row structs; the adapters
//! in [`crate::adapters`] map those rows to domain types.
//!
//! Queries are built at runtime with `sqlx::query_as` and `FromRow` row
//! types, so building the crate does not need a live database.

pub mod client;
pub mod policy;

pub use client::{ClientRepository, ClientRow, NewClientRow};
pub use policy::{PolicyRepository, PolicyRow, PolicyValues};
