//! Core Kernel - Foundational types shared by the insurance pricing crates
//!
//! This crate provides the building blocks used across the domain modules:
//! - Strongly-typed identifiers for clients and policies
//! - Calendar arithmetic (whole-year ages, year offsets) and an injectable clock
//! - Port abstractions for the hexagonal architecture

pub mod identifiers;
pub mod temporal;
pub mod ports;

pub use identifiers::{ClientId, PolicyId};
pub use temporal::{Clock, SystemClock, FixedClock, TemporalError, whole_years_between, add_years};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
