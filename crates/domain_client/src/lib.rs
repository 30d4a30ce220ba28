//! Client Management Domain
//!
//! This crate manages the insured persons of the system. A client carries the
//! two risk attributes the premium engine reads (date of birth and annual
//! income) plus contact details used by the CRM views.
//!
//! A client owns its policies. Policies reference their client by
//! [`ClientId`](core_kernel::ClientId); removing a client removes its policies
//! in the storage layer.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_client::{ClientValidator, NewClient};
//!
//! let request = NewClient {
//!     first_name: "John".to_string(),
//!     last_name: "Smith".to_string(),
//!     email: "john.smith@example.com".to_string(),
//!     date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
//!     annual_income: Some(60000.0),
//!     ..Default::default()
//! };
//!
//! assert!(ClientValidator::validate(&request).is_ok());
//! ```

pub mod client;
pub mod error;
pub mod validation;
pub mod ports;
pub mod services;

pub use client::{Client, NewClient};
pub use error::ClientError;
pub use validation::ClientValidator;
pub use ports::ClientPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockClientPort;
pub use services::ClientService;
