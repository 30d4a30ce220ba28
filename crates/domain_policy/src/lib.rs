//! Policy Pricing Domain
//!
//! This crate validates life insurance policy applications, prices them and
//! manages stored policies.
//!
//! # Architecture
//!
//! - **Validation**: [`PolicyValidator`] checks a raw [`PolicyApplication`]
//!   and produces typed [`PolicyTerms`]
//! - **Base premium**: [`PremiumFactors`] derives the type-agnostic premium
//!   from the client's age and income and the coverage amount
//! - **Strategies**: [`PricingStrategy`] applies the adjustment of each
//!   [`PolicyType`]
//! - **Services**: [`PremiumService`] runs the pure calculation and
//!   [`PolicyLifecycleService`] creates and amends stored policies through
//!   the [`PolicyPort`] and [`ClientPort`](domain_client::ClientPort)
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::{NaiveDate, Utc};
//! use core_kernel::{ClientId, FixedClock};
//! use domain_client::{Client, NewClient};
//! use domain_policy::{PolicyApplication, PremiumService};
//!
//! let client = Client::from_new(
//!     ClientId::new(),
//!     NewClient {
//!         first_name: "John".to_string(),
//!         last_name: "Smith".to_string(),
//!         email: "john@example.com".to_string(),
//!         date_of_birth: NaiveDate::from_ymd_opt(1980, 1, 1),
//!         annual_income: Some(60000.0),
//!         ..Default::default()
//!     },
//!     Utc::now(),
//! )
//! .unwrap();
//!
//! let application = PolicyApplication {
//!     policy_type: Some("WHOLE_LIFE".to_string()),
//!     coverage_amount: Some(100000.0),
//!     start_date: Some("2024-01-01".to_string()),
//!     beneficiary_name: Some("Jane Doe".to_string()),
//!     beneficiary_relation: Some("Spouse".to_string()),
//!     ..Default::default()
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let engine = PremiumService::new(Arc::new(FixedClock::new(today)));
//! let premium = engine.calculate_premium(&client, &application).unwrap();
//! assert!((premium - 441.8).abs() < 1e-6);
//! ```

pub mod policy;
pub mod validation;
pub mod premium;
pub mod strategy;
pub mod error;
pub mod ports;
pub mod services;

pub use policy::{
    NewPolicy, Policy, PolicyAmendment, PolicyApplication, PolicyTerms, PolicyType,
    UnknownPolicyType,
};
pub use validation::{PolicyField, PolicyValidator, ValidationFailure};
pub use premium::PremiumFactors;
pub use strategy::{PricingError, PricingStrategy};
pub use error::PolicyError;
pub use ports::PolicyPort;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockPolicyPort;
pub use services::{PolicyLifecycleService, PremiumQuote, PremiumService};
