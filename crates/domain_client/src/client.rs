//! Client records
//!
//! A client is the insured person. The pricing engine reads only the date of
//! birth and annual income; the remaining contact fields are carried for the
//! CRM views and are opaque to pricing.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{whole_years_between, ClientId};

/// A stored client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Used to derive the age at pricing time; never cached as an age
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub occupation: Option<String>,
    /// Annual income, non-negative
    pub annual_income: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Builds a stored client from a validated request and an assigned identity
    pub fn from_new(id: ClientId, new: NewClient, now: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            date_of_birth: new.date_of_birth?,
            address: new.address,
            occupation: new.occupation,
            annual_income: new.annual_income.unwrap_or(0.0),
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the full name in "First Last" format
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years as of the given date
    pub fn age_on(&self, date: NaiveDate) -> i32 {
        whole_years_between(self.date_of_birth, date)
    }
}

/// Request for creating a client, before validation
///
/// Required fields may still be blank or absent here; see
/// [`ClientValidator`](crate::validation::ClientValidator).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClient {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub occupation: Option<String>,
    /// Absent income is stored as zero
    pub annual_income: Option<f64>,
}
