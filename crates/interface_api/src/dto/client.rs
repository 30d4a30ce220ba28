//! Client DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::ClientId;
use domain_client::{Client, NewClient};

use super::policy::PolicyResponse;

/// Body of `POST /api/clients`
///
/// Required-field rules live in the client domain; this layer only bounds
/// field lengths.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateClientRequest {
    #[serde(default)]
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(length(max = 254, message = "Email must be at most 254 characters"))]
    pub email: String,
    #[validate(length(max = 32, message = "Phone must be at most 32 characters"))]
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,
    #[validate(length(max = 100, message = "Occupation must be at most 100 characters"))]
    pub occupation: Option<String>,
    pub annual_income: Option<f64>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(request: CreateClientRequest) -> Self {
        NewClient {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            address: request.address,
            occupation: request.occupation,
            annual_income: request.annual_income,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: ClientId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: NaiveDate,
    pub address: Option<String>,
    pub occupation: Option<String>,
    pub annual_income: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            date_of_birth: client.date_of_birth,
            address: client.address,
            occupation: client.occupation,
            annual_income: client.annual_income,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// A client together with the policies it owns
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailResponse {
    #[serde(flatten)]
    pub client: ClientResponse,
    pub policies: Vec<PolicyResponse>,
}
