//! Client handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use core_kernel::ClientId;

use crate::dto::client::{ClientDetailResponse, ClientResponse, CreateClientRequest};
use crate::dto::policy::{PolicyRequest, PolicyResponse};
use crate::{error::ApiError, AppState};

/// Registers a new client
pub async fn create_client(
    State(state): State<AppState>,
    Json(request): Json<CreateClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), ApiError> {
    request.validate()?;
    let client = state.clients.register(request.into()).await?;
    Ok((StatusCode::CREATED, Json(client.into())))
}

/// Lists all clients
pub async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, ApiError> {
    let clients = state.clients.list().await?;
    Ok(Json(clients.into_iter().map(ClientResponse::from).collect()))
}

/// Gets a client with its policies
pub async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<ClientDetailResponse>, ApiError> {
    let client = state.clients.get(id).await?;
    let policies = state.policies.policies_for_client(id).await?;
    Ok(Json(ClientDetailResponse {
        client: client.into(),
        policies: policies.into_iter().map(PolicyResponse::from).collect(),
    }))
}

/// Deletes a client and every policy it owns
pub async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<StatusCode, ApiError> {
    state.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Lists the policies of a client
pub async fn list_client_policies(
    State(state): State<AppState>,
    Path(id): Path<ClientId>,
) -> Result<Json<Vec<PolicyResponse>>, ApiError> {
    let policies = state.policies.policies_for_client(id).await?;
    Ok(Json(policies.into_iter().map(PolicyResponse::from).collect()))
}

/// Issues a new policy for a client
pub async fn create_policy(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(request): Json<PolicyRequest>,
) -> Result<(StatusCode, Json<PolicyResponse>), ApiError> {
    let policy = state.policies.create(client_id, request.into()).await?;
    Ok((StatusCode::CREATED, Json(policy.into())))
}
