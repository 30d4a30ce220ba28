//! Policy handlers

use axum::{
    extract::{Path, State},
    Json,
};

use core_kernel::PolicyId;

use crate::dto::policy::{PolicyResponse, UpdatePolicyRequest};
use crate::{error::ApiError, AppState};

/// Gets a policy by ID
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.policies.get(id).await?;
    Ok(Json(policy.into()))
}

/// Amends a policy and returns it repriced
pub async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<PolicyId>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<PolicyResponse>, ApiError> {
    let policy = state.policies.update(id, request.into()).await?;
    Ok(Json(policy.into()))
}
