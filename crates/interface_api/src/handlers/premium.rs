//! Premium calculation handler

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::policy::{PolicyRequest, PremiumQuery, PremiumResponse};
use crate::{error::ApiError, AppState};

/// Prices a policy for a stored client without issuing it
pub async fn calculate_premium(
    State(state): State<AppState>,
    Query(query): Query<PremiumQuery>,
    Json(request): Json<PolicyRequest>,
) -> Result<Json<PremiumResponse>, ApiError> {
    let premium = state
        .policies
        .calculate_premium(query.client_id, &request.into())
        .await?;
    Ok(Json(PremiumResponse::new(query.client_id, premium)))
}
