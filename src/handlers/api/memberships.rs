use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Membership, MembershipInput};
use crate::middleware::{ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::services::MembershipService;

/// GET /api/memberships
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Membership>> {
    let memberships = MembershipService::new(state.pool()).list().await?;
    Ok(ApiResponse::success(memberships))
}

/// POST /api/memberships - Unknown member or workgroup ids yield 422
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<MembershipInput>,
) -> ApiResult<Membership> {
    let membership = MembershipService::new(state.pool()).create(&input).await?;
    Ok(ApiResponse::created(membership))
}

/// GET /api/memberships/:id
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Membership> {
    let membership = MembershipService::new(state.pool()).get(id).await?;
    Ok(ApiResponse::success(membership))
}

/// PUT /api/memberships/:id
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<MembershipInput>,
) -> ApiResult<Membership> {
    let membership = MembershipService::new(state.pool()).update(id, &input).await?;
    Ok(ApiResponse::success(membership))
}

/// DELETE /api/memberships/:id
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    MembershipService::new(state.pool()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
