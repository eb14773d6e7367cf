use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Member, MemberInput, Membership};
use crate::middleware::{ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::services::MemberService;

/// GET /api/members
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Member>> {
    let members = MemberService::new(state.pool()).list().await?;
    Ok(ApiResponse::success(members))
}

/// POST /api/members
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<MemberInput>,
) -> ApiResult<Member> {
    let member = MemberService::new(state.pool()).create(&input).await?;
    Ok(ApiResponse::created(member))
}

/// GET /api/members/:id
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Member> {
    let member = MemberService::new(state.pool()).get(id).await?;
    Ok(ApiResponse::success(member))
}

/// PUT /api/members/:id
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<MemberInput>,
) -> ApiResult<Member> {
    let member = MemberService::new(state.pool()).update(id, &input).await?;
    Ok(ApiResponse::success(member))
}

/// DELETE /api/members/:id - Also removes the member's memberships and attendance
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    MemberService::new(state.pool()).delete(id).await?;
    Ok(ApiResponse::no_content())
}

/// GET /api/members/:id/memberships - Every membership, past and present
pub async fn memberships(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Vec<Membership>> {
    let memberships = MemberService::new(state.pool()).memberships(id).await?;
    Ok(ApiResponse::success(memberships))
}
