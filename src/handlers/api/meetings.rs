use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Attendance, Meeting, MeetingInput};
use crate::middleware::{ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::services::MeetingService;

/// GET /api/meetings
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Meeting>> {
    let meetings = MeetingService::new(state.pool()).list().await?;
    Ok(ApiResponse::success(meetings))
}

/// POST /api/meetings
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<MeetingInput>,
) -> ApiResult<Meeting> {
    let meeting = MeetingService::new(state.pool()).create(&input).await?;
    Ok(ApiResponse::created(meeting))
}

/// GET /api/meetings/:id
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Meeting> {
    let meeting = MeetingService::new(state.pool()).get(id).await?;
    Ok(ApiResponse::success(meeting))
}

/// PUT /api/meetings/:id
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<MeetingInput>,
) -> ApiResult<Meeting> {
    let meeting = MeetingService::new(state.pool()).update(id, &input).await?;
    Ok(ApiResponse::success(meeting))
}

/// DELETE /api/meetings/:id
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    MeetingService::new(state.pool()).delete(id).await?;
    Ok(ApiResponse::no_content())
}

/// GET /api/meetings/:id/attendance
pub async fn attendance(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Vec<Attendance>> {
    let records = MeetingService::new(state.pool()).attendance(id).await?;
    Ok(ApiResponse::success(records))
}
