use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{Attendance, AttendanceInput};
use crate::middleware::{ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::services::MeetingService;

/// POST /api/attendance - Record or overwrite one member's attendance
pub async fn record(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<AttendanceInput>,
) -> ApiResult<Attendance> {
    let attendance = MeetingService::new(state.pool()).record_attendance(&input).await?;
    Ok(ApiResponse::success(attendance))
}

/// DELETE /api/attendance/:id
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    MeetingService::new(state.pool()).delete_attendance(id).await?;
    Ok(ApiResponse::no_content())
}
