use axum::extract::State;

use crate::app::AppState;
use crate::database::models::{LogbookEntry, LogbookInput};
use crate::middleware::{ApiPath, ApiResponse, ApiResult, ValidJson};
use crate::services::LogbookService;

/// GET /api/logbook
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<LogbookEntry>> {
    let entries = LogbookService::new(state.pool()).list().await?;
    Ok(ApiResponse::success(entries))
}

/// POST /api/logbook
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<LogbookInput>,
) -> ApiResult<LogbookEntry> {
    let entry = LogbookService::new(state.pool()).create(&input).await?;
    Ok(ApiResponse::created(entry))
}

/// GET /api/logbook/:id
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<LogbookEntry> {
    let entry = LogbookService::new(state.pool()).get(id).await?;
    Ok(ApiResponse::success(entry))
}

/// PUT /api/logbook/:id - Omitting `entry_date` keeps the stored date
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<LogbookInput>,
) -> ApiResult<LogbookEntry> {
    let entry = LogbookService::new(state.pool()).update(id, &input).await?;
    Ok(ApiResponse::success(entry))
}

/// DELETE /api/logbook/:id
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    LogbookService::new(state.pool()).delete(id).await?;
    Ok(ApiResponse::no_content())
}
