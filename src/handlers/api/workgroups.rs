use axum::extract::State;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::app::AppState;
use crate::database::models::{LogbookEntry, Meeting, Membership, Workgroup, WorkgroupInput};
use crate::hierarchy::WorkgroupRecord;
use crate::middleware::{ApiPath, ApiQuery, ApiResponse, ApiResult, ValidJson};
use crate::services::{
    HierarchyService, LogbookService, MeetingService, MembershipService, WorkgroupService,
    WorkgroupTree,
};

#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    /// Workgroup whose breadcrumb should accompany the tree
    pub selected: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct MembersQuery {
    /// Only memberships active on this date (YYYY-MM-DD)
    pub active_on: Option<NaiveDate>,
}

/// GET /api/workgroups - Flat list of all workgroups
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Workgroup>> {
    let workgroups = WorkgroupService::new(state.pool()).list().await?;
    Ok(ApiResponse::success(workgroups))
}

/// POST /api/workgroups - Create a workgroup, optionally under a parent
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<WorkgroupInput>,
) -> ApiResult<Workgroup> {
    HierarchyService::new(state.workgroups.clone())
        .check_parent(None, input.parent_id)
        .await?;
    let workgroup = WorkgroupService::new(state.pool()).create(&input).await?;
    Ok(ApiResponse::created(workgroup))
}

/// GET /api/workgroups/tree - Nested forest plus breadcrumb of `?selected=`
pub async fn tree(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TreeQuery>,
) -> ApiResult<WorkgroupTree> {
    let tree = HierarchyService::new(state.workgroups.clone())
        .tree(query.selected)
        .await?;
    Ok(ApiResponse::success(tree))
}

/// GET /api/workgroups/:id - Single workgroup
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Workgroup> {
    let workgroup = WorkgroupService::new(state.pool()).get(id).await?;
    Ok(ApiResponse::success(workgroup))
}

/// PUT /api/workgroups/:id - Replace name, parent and description
///
/// The new parent must exist and must not be the workgroup itself or one of
/// its descendants.
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidJson(input): ValidJson<WorkgroupInput>,
) -> ApiResult<Workgroup> {
    HierarchyService::new(state.workgroups.clone())
        .check_parent(Some(id), input.parent_id)
        .await?;
    let workgroup = WorkgroupService::new(state.pool()).update(id, &input).await?;
    Ok(ApiResponse::success(workgroup))
}

/// DELETE /api/workgroups/:id - Delete; direct children become roots
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<()> {
    WorkgroupService::new(state.pool()).delete(id).await?;
    Ok(ApiResponse::no_content())
}

/// GET /api/workgroups/:id/path - Breadcrumb from the top-most ancestor down
/// to `id`; empty when `id` is unknown
pub async fn path(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Vec<WorkgroupRecord>> {
    let path = HierarchyService::new(state.workgroups.clone()).path(id).await?;
    Ok(ApiResponse::success(path))
}

/// GET /api/workgroups/:id/children - Direct children in stored order
pub async fn children(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Vec<WorkgroupRecord>> {
    let children = HierarchyService::new(state.workgroups.clone())
        .children(id)
        .await?;
    Ok(ApiResponse::success(children))
}

/// GET /api/workgroups/:id/members - Memberships, optionally `?active_on=`
pub async fn members(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiQuery(query): ApiQuery<MembersQuery>,
) -> ApiResult<Vec<Membership>> {
    let memberships = MembershipService::new(state.pool())
        .for_workgroup(id, query.active_on)
        .await?;
    Ok(ApiResponse::success(memberships))
}

/// GET /api/workgroups/:id/meetings
pub async fn meetings(State(state): State<AppState>, ApiPath(id): ApiPath<i32>) -> ApiResult<Vec<Meeting>> {
    let meetings = MeetingService::new(state.pool()).for_workgroup(id).await?;
    Ok(ApiResponse::success(meetings))
}

/// GET /api/workgroups/:id/logbook
pub async fn logbook(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Vec<LogbookEntry>> {
    let entries = LogbookService::new(state.pool()).for_workgroup(id).await?;
    Ok(ApiResponse::success(entries))
}
