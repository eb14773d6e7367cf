use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;

/// GET / - Service name, version and endpoint index
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Membership API",
            "version": version,
            "description": "Workgroups, members, memberships, meetings, attendance and logbooks",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "workgroups": "/api/workgroups[/:id], /api/workgroups/tree?selected=:id, /api/workgroups/:id/{path,children,members,meetings,logbook}",
                "members": "/api/members[/:id], /api/members/:id/memberships",
                "memberships": "/api/memberships[/:id]",
                "meetings": "/api/meetings[/:id], /api/meetings/:id/attendance",
                "attendance": "/api/attendance[/:id]",
                "logbook": "/api/logbook[/:id]",
            }
        }
    }))
}

/// GET /health - Database connectivity probe
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    if let Err(e) = state.db.health_check().await {
        tracing::warn!("Health check failed: {}", e);
        return Err(ApiError::service_unavailable("Database unavailable"));
    }

    Ok(Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
            "database": "ok"
        }
    })))
}
