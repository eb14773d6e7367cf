use axum::{extract::DefaultBodyLimit, http::HeaderValue, routing::get, Router};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::database::DatabaseManager;
use crate::handlers;
use crate::services::{PgWorkgroupStore, WorkgroupStore};

/// Shared per-process dependencies handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseManager,
    pub workgroups: Arc<dyn WorkgroupStore>,
}

impl AppState {
    /// Hierarchy reads go through the same pool as everything else
    pub fn new(db: DatabaseManager) -> Self {
        let workgroups = Arc::new(PgWorkgroupStore::new(db.pool().clone()));
        Self { db, workgroups }
    }

    /// Replace the workgroup snapshot source (tests, offline tools)
    pub fn with_workgroup_store(mut self, store: Arc<dyn WorkgroupStore>) -> Self {
        self.workgroups = store;
        self
    }

    pub fn pool(&self) -> PgPool {
        self.db.pool().clone()
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        // API
        .merge(workgroup_routes())
        .merge(member_routes())
        .merge(membership_routes())
        .merge(meeting_routes())
        .merge(logbook_routes())
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config.security.cors_origins));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router
}

fn workgroup_routes() -> Router<AppState> {
    use handlers::api::workgroups;

    Router::new()
        .route("/api/workgroups", get(workgroups::list).post(workgroups::create))
        .route("/api/workgroups/tree", get(workgroups::tree))
        .route(
            "/api/workgroups/:id",
            get(workgroups::get)
                .put(workgroups::update)
                .delete(workgroups::delete),
        )
        .route("/api/workgroups/:id/path", get(workgroups::path))
        .route("/api/workgroups/:id/children", get(workgroups::children))
        .route("/api/workgroups/:id/members", get(workgroups::members))
        .route("/api/workgroups/:id/meetings", get(workgroups::meetings))
        .route("/api/workgroups/:id/logbook", get(workgroups::logbook))
}

fn member_routes() -> Router<AppState> {
    use handlers::api::members;

    Router::new()
        .route("/api/members", get(members::list).post(members::create))
        .route(
            "/api/members/:id",
            get(members::get).put(members::update).delete(members::delete),
        )
        .route("/api/members/:id/memberships", get(members::memberships))
}

fn membership_routes() -> Router<AppState> {
    use handlers::api::memberships;

    Router::new()
        .route("/api/memberships", get(memberships::list).post(memberships::create))
        .route(
            "/api/memberships/:id",
            get(memberships::get)
                .put(memberships::update)
                .delete(memberships::delete),
        )
}

fn meeting_routes() -> Router<AppState> {
    use axum::routing::{delete, post};
    use handlers::api::{attendance, meetings};

    Router::new()
        .route("/api/meetings", get(meetings::list).post(meetings::create))
        .route(
            "/api/meetings/:id",
            get(meetings::get).put(meetings::update).delete(meetings::delete),
        )
        .route("/api/meetings/:id/attendance", get(meetings::attendance))
        .route("/api/attendance", post(attendance::record))
        .route("/api/attendance/:id", delete(attendance::delete))
}

fn logbook_routes() -> Router<AppState> {
    use handlers::api::logbook;

    Router::new()
        .route("/api/logbook", get(logbook::list).post(logbook::create))
        .route(
            "/api/logbook/:id",
            get(logbook::get).put(logbook::update).delete(logbook::delete),
        )
}

/// Empty origin list or `*` means permissive
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}
