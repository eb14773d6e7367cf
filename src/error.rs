// HTTP API Error Types
use axum::{response::IntoResponse, http::StatusCode, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::database::DatabaseError;
use crate::hierarchy::HierarchyError;
use crate::services::ServiceError;
use crate::validation::FieldErrors;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },
    InvalidJson(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 422 Unprocessable Entity (well-formed, but references something missing)
    UnprocessableEntity {
        message: String,
        field_errors: HashMap<String, String>,
    },

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::ValidationError { .. } => 400,
            ApiError::InvalidJson(_) => 400,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::UnprocessableEntity { .. } => 422,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::InvalidJson(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::UnprocessableEntity { message, .. } => message,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError { message, field_errors } => {
                let mut response = json!({
                    "error": true,
                    "message": message,
                    "code": "VALIDATION_ERROR"
                });

                if let Some(field_errors) = field_errors {
                    response["field_errors"] = json!(field_errors);
                }

                response
            }
            ApiError::UnprocessableEntity { message, field_errors } => {
                json!({
                    "error": true,
                    "message": message,
                    "code": "UNPROCESSABLE_ENTITY",
                    "field_errors": field_errors
                })
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::InvalidJson(_) => "INVALID_JSON",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::UnprocessableEntity { .. } => "UNPROCESSABLE_ENTITY",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn invalid_json(message: impl Into<String>) -> Self {
        ApiError::InvalidJson(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn unprocessable_entity(
        message: impl Into<String>,
        field_errors: HashMap<String, String>,
    ) -> Self {
        ApiError::UnprocessableEntity {
            message: message.into(),
            field_errors,
        }
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert other error types to ApiError
impl From<FieldErrors> for ApiError {
    fn from(errors: FieldErrors) -> Self {
        ApiError::validation_error(
            "Validation failed",
            Some(errors.into_map().into_iter().collect()),
        )
    }
}

impl From<HierarchyError> for ApiError {
    fn from(err: HierarchyError) -> Self {
        tracing::warn!("Workgroup hierarchy is inconsistent: {}", err);
        ApiError::conflict(err.to_string())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            DatabaseError::ConfigMissing(_) | DatabaseError::InvalidDatabaseUrl => {
                tracing::error!("Database misconfigured: {}", err);
                ApiError::internal_server_error("Database is not configured")
            }
            DatabaseError::Migration(e) => {
                tracing::error!("Migration error: {}", e);
                ApiError::service_unavailable("Service is being updated, please try again later")
            }
            DatabaseError::Sqlx(e) => from_sqlx(e),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(e) => e.into(),
            ServiceError::Hierarchy(e) => e.into(),
            ServiceError::Validation(errors) => errors.into(),
            ServiceError::NotFound(msg) => ApiError::not_found(msg),
        }
    }
}

fn from_sqlx(err: sqlx::Error) -> ApiError {
    match &err {
        sqlx::Error::RowNotFound => ApiError::not_found("Record not found"),
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::conflict("A record with these values already exists")
        }
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            let field = db_err
                .constraint()
                .map(field_from_constraint)
                .unwrap_or_else(|| "reference".to_string());
            let mut field_errors = HashMap::new();
            field_errors.insert(field, "Referenced record does not exist".to_string());
            ApiError::unprocessable_entity("Referenced record does not exist", field_errors)
        }
        sqlx::Error::Database(db_err) if db_err.is_check_violation() => {
            ApiError::bad_request("Value violates a data constraint")
        }
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
            tracing::error!("Database connection error: {}", err);
            ApiError::service_unavailable("Database temporarily unavailable")
        }
        _ => {
            // Log the real error but return generic message
            tracing::error!("SQLx error: {}", err);
            ApiError::internal_server_error("Database error occurred")
        }
    }
}

/// `memberships_member_id_fkey` -> `member_id`
fn field_from_constraint(constraint: &str) -> String {
    let base = constraint.strip_suffix("_fkey").unwrap_or(constraint);
    let mut parts = base.rsplitn(3, '_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("id"), Some(column), Some(_table)) => format!("{}_id", column),
        _ => base.to_string(),
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
