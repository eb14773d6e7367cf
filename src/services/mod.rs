pub mod hierarchy_service;
pub mod logbook_service;
pub mod meeting_service;
pub mod member_service;
pub mod membership_service;
pub mod workgroup_service;

pub use hierarchy_service::{
    HierarchyService, PgWorkgroupStore, StaticWorkgroupStore, WorkgroupStore, WorkgroupTree,
};
pub use logbook_service::LogbookService;
pub use meeting_service::MeetingService;
pub use member_service::MemberService;
pub use membership_service::MembershipService;
pub use workgroup_service::WorkgroupService;

use thiserror::Error;

use crate::database::DatabaseError;
use crate::hierarchy::HierarchyError;
use crate::validation::FieldErrors;

/// Errors surfaced by the service layer to the handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),

    #[error("Validation failed")]
    Validation(FieldErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        ServiceError::Database(DatabaseError::Sqlx(err))
    }
}

impl From<FieldErrors> for ServiceError {
    fn from(errors: FieldErrors) -> Self {
        ServiceError::Validation(errors)
    }
}
