use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::types::AttendanceStatus;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    pub id: i32,
    pub meeting_id: i32,
    pub member_id: i32,
    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Attendance {
    const TABLE: &'static str = "attendance";
    const LABEL: &'static str = "Attendance record";
}

fn default_status() -> AttendanceStatus {
    AttendanceStatus::Present
}

/// Body of POST /api/attendance; one record per (meeting, member)
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceInput {
    pub meeting_id: i32,
    pub member_id: i32,
    #[serde(default = "default_status")]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub note: Option<String>,
}

impl Validate for AttendanceInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_positive("meeting_id", self.meeting_id);
        errors.require_positive("member_id", self.member_id);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_present() {
        let input: AttendanceInput = serde_json::from_str(r#"{"meeting_id":1,"member_id":2}"#).unwrap();
        assert_eq!(input.status, AttendanceStatus::Present);
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let parsed = serde_json::from_str::<AttendanceInput>(r#"{"meeting_id":1,"member_id":2,"status":"late"}"#);
        assert!(parsed.is_err());
    }
}
