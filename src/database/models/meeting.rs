use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Meeting {
    pub id: i32,
    pub workgroup_id: i32,
    pub title: String,
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Meeting {
    const TABLE: &'static str = "meetings";
    const LABEL: &'static str = "Meeting";
}

/// Body of POST and PUT /api/meetings
#[derive(Debug, Clone, Deserialize)]
pub struct MeetingInput {
    pub workgroup_id: i32,
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub ends_at: Option<DateTime<Utc>>,
}

impl Validate for MeetingInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_positive("workgroup_id", self.workgroup_id);
        errors.require_text("title", &self.title);
        errors.require_ordered("ends_at", &self.starts_at, self.ends_at.as_ref(), "starts_at");
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeting_cannot_end_before_it_starts() {
        let input: MeetingInput = serde_json::from_str(
            r#"{"workgroup_id":3,"title":"Budget review",
                "starts_at":"2024-03-01T18:00:00Z","ends_at":"2024-03-01T17:00:00Z"}"#,
        )
        .unwrap();
        let errors = input.validate().unwrap_err();
        assert_eq!(errors.get("ends_at"), Some("Must not be before starts_at"));
    }
}
