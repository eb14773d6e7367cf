use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogbookEntry {
    pub id: i32,
    pub workgroup_id: i32,
    pub member_id: Option<i32>,
    pub entry_date: NaiveDate,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for LogbookEntry {
    const TABLE: &'static str = "logbook_entries";
    const LABEL: &'static str = "Logbook entry";
}

/// Body of POST and PUT /api/logbook. `entry_date` defaults to today.
#[derive(Debug, Clone, Deserialize)]
pub struct LogbookInput {
    pub workgroup_id: i32,
    #[serde(default)]
    pub member_id: Option<i32>,
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    pub text: String,
}

impl Validate for LogbookInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_positive("workgroup_id", self.workgroup_id);
        if let Some(member_id) = self.member_id {
            errors.require_positive("member_id", member_id);
        }
        errors.require_text("text", &self.text);
        errors.into_result()
    }
}
