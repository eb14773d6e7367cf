use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::hierarchy::WorkgroupRecord;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Workgroup {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Workgroup {
    const TABLE: &'static str = "workgroups";
    const LABEL: &'static str = "Workgroup";
}

impl From<&Workgroup> for WorkgroupRecord {
    fn from(workgroup: &Workgroup) -> Self {
        WorkgroupRecord::new(workgroup.id, workgroup.name.clone(), workgroup.parent_id)
    }
}

/// Body of POST and PUT /api/workgroups
#[derive(Debug, Clone, Deserialize)]
pub struct WorkgroupInput {
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for WorkgroupInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("name", &self.name);
        if let Some(parent_id) = self.parent_id {
            errors.require_positive("parent_id", parent_id);
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let input = WorkgroupInput { name: " ".into(), parent_id: Some(0), description: None };
        let errors = input.validate().unwrap_err();
        assert!(errors.get("name").is_some());
        assert!(errors.get("parent_id").is_some());
    }

    #[test]
    fn parent_is_optional() {
        let input: WorkgroupInput = serde_json::from_str(r#"{"name":"Board"}"#).unwrap();
        assert!(input.parent_id.is_none());
        assert!(input.validate().is_ok());
    }
}
