use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::validation::{FieldErrors, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Entity for Member {
    const TABLE: &'static str = "members";
    const LABEL: &'static str = "Member";
}

/// Body of POST and PUT /api/members
#[derive(Debug, Clone, Deserialize)]
pub struct MemberInput {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Validate for MemberInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_text("first_name", &self.first_name);
        errors.require_text("last_name", &self.last_name);
        if let Some(email) = self.email.as_deref() {
            if !looks_like_email(email) {
                errors.add("email", "Invalid email address");
            }
        }
        errors.into_result()
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(looks_like_email("ada@example.org"));
        assert!(!looks_like_email("ada"));
        assert!(!looks_like_email("@example.org"));
        assert!(!looks_like_email("ada@localhost"));
    }

    #[test]
    fn names_are_required() {
        let input = MemberInput {
            first_name: "".into(),
            last_name: "Lovelace".into(),
            email: Some("nope".into()),
            phone: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.get("first_name").is_some());
        assert!(errors.get("last_name").is_none());
        assert_eq!(errors.get("email"), Some("Invalid email address"));
    }
}
