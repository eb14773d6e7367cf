use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field validation messages collected at the API boundary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        // First message per field wins
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn require_text(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.add(field, "This field is required");
        }
    }

    pub fn require_positive(&mut self, field: &str, value: i32) {
        if value <= 0 {
            self.add(field, "Must be a positive id");
        }
    }

    pub fn require_ordered<T: PartialOrd>(&mut self, field: &str, start: &T, end: Option<&T>, start_field: &str) {
        if let Some(end) = end {
            if end < start {
                self.add(field, format!("Must not be before {}", start_field));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Input payloads that can be checked before touching the database
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn blank_text_is_required() {
        let mut errors = FieldErrors::new();
        errors.require_text("name", "   ");
        assert_eq!(errors.get("name"), Some("This field is required"));
    }

    #[test]
    fn first_message_per_field_is_kept() {
        let mut errors = FieldErrors::new();
        errors.add("name", "first");
        errors.add("name", "second");
        assert_eq!(errors.get("name"), Some("first"));
    }

    #[test]
    fn end_before_start_is_flagged() {
        let mut errors = FieldErrors::new();
        errors.require_ordered("end_date", &5, Some(&3), "start_date");
        errors.require_ordered("other", &5, None, "start_date");
        assert_eq!(errors.get("end_date"), Some("Must not be before start_date"));
        assert!(errors.get("other").is_none());
    }
}
