use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::Entity;
use crate::types::MembershipRole;
use crate::validation::{FieldErrors, Validate};

/// A member's role in a workgroup between `start_date` and `end_date`
/// (inclusive; open-ended when `end_date` is null)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Membership {
    pub id: i32,
    pub member_id: i32,
    pub workgroup_id: i32,
    #[sqlx(try_from = "String")]
    pub role: MembershipRole,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Membership {
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && self.end_date.map_or(true, |end| date <= end)
    }
}

impl Entity for Membership {
    const TABLE: &'static str = "memberships";
    const LABEL: &'static str = "Membership";
}

/// Body of POST and PUT /api/memberships
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipInput {
    pub member_id: i32,
    pub workgroup_id: i32,
    #[serde(default)]
    pub role: MembershipRole,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Validate for MembershipInput {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.require_positive("member_id", self.member_id);
        errors.require_positive("workgroup_id", self.workgroup_id);
        errors.require_ordered("end_date", &self.start_date, self.end_date.as_ref(), "start_date");
        errors.into_result()
    }
}
