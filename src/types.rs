//! Shared enums used by the models, handlers and CLI

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value that does not name any variant of a text-backed enum
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Role a member holds within a workgroup for the span of a membership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipRole {
    Member,
    Chair,
    ViceChair,
    Secretary,
    Treasurer,
    Advisor,
}

impl MembershipRole {
    pub const ALL: [MembershipRole; 6] = [
        MembershipRole::Member,
        MembershipRole::Chair,
        MembershipRole::ViceChair,
        MembershipRole::Secretary,
        MembershipRole::Treasurer,
        MembershipRole::Advisor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRole::Member => "member",
            MembershipRole::Chair => "chair",
            MembershipRole::ViceChair => "vice_chair",
            MembershipRole::Secretary => "secretary",
            MembershipRole::Treasurer => "treasurer",
            MembershipRole::Advisor => "advisor",
        }
    }
}

impl Default for MembershipRole {
    fn default() -> Self {
        MembershipRole::Member
    }
}

impl FromStr for MembershipRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MembershipRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "membership role",
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for MembershipRole {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for MembershipRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance outcome of one member at one meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Excused => "excused",
        }
    }
}

impl FromStr for AttendanceStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "excused" => Ok(AttendanceStatus::Excused),
            other => Err(UnknownVariant {
                kind: "attendance status",
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for AttendanceStatus {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_text() {
        for role in MembershipRole::ALL {
            assert_eq!(role.as_str().parse::<MembershipRole>(), Ok(role));
        }
    }

    #[test]
    fn role_serializes_snake_case() {
        let json = serde_json::to_string(&MembershipRole::ViceChair).unwrap();
        assert_eq!(json, "\"vice_chair\"");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "late".parse::<AttendanceStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown attendance status 'late'");
    }
}
