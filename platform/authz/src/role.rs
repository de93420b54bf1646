use serde::{Deserialize, Serialize};

/// The three roles AttendTrack knows about. Roles are the sole axis of
/// default grants; there is no per-user grant storage.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Student, Role::Teacher, Role::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }

    /// Unrecognized spellings parse to `None`; callers treat that as an
    /// absent identity rather than inventing a fallback role.
    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }

    /// Coarse ordering used by tiered access checks.
    pub fn level(self) -> u8 {
        match self {
            Role::Student => 1,
            Role::Teacher => 2,
            Role::Admin => 3,
        }
    }
}
