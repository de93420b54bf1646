use serde::{Deserialize, Serialize};

/// Semantic area a permission token belongs to. Each token lives in exactly
/// one domain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionDomain {
    User,
    Group,
    Subject,
    Schedule,
    Class,
    Attendance,
    Statistics,
    System,
}

/// The closed catalog of guarded actions.
///
/// Adding a guarded action anywhere in the application means adding exactly
/// one variant here; a variant nothing checks anymore should be removed.
/// The catalog is fixed at compile time — roles and call sites cannot mint
/// new tokens at runtime.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    // user management
    CreateUser,
    ReadUsers,
    ReadOwnProfile,
    UpdateUser,
    DeleteUser,
    // group management
    CreateGroup,
    ReadGroups,
    UpdateGroup,
    DeleteGroup,
    // subject management
    CreateSubject,
    ReadSubjects,
    UpdateSubject,
    DeleteSubject,
    // schedule
    ReadSchedule,
    ManageSchedule,
    // class management
    CreateClass,
    ReadClasses,
    UpdateClass,
    CancelClass,
    DeleteClass,
    // attendance
    MarkAttendance,
    ReadOwnAttendance,
    ReadAllAttendance,
    UpdateAttendance,
    // statistics and reporting
    ViewStatistics,
    ViewOwnStatistics,
    ExportData,
    // system administration
    ManageSystem,
}

impl Permission {
    /// Every token in the catalog, in declaration order.
    pub const ALL: [Permission; 28] = [
        Permission::CreateUser,
        Permission::ReadUsers,
        Permission::ReadOwnProfile,
        Permission::UpdateUser,
        Permission::DeleteUser,
        Permission::CreateGroup,
        Permission::ReadGroups,
        Permission::UpdateGroup,
        Permission::DeleteGroup,
        Permission::CreateSubject,
        Permission::ReadSubjects,
        Permission::UpdateSubject,
        Permission::DeleteSubject,
        Permission::ReadSchedule,
        Permission::ManageSchedule,
        Permission::CreateClass,
        Permission::ReadClasses,
        Permission::UpdateClass,
        Permission::CancelClass,
        Permission::DeleteClass,
        Permission::MarkAttendance,
        Permission::ReadOwnAttendance,
        Permission::ReadAllAttendance,
        Permission::UpdateAttendance,
        Permission::ViewStatistics,
        Permission::ViewOwnStatistics,
        Permission::ExportData,
        Permission::ManageSystem,
    ];

    pub fn domain(self) -> PermissionDomain {
        use Permission::*;
        match self {
            CreateUser | ReadUsers | ReadOwnProfile | UpdateUser | DeleteUser => {
                PermissionDomain::User
            }
            CreateGroup | ReadGroups | UpdateGroup | DeleteGroup => PermissionDomain::Group,
            CreateSubject | ReadSubjects | UpdateSubject | DeleteSubject => {
                PermissionDomain::Subject
            }
            ReadSchedule | ManageSchedule => PermissionDomain::Schedule,
            CreateClass | ReadClasses | UpdateClass | CancelClass | DeleteClass => {
                PermissionDomain::Class
            }
            MarkAttendance | ReadOwnAttendance | ReadAllAttendance | UpdateAttendance => {
                PermissionDomain::Attendance
            }
            ViewStatistics | ViewOwnStatistics | ExportData => PermissionDomain::Statistics,
            ManageSystem => PermissionDomain::System,
        }
    }

    pub fn as_str(self) -> &'static str {
        use Permission::*;
        match self {
            CreateUser => "CREATE_USER",
            ReadUsers => "READ_USERS",
            ReadOwnProfile => "READ_OWN_PROFILE",
            UpdateUser => "UPDATE_USER",
            DeleteUser => "DELETE_USER",
            CreateGroup => "CREATE_GROUP",
            ReadGroups => "READ_GROUPS",
            UpdateGroup => "UPDATE_GROUP",
            DeleteGroup => "DELETE_GROUP",
            CreateSubject => "CREATE_SUBJECT",
            ReadSubjects => "READ_SUBJECTS",
            UpdateSubject => "UPDATE_SUBJECT",
            DeleteSubject => "DELETE_SUBJECT",
            ReadSchedule => "READ_SCHEDULE",
            ManageSchedule => "MANAGE_SCHEDULE",
            CreateClass => "CREATE_CLASS",
            ReadClasses => "READ_CLASSES",
            UpdateClass => "UPDATE_CLASS",
            CancelClass => "CANCEL_CLASS",
            DeleteClass => "DELETE_CLASS",
            MarkAttendance => "MARK_ATTENDANCE",
            ReadOwnAttendance => "READ_OWN_ATTENDANCE",
            ReadAllAttendance => "READ_ALL_ATTENDANCE",
            UpdateAttendance => "UPDATE_ATTENDANCE",
            ViewStatistics => "VIEW_STATISTICS",
            ViewOwnStatistics => "VIEW_OWN_STATISTICS",
            ExportData => "EXPORT_DATA",
            ManageSystem => "MANAGE_SYSTEM",
        }
    }

    /// Unknown spellings yield `None`, never a default token.
    pub fn from_str(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_names_round_trip() {
        for permission in Permission::ALL {
            assert_eq!(Permission::from_str(permission.as_str()), Some(permission));
        }
        assert_eq!(Permission::from_str("LAUNCH_MISSILES"), None);
    }

    #[test]
    fn every_token_has_one_domain() {
        let attendance = Permission::ALL
            .into_iter()
            .filter(|p| p.domain() == PermissionDomain::Attendance)
            .count();
        assert_eq!(attendance, 4);
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&Permission::MarkAttendance).unwrap();
        assert_eq!(json, "\"MARK_ATTENDANCE\"");
    }
}
