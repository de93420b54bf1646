use crate::{
    AccessTier, Identity, Permission, can_access, identity_has, identity_has_all, identity_has_any,
};

/// A wholesale-derived view of what the current principal may do.
///
/// The boolean fields cover the checks the UI makes constantly and exist for
/// ergonomic destructuring; anything less common goes through the generic
/// methods. A `Capabilities` value is never patched in place — deriving a
/// fresh one from the identity snapshot is the only way to change it.
#[derive(Clone, Debug, Default)]
pub struct Capabilities {
    identity: Option<Identity>,
    pub can_manage_users: bool,
    pub can_read_users: bool,
    pub can_manage_groups: bool,
    pub can_manage_subjects: bool,
    pub can_manage_schedule: bool,
    pub can_read_schedule: bool,
    pub can_create_classes: bool,
    pub can_cancel_classes: bool,
    pub can_mark_attendance: bool,
    pub can_view_all_attendance: bool,
    pub can_view_own_attendance: bool,
    pub can_view_statistics: bool,
    pub can_export_data: bool,
}

impl Capabilities {
    pub fn derive(identity: Option<&Identity>) -> Self {
        let has = |permission| identity_has(identity, permission);
        Self {
            can_manage_users: has(Permission::CreateUser),
            can_read_users: has(Permission::ReadUsers),
            can_manage_groups: has(Permission::CreateGroup),
            can_manage_subjects: has(Permission::CreateSubject),
            can_manage_schedule: has(Permission::ManageSchedule),
            can_read_schedule: has(Permission::ReadSchedule),
            can_create_classes: has(Permission::CreateClass),
            can_cancel_classes: has(Permission::CancelClass),
            can_mark_attendance: has(Permission::MarkAttendance),
            can_view_all_attendance: has(Permission::ReadAllAttendance),
            can_view_own_attendance: has(Permission::ReadOwnAttendance),
            can_view_statistics: has(Permission::ViewStatistics),
            can_export_data: has(Permission::ExportData),
            identity: identity.cloned(),
        }
    }

    /// The identity snapshot this derivation was computed from.
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        identity_has(self.identity.as_ref(), permission)
    }

    pub fn has_all_permissions(&self, permissions: &[Permission]) -> bool {
        identity_has_all(self.identity.as_ref(), permissions)
    }

    pub fn has_any_permission(&self, permissions: &[Permission]) -> bool {
        identity_has_any(self.identity.as_ref(), permissions)
    }

    pub fn can_access(&self, tier: AccessTier, owner: Option<&str>) -> bool {
        can_access(self.identity.as_ref(), tier, owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    #[test]
    fn derivation_matches_the_evaluator() {
        let identity = Identity::new("u42", Role::Teacher, true);
        let caps = Capabilities::derive(Some(&identity));
        assert!(caps.can_mark_attendance);
        assert!(caps.can_cancel_classes);
        assert!(!caps.can_create_classes);
        assert!(!caps.can_manage_users);
        assert!(caps.has_permission(Permission::ExportData));
    }

    #[test]
    fn default_derivation_grants_nothing_but_public() {
        let caps = Capabilities::derive(None);
        assert!(!caps.has_any_permission(&Permission::ALL));
        assert!(caps.can_access(AccessTier::Public, None));
        assert!(!caps.can_access(AccessTier::Student, None));
    }
}
