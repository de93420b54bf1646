//! Pure yes/no evaluation over the role-permission map.
//!
//! Every function here is total and deterministic. There is no error
//! channel: a missing or inactive identity, or a permission the role does
//! not hold, all evaluate to `false`.

use crate::{Identity, Permission, Role, grants};

/// Does the role's default grant include `permission`?
pub fn role_has(role: Role, permission: Permission) -> bool {
    grants::granted(role).contains(&permission)
}

/// Does this identity hold `permission`? Absent and inactive identities
/// hold nothing, regardless of role.
pub fn identity_has(identity: Option<&Identity>, permission: Permission) -> bool {
    match identity {
        Some(identity) if identity.active => role_has(identity.role, permission),
        _ => false,
    }
}

/// Logical AND over a token set. The empty set is trivially satisfied.
pub fn identity_has_all(identity: Option<&Identity>, permissions: &[Permission]) -> bool {
    permissions.iter().all(|&p| identity_has(identity, p))
}

/// Logical OR over a token set. The empty set grants nothing.
pub fn identity_has_any(identity: Option<&Identity>, permissions: &[Permission]) -> bool {
    permissions.iter().any(|&p| identity_has(identity, p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teacher(id: &str) -> Identity {
        Identity::new(id, Role::Teacher, true)
    }

    #[test]
    fn absent_identity_fails_closed() {
        for permission in Permission::ALL {
            assert!(!identity_has(None, permission));
        }
    }

    #[test]
    fn inactive_identity_overrides_role_grant() {
        let suspended = Identity::new("s7", Role::Student, false);
        assert!(role_has(Role::Student, Permission::ReadOwnAttendance));
        assert!(!identity_has(Some(&suspended), Permission::ReadOwnAttendance));
    }

    #[test]
    fn empty_set_laws() {
        let identity = teacher("u42");
        assert!(identity_has_all(Some(&identity), &[]));
        assert!(!identity_has_any(Some(&identity), &[]));
    }

    #[test]
    fn singleton_all_equals_single_check() {
        let identity = teacher("u42");
        for permission in Permission::ALL {
            assert_eq!(
                identity_has_all(Some(&identity), &[permission]),
                identity_has(Some(&identity), permission)
            );
        }
    }

    #[test]
    fn mixed_token_set_scenario() {
        let identity = teacher("u42");
        let tokens = [Permission::MarkAttendance, Permission::DeleteGroup];
        assert!(identity_has_any(Some(&identity), &tokens));
        assert!(!identity_has_all(Some(&identity), &tokens));
    }
}
