//! Route-side denial mapping.
//!
//! The policy engine answers with booleans; this module is the single place
//! where a denial becomes an HTTP status. An unresolved session maps to
//! 401, a resolved identity lacking the grant maps to 403.

use platform_api::ApiError;
use platform_authz::{Identity, Permission, can_act_on_owned, can_view_owned, identity_has};

use crate::identity::CurrentSession;

pub fn require(session: &CurrentSession, permission: Permission) -> Result<&Identity, ApiError> {
    let identity = session.identity().ok_or(ApiError::Unauthorized)?;
    if identity_has(Some(identity), permission) {
        Ok(identity)
    } else {
        Err(ApiError::Forbidden)
    }
}

pub fn require_owned_act<'a>(
    session: &'a CurrentSession,
    permission: Permission,
    owner: Option<&str>,
) -> Result<&'a Identity, ApiError> {
    let identity = session.identity().ok_or(ApiError::Unauthorized)?;
    if can_act_on_owned(Some(identity), permission, owner) {
        Ok(identity)
    } else {
        Err(ApiError::Forbidden)
    }
}

pub fn require_owned_view<'a>(
    session: &'a CurrentSession,
    scoped: Permission,
    unscoped: Permission,
    owner: Option<&str>,
) -> Result<&'a Identity, ApiError> {
    let identity = session.identity().ok_or(ApiError::Unauthorized)?;
    if can_view_owned(Some(identity), scoped, unscoped, owner) {
        Ok(identity)
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform_authz::{Role, SessionSnapshot};

    #[test]
    fn anonymous_maps_to_unauthorized() {
        let session = CurrentSession(SessionSnapshot::Anonymous);
        let err = require(&session, Permission::ReadClasses).unwrap_err();
        assert_eq!(err.code(), "UNAUTHORIZED");
    }

    #[test]
    fn missing_grant_maps_to_forbidden() {
        let student = Identity::new("s1", Role::Student, true);
        let session = CurrentSession(SessionSnapshot::Active(student));
        let err = require(&session, Permission::CreateUser).unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
        assert!(require(&session, Permission::ReadClasses).is_ok());
    }

    #[test]
    fn ownership_mismatch_maps_to_forbidden() {
        let teacher = Identity::new("t1", Role::Teacher, true);
        let session = CurrentSession(SessionSnapshot::Active(teacher));
        assert!(require_owned_act(&session, Permission::MarkAttendance, Some("t1")).is_ok());
        let err =
            require_owned_act(&session, Permission::MarkAttendance, Some("t2")).unwrap_err();
        assert_eq!(err.code(), "FORBIDDEN");
    }
}
