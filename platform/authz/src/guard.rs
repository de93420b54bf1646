//! Ownership narrowing on top of role-level grants.
//!
//! Some grants are necessarily broader than any single request should be:
//! "teachers may mark attendance" has to narrow to "for classes they are
//! assigned to". The guards here combine the role check with an identifier
//! comparison against the resource's designated owner.
//!
//! Contract for the `owner` argument across all guards: `None` means the
//! caller already scoped the resource set (for example "all classes I
//! teach") and asks for no further restriction. Only a present owner id is
//! compared against the acting identity.

use serde::{Deserialize, Serialize};

use crate::{Identity, Permission, Role, role_has};

/// Coarse resource tiers used by route guards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessTier {
    Public,
    Student,
    Teacher,
    Admin,
}

impl AccessTier {
    fn level(self) -> u8 {
        match self {
            AccessTier::Public => 0,
            AccessTier::Student => 1,
            AccessTier::Teacher => 2,
            AccessTier::Admin => 3,
        }
    }
}

/// Write-side guard: may this identity act on a resource owned by `owner`?
///
/// Admins bypass the narrowing entirely. Any other role must hold the base
/// grant and, when an owner id is supplied, be that owner.
pub fn can_act_on_owned(
    identity: Option<&Identity>,
    permission: Permission,
    owner: Option<&str>,
) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    if !identity.active {
        return false;
    }
    if identity.role == Role::Admin {
        return true;
    }
    if !role_has(identity.role, permission) {
        return false;
    }
    owner.map_or(true, |owner| owner == identity.id)
}

/// Read-side guard: may this identity view records owned by `owner`?
///
/// A role holding `unscoped` (e.g. read-all-attendance) sees everything; a
/// role holding only `scoped` (e.g. read-own-attendance) sees records it
/// owns. Admins always pass.
pub fn can_view_owned(
    identity: Option<&Identity>,
    scoped: Permission,
    unscoped: Permission,
    owner: Option<&str>,
) -> bool {
    let Some(identity) = identity else {
        return false;
    };
    if !identity.active {
        return false;
    }
    if identity.role == Role::Admin || role_has(identity.role, unscoped) {
        return true;
    }
    if !role_has(identity.role, scoped) {
        return false;
    }
    owner.map_or(true, |owner| owner == identity.id)
}

/// Tiered access check for whole resource classes.
///
/// `Public` is open to everyone, signed in or not. Otherwise the identity's
/// role must reach the tier; a role above the tier bypasses the ownership
/// comparison, a role exactly at the tier must match the owner when one is
/// supplied.
pub fn can_access(identity: Option<&Identity>, tier: AccessTier, owner: Option<&str>) -> bool {
    if tier == AccessTier::Public {
        return true;
    }
    let Some(identity) = identity else {
        return false;
    };
    if !identity.active {
        return false;
    }
    if identity.role == Role::Admin {
        return true;
    }
    let held = identity.role.level();
    let needed = tier.level();
    if held < needed {
        return false;
    }
    if held > needed {
        return true;
    }
    owner.map_or(true, |owner| owner == identity.id)
}
