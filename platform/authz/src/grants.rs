//! The role-permission map: the single source of truth for default grants.
//!
//! A flat role-to-set table, built once at startup and immutable for the
//! process lifetime. Changing a grant means changing this table and
//! redeploying; nothing grants permissions at runtime through any other
//! path. Ownership guards only ever narrow what is listed here.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::{Permission, Role};

static GRANTS: Lazy<HashMap<Role, HashSet<Permission>>> = Lazy::new(|| {
    use Permission::*;

    let mut map = HashMap::new();

    // Admins hold the full catalog.
    map.insert(Role::Admin, Permission::ALL.into_iter().collect());

    // Teachers read the directory, run their classes, and keep attendance.
    // They cannot create or delete classes, and broad attendance reads are
    // narrowed to their own classes by the ownership guards.
    map.insert(
        Role::Teacher,
        HashSet::from([
            ReadUsers,
            ReadOwnProfile,
            ReadGroups,
            ReadSubjects,
            ReadSchedule,
            ReadClasses,
            UpdateClass,
            CancelClass,
            MarkAttendance,
            ReadAllAttendance,
            UpdateAttendance,
            ViewStatistics,
            ExportData,
        ]),
    );

    // Students see the shared directory and their own records only.
    map.insert(
        Role::Student,
        HashSet::from([
            ReadOwnProfile,
            ReadGroups,
            ReadSubjects,
            ReadSchedule,
            ReadClasses,
            ReadOwnAttendance,
            ViewOwnStatistics,
        ]),
    );

    map
});

static EMPTY: Lazy<HashSet<Permission>> = Lazy::new(HashSet::new);

/// Permission set granted to `role` by default.
///
/// Every role is listed explicitly above; should a lookup ever miss, the
/// answer is the empty set — fail closed, never fail open.
pub fn granted(role: Role) -> &'static HashSet<Permission> {
    GRANTS.get(&role).unwrap_or(&EMPTY)
}
