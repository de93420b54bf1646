//! Whole-catalog checks of the policy engine: the closed-world default,
//! the admin superset, fail-closed evaluation, the AND/OR laws, and the
//! ownership guards, exercised across every role and token.

use attendtrack_tests::{admin, student, suspended, teacher};
use platform_authz::{
    AccessTier, Capabilities, Identity, Permission, Role, SessionPermissions, SessionSnapshot,
    can_access, can_act_on_owned, can_view_owned, granted, identity_has, identity_has_all,
    identity_has_any, role_has,
};

#[test]
fn unlisted_tokens_are_denied_for_every_role() {
    for role in Role::ALL {
        let grant = granted(role);
        for permission in Permission::ALL {
            assert_eq!(
                role_has(role, permission),
                grant.contains(&permission),
                "{role:?} / {permission:?} diverges from the map"
            );
        }
    }
}

#[test]
fn admin_grant_covers_the_whole_catalog() {
    for permission in Permission::ALL {
        assert!(role_has(Role::Admin, permission));
    }
}

#[test]
fn inactive_identities_hold_nothing() {
    for role in Role::ALL {
        let identity = suspended("u1", role);
        for permission in Permission::ALL {
            assert!(!identity_has(Some(&identity), permission));
        }
    }
}

#[test]
fn absent_identity_holds_nothing_but_public_access() {
    for permission in Permission::ALL {
        assert!(!identity_has(None, permission));
    }
    assert!(can_access(None, AccessTier::Public, None));
    assert!(can_access(None, AccessTier::Public, Some("anyone")));
    assert!(!can_access(None, AccessTier::Student, None));
}

#[test]
fn and_or_laws_hold_for_every_role() {
    for role in Role::ALL {
        let identity = match role {
            Role::Admin => admin("u1"),
            Role::Teacher => teacher("u1"),
            Role::Student => student("u1"),
        };
        assert!(identity_has_all(Some(&identity), &[]));
        assert!(!identity_has_any(Some(&identity), &[]));
        for permission in Permission::ALL {
            assert_eq!(
                identity_has_all(Some(&identity), &[permission]),
                identity_has(Some(&identity), permission)
            );
            assert_eq!(
                identity_has_any(Some(&identity), &[permission]),
                identity_has(Some(&identity), permission)
            );
        }
    }
}

#[test]
fn teacher_ownership_narrowing() {
    let t1 = teacher("T1");
    assert!(can_act_on_owned(Some(&t1), Permission::MarkAttendance, Some("T1")));
    assert!(!can_act_on_owned(Some(&t1), Permission::MarkAttendance, Some("T2")));
    assert!(can_act_on_owned(Some(&t1), Permission::MarkAttendance, None));
}

#[test]
fn student_self_scoping_and_staff_bypass() {
    let view = |identity: &Identity, target: Option<&str>| {
        can_view_owned(
            Some(identity),
            Permission::ReadOwnAttendance,
            Permission::ReadAllAttendance,
            target,
        )
    };
    let s1 = student("S1");
    assert!(view(&s1, Some("S1")));
    assert!(!view(&s1, Some("S2")));

    for staff in [teacher("T1"), admin("A1")] {
        assert!(view(&staff, Some("S1")));
        assert!(view(&staff, Some("S2")));
    }
}

#[test]
fn mixed_token_set_scenario() {
    let identity = teacher("u42");
    let tokens = [Permission::MarkAttendance, Permission::DeleteGroup];
    assert!(identity_has_any(Some(&identity), &tokens));
    assert!(!identity_has_all(Some(&identity), &tokens));
}

#[test]
fn suspended_student_scenario() {
    let identity = suspended("s7", Role::Student);
    assert!(!identity_has(Some(&identity), Permission::ReadOwnAttendance));
}

#[test]
fn capabilities_agree_with_direct_evaluation() {
    for identity in [admin("u1"), teacher("u1"), student("u1")] {
        let caps = Capabilities::derive(Some(&identity));
        for permission in Permission::ALL {
            assert_eq!(
                caps.has_permission(permission),
                identity_has(Some(&identity), permission)
            );
        }
        for tier in [AccessTier::Public, AccessTier::Student, AccessTier::Teacher, AccessTier::Admin] {
            for owner in [None, Some("u1"), Some("other")] {
                assert_eq!(
                    caps.can_access(tier, owner),
                    can_access(Some(&identity), tier, owner)
                );
            }
        }
    }
}

#[tokio::test]
async fn adapter_recomputes_wholesale_on_identity_change() {
    let permissions = SessionPermissions::new();
    let mut rx = permissions.subscribe();
    assert!(!rx.borrow().can_mark_attendance);

    permissions.update(&SessionSnapshot::Active(teacher("t1")));
    rx.changed().await.unwrap();
    assert!(rx.borrow().can_mark_attendance);
    assert!(!rx.borrow().can_create_classes);

    permissions.update(&SessionSnapshot::Active(admin("a1")));
    rx.changed().await.unwrap();
    assert!(rx.borrow().can_create_classes);

    permissions.update(&SessionSnapshot::Resolving);
    rx.changed().await.unwrap();
    assert!(!rx.borrow().has_any_permission(&Permission::ALL));
}
