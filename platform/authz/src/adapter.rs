//! Subscription point binding the evaluator to the current session.
//!
//! Call sites that cannot thread an identity through every signature hold a
//! receiver instead. The derivation is explicit — the session owner pushes
//! changes in, nothing reads ambient global state — and recomputation is
//! synchronous inside [`SessionPermissions::update`]; there is no background
//! task or queue.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::{Capabilities, SessionSnapshot};

/// Publishes a freshly derived [`Capabilities`] whenever the session
/// changes: login, logout, role change, activation or deactivation.
pub struct SessionPermissions {
    tx: watch::Sender<Arc<Capabilities>>,
}

impl SessionPermissions {
    /// Starts unresolved: no identity, no grants.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Arc::new(Capabilities::derive(None)));
        Self { tx }
    }

    /// Recompute the capability set wholesale and publish it. Subscribers
    /// observe the replacement; the previous derivation is never patched.
    pub fn update(&self, session: &SessionSnapshot) {
        let caps = Arc::new(Capabilities::derive(session.identity()));
        debug!(
            resolved = session.is_resolved(),
            signed_in = session.identity().is_some(),
            "session permissions recomputed"
        );
        self.tx.send_replace(caps);
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Capabilities>> {
        self.tx.subscribe()
    }

    /// The latest derivation, without subscribing.
    pub fn current(&self) -> Arc<Capabilities> {
        self.tx.borrow().clone()
    }
}

impl Default for SessionPermissions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Identity, Permission, Role};

    #[tokio::test]
    async fn identity_changes_reach_subscribers() {
        let permissions = SessionPermissions::new();
        let mut rx = permissions.subscribe();
        assert!(!rx.borrow().has_permission(Permission::MarkAttendance));

        let teacher = Identity::new("u42", Role::Teacher, true);
        permissions.update(&SessionSnapshot::Active(teacher));
        rx.changed().await.unwrap();
        assert!(rx.borrow().has_permission(Permission::MarkAttendance));

        permissions.update(&SessionSnapshot::Anonymous);
        rx.changed().await.unwrap();
        assert!(!rx.borrow().has_permission(Permission::MarkAttendance));
    }

    #[tokio::test]
    async fn deactivation_drops_grants_on_recompute() {
        let permissions = SessionPermissions::new();
        permissions.update(&SessionSnapshot::Active(Identity::new(
            "s7",
            Role::Student,
            true,
        )));
        assert!(permissions.current().can_view_own_attendance);

        permissions.update(&SessionSnapshot::Active(Identity::new(
            "s7",
            Role::Student,
            false,
        )));
        assert!(!permissions.current().can_view_own_attendance);
    }
}
