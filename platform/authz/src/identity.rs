use serde::{Deserialize, Serialize};

use crate::Role;

/// The acting principal: who is asking, in what role, and whether the
/// account is currently active. Evaluation treats this as an immutable
/// snapshot; the engine never mutates it.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Identity {
    pub id: String,
    pub role: Role,
    pub active: bool,
}

impl Identity {
    pub fn new(id: impl Into<String>, role: Role, active: bool) -> Self {
        Self {
            id: id.into(),
            role,
            active,
        }
    }
}

/// What the session layer currently knows about the principal.
///
/// `Resolving` covers the window between session-restore starting and the
/// identity arriving; it carries no identity, so every permission check over
/// it fails closed, same as `Anonymous`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum SessionSnapshot {
    #[default]
    Resolving,
    Anonymous,
    Active(Identity),
}

impl SessionSnapshot {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionSnapshot::Active(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, SessionSnapshot::Resolving)
    }
}
