//! Identity intake from the fronting session layer.
//!
//! The session layer terminates authentication and forwards the resolved
//! principal in three headers. Anything missing or malformed degrades to an
//! anonymous session — the guards then fail closed, so a broken header can
//! only ever deny access, never widen it.

use core::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use platform_authz::{Identity, Role, SessionSnapshot};

pub const USER_HEADER: &str = "x-att-user";
pub const ROLE_HEADER: &str = "x-att-role";
pub const ACTIVE_HEADER: &str = "x-att-active";

/// The session as resolved upstream, extractable in any handler.
#[derive(Clone, Debug)]
pub struct CurrentSession(pub SessionSnapshot);

impl CurrentSession {
    pub fn identity(&self) -> Option<&Identity> {
        self.0.identity()
    }
}

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_from_headers(&parts.headers)))
    }
}

fn session_from_headers(headers: &HeaderMap) -> SessionSnapshot {
    let Some(id) = header_str(headers, USER_HEADER) else {
        return SessionSnapshot::Anonymous;
    };
    let Some(role) = header_str(headers, ROLE_HEADER).and_then(Role::from_str) else {
        return SessionSnapshot::Anonymous;
    };
    // The active flag must be asserted explicitly by the session layer.
    let active = matches!(
        header_str(headers, ACTIVE_HEADER),
        Some("1") | Some("true") | Some("yes")
    );
    SessionSnapshot::Active(Identity::new(id, role, active))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
