//! AttendTrack server: an HTTP API whose every route consults the
//! `platform-authz` policy engine before touching data.
//!
//! The identity arrives already resolved, via forwarded headers set by the
//! fronting session layer (see [`identity`]); this crate never performs
//! authentication itself.

pub mod config;
pub mod guard;
pub mod http;
pub mod identity;
pub mod routes;
pub mod store;
