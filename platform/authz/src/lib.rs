//! Access-control policy engine for AttendTrack.
//!
//! Every permission question in the application funnels through this crate:
//! route guards, mutation call sites, and anything that needs to know what
//! the current principal may do. The engine is pure and total — evaluation
//! never performs I/O, never blocks, and never fails. Denial is expressed as
//! `false`, not as an error, so call sites branch in straight-line code.

mod adapter;
mod capability;
mod grants;
mod guard;
mod identity;
mod permission;
mod policy;
mod role;

pub use adapter::SessionPermissions;
pub use capability::Capabilities;
pub use grants::granted;
pub use guard::{AccessTier, can_access, can_act_on_owned, can_view_owned};
pub use identity::{Identity, SessionSnapshot};
pub use permission::{Permission, PermissionDomain};
pub use policy::{identity_has, identity_has_all, identity_has_any, role_has};
pub use role::Role;
