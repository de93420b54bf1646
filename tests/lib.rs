//! Shared fixtures for the cross-crate test suites.

use platform_authz::{Identity, Role};

pub fn admin(id: &str) -> Identity {
    Identity::new(id, Role::Admin, true)
}

pub fn teacher(id: &str) -> Identity {
    Identity::new(id, Role::Teacher, true)
}

pub fn student(id: &str) -> Identity {
    Identity::new(id, Role::Student, true)
}

pub fn suspended(id: &str, role: Role) -> Identity {
    Identity::new(id, role, false)
}
