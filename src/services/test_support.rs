//! Fixtures shared by the service unit tests.

use crate::domain::{PersonRecord, PersonRole};

pub fn person(id: i32, username: &str, password_hash: &str, role: PersonRole) -> PersonRecord {
    PersonRecord {
        id,
        username: username.to_string(),
        password_hash: password_hash.to_string(),
        role,
    }
}
