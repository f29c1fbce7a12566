//! Sample user rows for demos and tests.

use serde::Deserialize;
use serde::Serialize;

use crate::model::{Record, Value};

/// A row of the dashboard's user table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
}

impl User {
    /// Sortable column names, in display order.
    pub const FIELDS: [&'static str; 5] = ["id", "name", "email", "role", "status"];
}

impl Record for User {
    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }
}

/// Generates `count` users with ids starting at 1.
///
/// Even indices are admins and every third index is active, starting
/// with the first user.
pub fn sample_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| {
            let n = i as i64 + 1;
            User {
                id: n,
                name: format!("User {}", n),
                email: format!("user{}@example.com", n),
                role: if i % 2 == 0 { "Admin" } else { "User" }.to_string(),
                status: if i % 3 == 0 { "Active" } else { "Inactive" }.to_string(),
            }
        })
        .collect()
}
