use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - a registered account.
///
/// `password_hash` always holds the output of a `PasswordService`, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields needed to insert a user; the store assigns id and timestamps.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl User {
    /// Merge optional profile fields over the current ones.
    ///
    /// Absent or empty values keep the stored value.
    pub fn with_profile(mut self, name: Option<String>, email: Option<String>) -> Self {
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            self.name = name;
        }
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            self.email = email;
        }
        self
    }
}
