//! In-memory user store - used when no database is configured, and in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use userhub_core::domain::{NewUser, User};
use userhub_core::error::RepoError;
use userhub_core::ports::UserRepository;

use super::mask_email;

#[derive(Default)]
struct Table {
    rows: HashMap<i32, User>,
    next_id: i32,
}

/// In-memory user repository using a HashMap behind an async RwLock.
///
/// Enforces the same unique-email rule as the `users` table.
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|u| u.email == new_user.email) {
            return Err(RepoError::Constraint("users_email_key".to_string()));
        }

        table.next_id += 1;
        let now = Utc::now();
        let user = User {
            id: table.next_id,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut table = self.table.write().await;

        if !table.rows.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }
        if table
            .rows
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Err(RepoError::Constraint("users_email_key".to_string()));
        }

        let updated = User {
            updated_at: Utc::now(),
            ..user
        };
        table.rows.insert(updated.id, updated.clone());

        Ok(updated)
    }
}
