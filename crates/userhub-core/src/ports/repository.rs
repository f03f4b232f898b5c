use async_trait::async_trait;

use crate::domain::{NewUser, User};
use crate::error::RepoError;

/// Persistence of user records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Insert a new user. Fails with `RepoError::Constraint` when the email is taken.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Persist changed fields of an existing user and refresh `updated_at`.
    async fn update(&self, user: User) -> Result<User, RepoError>;
}
