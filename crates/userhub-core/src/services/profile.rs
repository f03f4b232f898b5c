//! Profile updates for the authenticated user.

use std::sync::Arc;

use crate::domain::User;
use crate::error::{DomainError, RepoError};
use crate::ports::UserRepository;

const EMAIL_TAKEN: &str = "Email already exist";

#[derive(Clone)]
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Apply a name and/or email change to `current` and persist it.
    ///
    /// The uniqueness lookup only runs when the email actually changes.
    pub async fn update_profile(
        &self,
        current: User,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, DomainError> {
        if let Some(new_email) = email.as_deref().filter(|e| *e != current.email) {
            if let Some(owner) = self.users.find_by_email(new_email).await? {
                if owner.id != current.id {
                    return Err(DomainError::BadRequest(EMAIL_TAKEN.to_string()));
                }
            }
        }

        let user_id = current.id;
        let updated = self
            .users
            .update(current.with_profile(name, email))
            .await
            .map_err(|e| match e {
                RepoError::Constraint(_) => DomainError::BadRequest(EMAIL_TAKEN.to_string()),
                other => other.into(),
            })?;
        tracing::info!(user_id, "Profile updated");
        Ok(updated)
    }
}
