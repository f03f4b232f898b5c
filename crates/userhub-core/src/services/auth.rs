//! Registration, login and bearer-token authentication.

use std::sync::Arc;

use crate::domain::{NewUser, User};
use crate::error::DomainError;
use crate::ports::{PasswordService, TokenService, UserRepository};

/// Message for every token failure, so callers cannot tell which check failed.
pub const INVALID_TOKEN: &str = "Invalid or expired token";

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Create an account. The email must not belong to any existing user.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
    ) -> Result<User, DomainError> {
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(DomainError::BadRequest("Email already exists".to_string()));
        }

        let password_hash = self.passwords.hash(password)?;

        let user = self
            .users
            .insert(NewUser {
                name,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    /// Check credentials and issue an access token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, DomainError> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::NotFound("Email not found".to_string()))?;

        if !self.passwords.verify(password, &user.password_hash)? {
            return Err(DomainError::Unauthorized("Invalid password".to_string()));
        }

        let token = self.tokens.sign(user.id)?;
        tracing::debug!(user_id = user.id, "Access token issued");
        Ok(token)
    }

    /// Resolve the user a bearer token was issued to.
    pub async fn authenticate(&self, token: &str) -> Result<User, DomainError> {
        let claims = self.tokens.verify(token).map_err(|e| {
            tracing::debug!(reason = %e, "Token rejected");
            DomainError::Unauthorized(INVALID_TOKEN.to_string())
        })?;

        self.users
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| DomainError::Unauthorized("Invalid user id".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeTokens, FakeUsers, PlainPasswords};

    fn service() -> (AuthService, Arc<FakeUsers>) {
        let users = Arc::new(FakeUsers::default());
        let service = AuthService::new(
            users.clone(),
            Arc::new(PlainPasswords),
            Arc::new(FakeTokens),
        );
        (service, users)
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password() {
        let (service, users) = service();

        let user = service
            .register("John Doe".into(), "john.d@gmail.com".into(), "P4ssw0rD")
            .await
            .unwrap();

        assert_eq!(user.name, "John Doe");
        assert_ne!(user.password_hash, "P4ssw0rD");
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_duplicate_email_is_bad_request() {
        let (service, users) = service();
        service
            .register("John".into(), "john.d@gmail.com".into(), "P4ssw0rD")
            .await
            .unwrap();

        let err = service
            .register("Other".into(), "john.d@gmail.com".into(), "Different1")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::BadRequest("Email already exists".to_string())
        );
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_register_losing_email_race_is_bad_request() {
        let (service, users) = service();
        service
            .register("John".into(), "john.d@gmail.com".into(), "P4ssw0rD")
            .await
            .unwrap();
        users.serve_stale_email_lookups();

        let err = service
            .register("Other".into(), "john.d@gmail.com".into(), "Different1")
            .await
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::BadRequest("Email already exists".to_string())
        );
        assert_eq!(users.len(), 1);
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_not_found() {
        let (service, _) = service();

        let err = service
            .login("nobody@gmail.com", "P4ssw0rD")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::NotFound("Email not found".to_string()));
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let (service, _) = service();
        service
            .register("John".into(), "john.d@gmail.com".into(), "P4ssw0rD")
            .await
            .unwrap();

        let err = service
            .login("john.d@gmail.com", "WrongPass1")
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::Unauthorized("Invalid password".to_string()));
    }

    #[tokio::test]
    async fn test_login_token_authenticates_same_user() {
        let (service, _) = service();
        let registered = service
            .register("John".into(), "john.d@gmail.com".into(), "P4ssw0rD")
            .await
            .unwrap();

        let token = service.login("john.d@gmail.com", "P4ssw0rD").await.unwrap();
        let user = service.authenticate(&token).await.unwrap();

        assert_eq!(user.id, registered.id);
        assert_eq!(user.email, "john.d@gmail.com");
    }

    #[tokio::test]
    async fn test_authenticate_rejects_bad_token() {
        let (service, _) = service();

        let err = service.authenticate("garbage").await.unwrap_err();

        assert_eq!(err, DomainError::Unauthorized(INVALID_TOKEN.to_string()));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_subject() {
        let (service, _) = service();

        let err = service.authenticate("token-42").await.unwrap_err();

        assert_eq!(err, DomainError::Unauthorized("Invalid user id".to_string()));
    }
}
