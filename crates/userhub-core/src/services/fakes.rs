//! In-test implementations of the ports.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{NewUser, User};
use crate::error::RepoError;
use crate::ports::{AuthError, PasswordService, TokenClaims, TokenService, UserRepository};

#[derive(Default)]
pub struct FakeUsers {
    rows: Mutex<Vec<User>>,
    email_lookups: AtomicUsize,
    stale_email_lookups: AtomicBool,
}

impl FakeUsers {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn email_lookups(&self) -> usize {
        self.email_lookups.load(Ordering::SeqCst)
    }

    /// Make `find_by_email` miss, as if another request wrote the row
    /// between the lookup and the write.
    pub fn serve_stale_email_lookups(&self) {
        self.stale_email_lookups.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        if self.stale_email_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("users_email_key".into()));
        }
        let now = Utc::now();
        let user = User {
            id: rows.len() as i32 + 1,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.id != user.id && u.email == user.email) {
            return Err(RepoError::Constraint("users_email_key".into()));
        }
        let row = rows
            .iter_mut()
            .find(|u| u.id == user.id)
            .ok_or(RepoError::NotFound)?;
        *row = User {
            updated_at: Utc::now(),
            ..user
        };
        Ok(row.clone())
    }
}

/// Reversible "hash" so tests stay fast.
pub struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

/// Tokens of the form `token-<user id>`.
pub struct FakeTokens;

impl TokenService for FakeTokens {
    fn sign(&self, user_id: i32) -> Result<String, AuthError> {
        Ok(format!("token-{user_id}"))
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let user_id = token
            .strip_prefix("token-")
            .and_then(|id| id.parse().ok())
            .ok_or_else(|| AuthError::InvalidToken("malformed".into()))?;
        Ok(TokenClaims { user_id })
    }
}
