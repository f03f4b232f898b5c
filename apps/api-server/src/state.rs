//! Application state - the explicit dependency set shared by all handlers.

use std::sync::Arc;

use anyhow::Context;
use userhub_core::ports::{PasswordService, TokenService, UserRepository};
use userhub_core::{AuthService, ProfileService};
use userhub_infra::{Argon2PasswordService, InMemoryUserRepository, JwtTokenService};

#[cfg(feature = "postgres")]
use userhub_infra::{DatabaseConnections, PostgresUserRepository, database::ensure_schema};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub profiles: ProfileService,
}

impl AppState {
    /// Build the state from configuration, connecting to the database if one is set.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let passwords = Arc::new(
            Argon2PasswordService::with_cost(config.password_cost)
                .context("invalid PASSWORD_HASH_COST")?,
        );
        let tokens = Arc::new(JwtTokenService::new(config.jwt.clone()));
        let users = Self::user_store(config).await?;

        tracing::info!("Application state initialized");
        Ok(Self::from_parts(users, passwords, tokens))
    }

    /// Wire services from already-built adapters.
    pub fn from_parts(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            auth: AuthService::new(users.clone(), passwords, tokens),
            profiles: ProfileService::new(users),
        }
    }

    #[cfg(feature = "postgres")]
    async fn user_store(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running with the in-memory user store.");
            return Ok(Arc::new(InMemoryUserRepository::default()));
        };

        let connections = DatabaseConnections::init(db_config)
            .await
            .context("connect to database")?;
        ensure_schema(&connections.main)
            .await
            .context("create users table")?;

        Ok(Arc::new(PostgresUserRepository::new(connections.main)))
    }

    #[cfg(not(feature = "postgres"))]
    async fn user_store(config: &AppConfig) -> anyhow::Result<Arc<dyn UserRepository>> {
        if config.database.is_some() {
            tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
        }
        tracing::info!("Using the in-memory user store");
        Ok(Arc::new(InMemoryUserRepository::default()))
    }
}
