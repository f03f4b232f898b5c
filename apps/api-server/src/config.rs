//! Application configuration loaded from environment variables.

use std::env;

use userhub_infra::auth::DEFAULT_COST;
use userhub_infra::{DatabaseConfig, JwtConfig};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Prefix for every route except `/favicon.ico`; empty or `/segment`.
    pub base_path: String,
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    /// Argon2 iteration count for new password hashes.
    pub password_cost: u32,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            base_path: normalize_base_path(&env::var("BASE_PATH").unwrap_or_default()),
            database: DatabaseConfig::from_env(),
            jwt: JwtConfig::from_env(),
            password_cost: env::var("PASSWORD_HASH_COST")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_COST),
        }
    }
}

/// `"Api/V1/"` becomes `"/api/v1"`; blank or `"/"` becomes `""`.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed.to_ascii_lowercase())
    }
}
