//! # Userhub Infrastructure
//!
//! Concrete implementations of the ports defined in `userhub-core`:
//! password hashing, JWT tokens and user persistence.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL user store via SeaORM
//!
//! Without `postgres` only the in-memory store is available.

pub mod auth;
pub mod database;

pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
pub use database::{DatabaseConfig, InMemoryUserRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresUserRepository};
