//! User persistence - PostgreSQL via SeaORM, plus an in-memory store.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_repo;
#[cfg(feature = "postgres")]
mod schema;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
pub use memory::InMemoryUserRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresUserRepository;
#[cfg(feature = "postgres")]
pub use schema::ensure_schema;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;

/// Mask an email for logging: `john.d@gmail.com` becomes `j***@gmail.com`.
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) if local.chars().count() > 1 => format!("{first}***@{domain}"),
            _ => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}
