//! Business services - registration, login, token authentication and profile edits.
//!
//! Services hold their dependencies as trait objects handed in at startup;
//! there is no global registry.

mod auth;
mod profile;

#[cfg(test)]
pub(crate) mod fakes;

pub use auth::{AuthService, INVALID_TOKEN};
pub use profile::ProfileService;
