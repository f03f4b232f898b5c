//! # Userhub Core
//!
//! The domain layer of the Userhub backend.
//! Entities, ports and the registration/login/profile services live here,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{AuthService, ProfileService};
