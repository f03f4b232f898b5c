//! # Userhub Shared
//!
//! Wire types shared by the server and its clients: request DTOs with their
//! validation rules, filtered response DTOs and the response envelope.

pub mod dto;
pub mod response;
pub mod validation;

pub use response::{ApiResponse, ErrorResponse};
pub use validation::first_violation;
