//! Middleware and extractors.

pub mod auth;
pub mod error;
pub mod headers;
pub mod normalize;
pub mod validate;

pub use auth::{Authenticate, CurrentUser};
pub use error::{AppError, AppResult};
pub use headers::{cors, security_headers};
pub use normalize::CanonicalPath;
pub use validate::Validated;
