//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::FieldOrder;

pub const NAME_EMPTY: &str = "name should not be empty";
pub const EMAIL_INVALID: &str = "email must be an email";
pub const PASSWORD_ALPHANUMERIC: &str =
    "password must contain only letters and numbers (a-zA-Z0-9)";
pub const PASSWORD_LENGTH: &str =
    "password must be longer than or equal to 8 and shorter than or equal to 12 characters";

/// Request to register a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterData {
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: String,

    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(
        custom(function = "alphanumeric"),
        length(min = 8, max = 12, message = "password must be longer than or equal to 8 and shorter than or equal to 12 characters")
    )]
    pub password: String,
}

impl FieldOrder for RegisterData {
    const FIELDS: &'static [&'static str] = &["name", "email", "password"];
}

/// Request to login.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginData {
    #[validate(email(message = "email must be an email"))]
    pub email: String,

    #[validate(
        custom(function = "alphanumeric"),
        length(min = 8, max = 12, message = "password must be longer than or equal to 8 and shorter than or equal to 12 characters")
    )]
    pub password: String,
}

impl FieldOrder for LoginData {
    const FIELDS: &'static [&'static str] = &["email", "password"];
}

/// Partial profile update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserData {
    #[validate(length(min = 1, message = "name should not be empty"))]
    pub name: Option<String>,

    #[validate(email(message = "email must be an email"))]
    pub email: Option<String>,
}

impl FieldOrder for UpdateUserData {
    const FIELDS: &'static [&'static str] = &["name", "email"];
}

fn alphanumeric(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("alphanumeric");
        error.message = Some(PASSWORD_ALPHANUMERIC.into());
        Err(error)
    }
}

/// Response containing the access token issued at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub access_token: String,
}

/// Public view of a user. Deliberately has no password field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResult {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of the health endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResult {
    pub message: String,
}

impl HealthResult {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}
