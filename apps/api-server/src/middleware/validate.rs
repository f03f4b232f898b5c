//! `Validated<T>` - merges path, query and body into one object, then validates it.

use std::collections::HashMap;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use userhub_shared::first_violation;
use userhub_shared::validation::FieldOrder;
use validator::Validate;

use super::error::AppError;
use crate::observability::redact;

/// A request DTO that passed validation.
#[derive(Debug)]
pub struct Validated<T>(pub T);

impl<T> Validated<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for Validated<T>
where
    T: DeserializeOwned + Validate + FieldOrder + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        let body = web::Bytes::from_request(&req, payload);

        Box::pin(async move {
            let mut input = Map::new();

            for (key, value) in req.match_info().iter() {
                input.insert(key.to_string(), Value::String(value.to_string()));
            }

            let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
                .map_err(|_| AppError::BadRequest("Invalid query string".to_string()))?;
            for (key, value) in query.into_inner() {
                input.insert(key, Value::String(value));
            }

            let body = body
                .await
                .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
            input.extend(body_object(&body)?);

            let input = Value::Object(input);
            tracing::debug!(path = %req.path(), input = %redact(&input), "Request input");

            let data: T = serde_json::from_value(input)
                .map_err(|e| AppError::BadRequest(format!("Invalid request payload: {e}")))?;

            match first_violation(&data) {
                Some(message) => Err(AppError::BadRequest(format!("Property {message}"))),
                None => Ok(Validated(data)),
            }
        })
    }
}

/// An empty body counts as `{}`; anything but a JSON object is rejected.
fn body_object(body: &[u8]) -> Result<Map<String, Value>, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice(body) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::BadRequest(
            "Request body must be a JSON object".to_string(),
        )),
        Err(e) => Err(AppError::BadRequest(format!("Invalid JSON body: {e}"))),
    }
}
