//! Lenient parsing of identifiers supplied by clients.
//!
//! Clients send identifiers as JSON numbers, numeric strings or path
//! segments, and sometimes send no usable body at all. These helpers accept
//! all of it and leave the choice of status code for a bad value to the
//! endpoint.

use aide::{OperationInput, generate::GenContext, openapi::Operation};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::convert::Infallible;

/// A JSON request body that never rejects.
///
/// A missing body, a body that is not JSON, or JSON of the wrong shape all
/// read as `T::default()`, so the endpoint's own validation picks the status.
pub(crate) struct Body<T>(pub T);

impl<T, S> FromRequest<S> for Body<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => value,
            Err(_) => T::default(),
        };
        Ok(Self(value))
    }
}

// Documented as the JSON body it reads, without the rejection responses.
impl<T: schemars::JsonSchema> OperationInput for Body<T> {
    fn operation_input(ctx: &mut GenContext, operation: &mut Operation) {
        Json::<T>::operation_input(ctx, operation);
    }
}

/// Parse an identifier from a path segment or query value.
pub(crate) fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Parse a strictly positive identifier from a path segment.
pub(crate) fn positive_id(raw: &str) -> Option<i64> {
    parse_id(raw).filter(|id| *id >= 1)
}

/// Parse a strictly positive identifier from a JSON body field.
pub(crate) fn positive_json_id(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(number) => number.as_i64(),
        Value::String(raw) => parse_id(raw),
        _ => None,
    }
    .filter(|id| *id >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_ids() {
        assert_eq!(parse_id(" 12 "), Some(12));
        assert_eq!(parse_id("-3"), Some(-3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(positive_id("0"), None);
        assert_eq!(positive_id("7"), Some(7));
    }

    #[test]
    fn json_ids() {
        assert_eq!(positive_json_id(Some(&json!(5))), Some(5));
        assert_eq!(positive_json_id(Some(&json!("5"))), Some(5));
        assert_eq!(positive_json_id(Some(&json!(0))), None);
        assert_eq!(positive_json_id(Some(&json!(-1))), None);
        assert_eq!(positive_json_id(Some(&json!(1.5))), None);
        assert_eq!(positive_json_id(Some(&json!("room"))), None);
        assert_eq!(positive_json_id(Some(&json!(null))), None);
        assert_eq!(positive_json_id(None), None);
    }
}
