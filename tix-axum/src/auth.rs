use crate::ApiApplication;
use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tix_core::models::UserId;

/// The authenticated caller.
///
/// Extracting this reads the bearer token and hands it to the application to
/// resolve. A missing, malformed or rejected token answers `401`.
pub struct User(pub UserId);

impl<T: ApiApplication> FromRequestParts<T> for User {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, app: &T) -> Result<Self, Self::Rejection> {
        let TypedHeader(auth) =
            Option::<TypedHeader<Authorization<Bearer>>>::from_request_parts(parts, app)
                .await
                .ok()
                .flatten()
                .ok_or_else(unauthorized)?;

        app.authenticate(&auth)
            .await
            .map(Self)
            .ok_or_else(unauthorized)
    }
}

// The security requirement is attached per route.
impl aide::OperationInput for User {}

fn unauthorized() -> (StatusCode, String) {
    (StatusCode::UNAUTHORIZED, "not authorized".to_string())
}
