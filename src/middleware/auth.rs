use axum::extract::FromRequestParts;
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::TypedHeader;
use headers::authorization::Bearer;
use headers::Authorization;
use serde_json::json;

use crate::auth::{verify_token, AdminClaims};

/// Extractor guarding admin routes: requires a valid `Authorization: Bearer`
/// token and exposes the verified claims to the handler.
#[derive(Debug, Clone)]
pub struct AdminAuth(pub AdminClaims);

fn unauthorized(reason: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": format!("Unauthorized - {reason}") })),
    )
        .into_response()
}

impl<S> FromRequestParts<S> for AdminAuth
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| unauthorized("No token provided"))?;

        let claims =
            verify_token(bearer.token()).map_err(|_| unauthorized("Invalid token"))?;
        Ok(Self(claims))
    }
}
