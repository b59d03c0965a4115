//! Axum extractor that authenticates a request into an [`AuthorizationContext`].
//!
//! The host application exposes a [`JwtConfig`] through its state:
//!
//! ```rust,ignore
//! use axum::{Router, extract::FromRef, routing::get};
//! use gatehouse_auth::AuthContext;
//!
//! #[derive(Clone, FromRef)]
//! struct AppState {
//!     jwt_config: JwtConfig,
//! }
//!
//! async fn me(AuthContext(ctx): AuthContext) -> String {
//!     ctx.user_id().to_string()
//! }
//!
//! let app = Router::new().route("/me", get(me)).with_state(state);
//! ```

use axum::{
    Json,
    extract::{FromRef, FromRequestParts},
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use gatehouse_config::JwtConfig;
use gatehouse_core::AuthError;
use gatehouse_models::Timezone;

use crate::context::{AuthorizationContext, extract_context};
use crate::jwt::authenticate;

/// Request header carrying the caller's IANA timezone.
pub const TIMEZONE_HEADER: &str = "Timezone";

#[derive(Debug, Clone)]
pub struct AuthContext(pub AuthorizationContext);

/// Rejection returned when a request cannot be authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthRejection(pub AuthError);

impl From<AuthError> for AuthRejection {
    fn from(err: AuthError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let status = if self.0.is_authentication_failure() {
            StatusCode::UNAUTHORIZED
        } else {
            StatusCode::NOT_FOUND
        };

        let body = Json(json!({
            "error": self.0.to_string(),
            "code": self.0.code(),
        }));

        (status, body).into_response()
    }
}

impl<S> FromRequestParts<S> for AuthContext
where
    JwtConfig: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jwt_config = JwtConfig::from_ref(state);

        let authorization = match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => Some(value.to_str().map_err(|_| AuthError::TokenInvalid)?),
            None => None,
        };

        let claims = authenticate(authorization, &jwt_config)?;
        let mut ctx = extract_context(&claims);

        let timezone = parts
            .headers
            .get(TIMEZONE_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(Timezone::parse_or_default)
            .unwrap_or_default();
        ctx.set_timezone(timezone);

        debug!(
            user_id = %ctx.user_id(),
            role = %ctx.role(),
            ghost_id = %ctx.ghost_id(),
            timezone = %ctx.timezone(),
            "Request authenticated"
        );

        Ok(AuthContext(ctx))
    }
}
