//! Admin gate middleware
//!
//! Mutating endpoints require `Authorization: Bearer <token>` matching
//! the configured admin token. With no token configured the gate is
//! disabled entirely (development mode) - the same rule the original
//! deployment used for its unset admin secret.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;

/// Middleware guarding mutating routes.
///
/// Returns 401 when a token is configured and the request carries a
/// missing or mismatched bearer token.
pub async fn admin_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // No configured token disables all checking
    let Some(expected) = state.admin_token.as_deref() else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match provided {
        Some(token) if token == expected => Ok(next.run(request).await),
        Some(_) => {
            warn!("Admin gate: token mismatch");
            Err(ApiError::Unauthorized("Invalid admin token".to_string()))
        }
        None => Err(ApiError::Unauthorized(
            "Missing bearer token".to_string(),
        )),
    }
}
