//! Shared-secret auth gate
//!
//! Compares the literal `Authorization` header against a
//! configuration-supplied token. Not a real auth scheme; a placeholder
//! gate for an internal tool. With no token configured the gate is off.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::Error;

/// Middleware: short-circuit with 401 unless the Authorization header
/// matches the configured token.
pub async fn require_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.auth_token() else {
        return next.run(request).await;
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if provided != Some(expected) {
        return Error::Unauthorized.into_response();
    }

    next.run(request).await
}
