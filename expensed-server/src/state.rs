//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
    auth_token: Option<String>,
}

impl AppState {
    pub fn new(pool: PgPool, auth_token: Option<String>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool, auth_token }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Shared secret for the auth gate. `None` disables the gate.
    pub fn auth_token(&self) -> Option<&str> {
        self.inner.auth_token.as_deref()
    }
}
