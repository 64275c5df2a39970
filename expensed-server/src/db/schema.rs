//! Schema setup for the expenses table

use sqlx::PgPool;

use crate::Result;

/// Ensure the expenses table exists. Safe to run on every startup.
///
/// A failure here is fatal: the caller must not start serving without
/// the table in place.
pub async fn run(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL DEFAULT '',
            amount DOUBLE PRECISION NOT NULL DEFAULT 0,
            note TEXT NOT NULL DEFAULT '',
            tags TEXT[] NOT NULL DEFAULT '{}'
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("expenses table ready");
    Ok(())
}
