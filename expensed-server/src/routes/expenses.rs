//! Expense routes - create, fetch one, fetch all, update

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::extract::AppJson;
use crate::models::{Expense, ExpensePayload};
use crate::state::AppState;
use crate::{Error, Result};

const NOT_FOUND: &str = "expense not found";

/// Expense routes: /expenses
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/{id}", get(get_expense).put(update_expense))
}

/// POST /expenses - Create an expense, id assigned by storage
pub async fn create_expense(
    State(state): State<AppState>,
    AppJson(input): AppJson<ExpensePayload>,
) -> Result<(StatusCode, Json<Expense>)> {
    let expense: Expense = sqlx::query_as(
        r#"
        INSERT INTO expenses (title, amount, note, tags)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&input.title)
    .bind(input.amount)
    .bind(&input.note)
    .bind(&input.tags)
    .fetch_one(state.pool())
    .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// GET /expenses/:id - Fetch one expense by id
///
/// The path segment is an opaque string; anything that does not parse
/// as an id is a miss, not an error.
pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Expense>> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(Error::NotFound(NOT_FOUND.into()));
    };

    let expense: Expense = sqlx::query_as("SELECT * FROM expenses WHERE id = $1")
        .bind(id)
        .fetch_optional(state.pool())
        .await?
        .ok_or_else(|| Error::NotFound(NOT_FOUND.into()))?;

    Ok(Json(expense))
}

/// GET /expenses - Fetch all expenses
///
/// Ordered by id so repeated fetches are deterministic.
pub async fn list_expenses(State(state): State<AppState>) -> Result<Json<Vec<Expense>>> {
    let expenses: Vec<Expense> = sqlx::query_as("SELECT * FROM expenses ORDER BY id")
        .fetch_all(state.pool())
        .await?;

    Ok(Json(expenses))
}

/// PUT /expenses/:id - Full-replace update
///
/// Every field is overwritten, tags included. The UPDATE itself reports
/// absence through RETURNING, so there is no separate existence check.
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<ExpensePayload>,
) -> Result<Json<Expense>> {
    let Ok(id) = id.parse::<i64>() else {
        return Err(Error::NotFound(NOT_FOUND.into()));
    };

    let expense: Expense = sqlx::query_as(
        r#"
        UPDATE expenses
        SET title = $2, amount = $3, note = $4, tags = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.title)
    .bind(input.amount)
    .bind(&input.note)
    .bind(&input.tags)
    .fetch_optional(state.pool())
    .await?
    .ok_or_else(|| Error::NotFound(NOT_FOUND.into()))?;

    Ok(Json(expense))
}
