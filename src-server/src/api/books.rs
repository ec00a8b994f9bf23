use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::NaiveDate;
use perfbook_core::books::{Book, BookEvaluation, BookIndicator, NewBook};
use perfbook_core::indicators::{MonthKey, NewIndicator};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::api::evaluation_date;
use crate::{error::ApiResult, main_lib::AppState};

#[derive(Deserialize)]
pub(crate) struct EvaluationQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct ActualRequest {
    value: Decimal,
}

/// `null` clears the goal for the month.
#[derive(Deserialize)]
struct GoalRequest {
    value: Option<Decimal>,
}

async fn get_books(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Book>>> {
    let books = state.book_service.get_books()?;
    Ok(Json(books))
}

async fn get_book(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Book>> {
    let book = state.book_service.get_book(&id)?;
    Ok(Json(book))
}

async fn create_book(
    State(state): State<Arc<AppState>>,
    Json(new_book): Json<NewBook>,
) -> ApiResult<(StatusCode, Json<Book>)> {
    let book = state.book_service.create_book(new_book).await?;
    tracing::info!(book_id = %book.id, owner = %book.owner.name, "book created");
    Ok((StatusCode::CREATED, Json(book)))
}

async fn delete_book(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let deleted = state.book_service.delete_book(&id).await?;
    if deleted == 0 {
        return Err(perfbook_core::Error::not_found("Book", id).into());
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn add_indicator(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_indicator): Json<NewIndicator>,
) -> ApiResult<(StatusCode, Json<BookIndicator>)> {
    let indicator = state.book_service.add_indicator(&id, new_indicator).await?;
    Ok((StatusCode::CREATED, Json(indicator)))
}

async fn remove_indicator(
    Path((id, indicator_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Book>> {
    let book = state.book_service.remove_indicator(&id, &indicator_id).await?;
    Ok(Json(book))
}

async fn record_actual(
    Path((id, indicator_id, month)): Path<(String, String, String)>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<ActualRequest>,
) -> ApiResult<Json<Book>> {
    let month: MonthKey = month.parse()?;
    let book = state
        .book_service
        .record_actual(&id, &indicator_id, month, req.value)
        .await?;
    tracing::debug!(book_id = %id, %indicator_id, %month, value = %req.value, "actual recorded");
    Ok(Json(book))
}

async fn set_goal(
    Path((id, indicator_id, month)): Path<(String, String, String)>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<GoalRequest>,
) -> ApiResult<Json<Book>> {
    let month: MonthKey = month.parse()?;
    let book = state
        .book_service
        .set_goal(&id, &indicator_id, month, req.value)
        .await?;
    Ok(Json(book))
}

/// Evaluate a book on a date
/// Query params:
///   date: YYYY-MM-DD format (optional, defaults to today)
async fn get_book_evaluation(
    Path(id): Path<String>,
    Query(query): Query<EvaluationQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<BookEvaluation>> {
    let today = evaluation_date(query.date);
    let evaluation = state.book_service.evaluate_book(&id, today)?;
    Ok(Json(evaluation))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/books", get(get_books).post(create_book))
        .route("/books/:id", get(get_book).delete(delete_book))
        .route("/books/:id/evaluation", get(get_book_evaluation))
        .route("/books/:id/indicators", post(add_indicator))
        .route(
            "/books/:id/indicators/:indicator_id",
            delete(remove_indicator),
        )
        .route(
            "/books/:id/indicators/:indicator_id/actuals/:month",
            put(record_actual),
        )
        .route(
            "/books/:id/indicators/:indicator_id/goals/:month",
            put(set_goal),
        )
}
