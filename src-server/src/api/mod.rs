use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::main_lib::AppState;

pub mod books;
pub mod portfolio;

/// Local date unless the request pinned one.
pub(crate) fn evaluation_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| chrono::Local::now().date_naive())
}

async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "staleCutoffDay": state.config.stale_cutoff_day,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health))
        .merge(books::router())
        .merge(portfolio::router())
}
