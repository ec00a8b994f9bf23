use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use perfbook_core::books::PortfolioEvaluation;

use crate::api::{books::EvaluationQuery, evaluation_date};
use crate::{error::ApiResult, main_lib::AppState};

async fn get_portfolio_summary(
    Query(query): Query<EvaluationQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PortfolioEvaluation>> {
    let today = evaluation_date(query.date);
    let portfolio = state.book_service.portfolio_summary(today)?;
    tracing::debug!(
        books = portfolio.books.len(),
        stale = portfolio.stale_book_ids.len(),
        rate = portfolio.summary.achievement_rate,
        "portfolio evaluated"
    );
    Ok(Json(portfolio))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/summary", get(get_portfolio_summary))
}
