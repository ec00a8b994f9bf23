use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::books::books_model::Owner;
use crate::indicators::achievement_classifier::Classification;
use crate::indicators::indicators_model::IndicatorDefinition;
use crate::indicators::missing_goals::MissingGoalReport;
use crate::indicators::month_model::MonthKey;
use crate::indicators::time_series::IndicatorTimeSeries;
use crate::portfolio::portfolio_aggregator::AchievementSummary;

/// One indicator with its derived periods and their classifications
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorEvaluation {
    pub definition: IndicatorDefinition,
    pub series: IndicatorTimeSeries,
    pub monthly_status: BTreeMap<MonthKey, Classification>,
    pub accumulated_status: Classification,
    pub missing_goals: MissingGoalReport,
}

/// Full view of a single book on a given date
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEvaluation {
    pub book_id: String,
    pub title: String,
    pub owner: Owner,
    pub year: i32,
    pub evaluated_on: NaiveDate,
    pub indicators: Vec<IndicatorEvaluation>,
    /// Counts over this book's accumulated periods
    pub summary: AchievementSummary,
    /// Total months without a goal across all indicators
    pub missing_goal_count: usize,
    pub stale: bool,
}

/// Per-book line of the portfolio report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub book_id: String,
    pub title: String,
    pub owner: Owner,
    pub year: i32,
    pub summary: AchievementSummary,
    pub stale: bool,
}

/// Every book's indicators evaluated together
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEvaluation {
    pub evaluated_on: NaiveDate,
    /// Counts over the flattened indicator list of all books
    pub summary: AchievementSummary,
    pub books: Vec<BookSummary>,
    pub stale_book_ids: Vec<String>,
}
