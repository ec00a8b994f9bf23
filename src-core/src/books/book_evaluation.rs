//! Evaluation of books and portfolios from stored goals and actuals.
//!
//! Pure functions: the date and settings come from the caller.

use chrono::NaiveDate;

use crate::books::book_evaluation_model::{
    BookEvaluation, BookSummary, IndicatorEvaluation, PortfolioEvaluation,
};
use crate::books::books_model::{Book, BookIndicator};
use crate::indicators::achievement_classifier::classify_period;
use crate::indicators::missing_goals::missing_goals;
use crate::portfolio::portfolio_aggregator::{aggregate_with, IndicatorSnapshot};
use crate::portfolio::staleness::{is_stale, BookActivity};
use crate::settings::TrackingSettings;

fn evaluate_indicator(indicator: &BookIndicator, settings: &TrackingSettings) -> IndicatorEvaluation {
    let series = indicator.time_series(settings.missing_goal_policy);
    let direction = indicator.definition.direction;

    let monthly_status = series
        .months()
        .map(|(month, period)| (month, classify_period(period, direction, &settings.thresholds)))
        .collect();
    let accumulated_status = classify_period(series.accumulated(), direction, &settings.thresholds);

    IndicatorEvaluation {
        definition: indicator.definition.clone(),
        monthly_status,
        accumulated_status,
        missing_goals: missing_goals(&indicator.matrix.goals),
        series,
    }
}

fn book_is_stale(book: &Book, today: NaiveDate, settings: &TrackingSettings) -> bool {
    let series = book.time_series(settings.missing_goal_policy);
    is_stale(
        BookActivity {
            last_update: book.last_update,
            series: &series,
        },
        today,
        settings.stale_cutoff_day,
    )
}

pub fn evaluate_book(book: &Book, today: NaiveDate, settings: &TrackingSettings) -> BookEvaluation {
    let indicators: Vec<IndicatorEvaluation> = book
        .indicators
        .iter()
        .map(|indicator| evaluate_indicator(indicator, settings))
        .collect();

    let snapshots: Vec<IndicatorSnapshot> = indicators
        .iter()
        .map(|evaluation| IndicatorSnapshot {
            accumulated_percentage: evaluation.series.accumulated().percentage(),
            direction: evaluation.definition.direction,
        })
        .collect();
    let missing_goal_count = indicators.iter().map(|e| e.missing_goals.count).sum();

    BookEvaluation {
        book_id: book.id.clone(),
        title: book.title.clone(),
        owner: book.owner.clone(),
        year: book.year,
        evaluated_on: today,
        summary: aggregate_with(&snapshots, &settings.thresholds),
        missing_goal_count,
        stale: book_is_stale(book, today, settings),
        indicators,
    }
}

pub fn evaluate_portfolio(
    books: &[Book],
    today: NaiveDate,
    settings: &TrackingSettings,
) -> PortfolioEvaluation {
    let mut all_snapshots = Vec::new();
    let mut summaries = Vec::with_capacity(books.len());
    let mut stale_book_ids = Vec::new();

    for book in books {
        let snapshots = book.snapshots(settings.missing_goal_policy);
        let stale = book_is_stale(book, today, settings);
        if stale {
            log::warn!("Book {} ({}) has no data for last month", book.id, book.title);
            stale_book_ids.push(book.id.clone());
        }

        summaries.push(BookSummary {
            book_id: book.id.clone(),
            title: book.title.clone(),
            owner: book.owner.clone(),
            year: book.year,
            summary: aggregate_with(&snapshots, &settings.thresholds),
            stale,
        });
        all_snapshots.extend(snapshots);
    }

    PortfolioEvaluation {
        evaluated_on: today,
        summary: aggregate_with(&all_snapshots, &settings.thresholds),
        books: summaries,
        stale_book_ids,
    }
}
