use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::indicators::month_model::MonthKey;
use crate::indicators::time_series::IndicatorTimeSeries;

/// What the staleness check needs to know about a book.
#[derive(Debug, Clone, Copy)]
pub struct BookActivity<'a> {
    pub last_update: Option<NaiveDateTime>,
    pub series: &'a [IndicatorTimeSeries],
}

/// Whether a book is missing data for the month before `today`.
///
/// A book that was never updated is always stale. Before `cutoff_day`
/// (a calendar day of the month) nothing is stale yet. After it, the book is
/// stale when no indicator has a non-zero actual or percentage for the
/// previous month. January looks back at December of the same series.
///
/// `Book.year` is not consulted: for a book of the current year, the January
/// check reads that book's December, a month that has not happened yet.
pub fn is_stale(book: BookActivity<'_>, today: NaiveDate, cutoff_day: u32) -> bool {
    if book.last_update.is_none() {
        return true;
    }

    if today.day() < cutoff_day {
        return false;
    }

    let previous = match MonthKey::from_number(today.month()) {
        Some(current) => current.previous(),
        None => return false,
    };

    !book.series.iter().any(|series| {
        let period = series.month(previous);
        !period.actual.is_zero() || period.percentage() != 0
    })
}
