//! Achievement counts over any flattened list of indicators.
//!
//! The aggregator has no notion of books: pass one book's indicators for a
//! book summary, or every book's for the portfolio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::indicators::achievement_classifier::{classify_with, AchievementThresholds, Status};
use crate::indicators::indicators_model::Direction;
use crate::indicators::period_calculator::compute_percentage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub accumulated_percentage: i64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub none: usize,
    pub achieving: usize,
    pub warning: usize,
    pub critical: usize,
}

impl StatusBreakdown {
    fn record(&mut self, status: Status) {
        match status {
            Status::None => self.none += 1,
            Status::Achieving => self.achieving += 1,
            Status::Warning => self.warning += 1,
            Status::Critical => self.critical += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSummary {
    pub total: usize,
    pub achieving: usize,
    pub not_achieving: usize,
    /// Share of achieving indicators, 0 for an empty list.
    pub achievement_rate: i64,
    pub breakdown: StatusBreakdown,
}

pub fn aggregate(indicators: &[IndicatorSnapshot]) -> AchievementSummary {
    aggregate_with(indicators, &AchievementThresholds::DEFAULT)
}

pub fn aggregate_with(
    indicators: &[IndicatorSnapshot],
    thresholds: &AchievementThresholds,
) -> AchievementSummary {
    let mut breakdown = StatusBreakdown::default();
    let mut achieving = 0usize;

    for indicator in indicators {
        let classification =
            classify_with(indicator.accumulated_percentage, indicator.direction, thresholds);
        breakdown.record(classification.status);
        if classification.is_achieving {
            achieving += 1;
        }
    }

    let total = indicators.len();
    AchievementSummary {
        total,
        achieving,
        not_achieving: total - achieving,
        achievement_rate: compute_percentage(Decimal::from(achieving), Decimal::from(total)),
        breakdown,
    }
}
