pub mod portfolio_aggregator;
pub mod staleness;

pub use portfolio_aggregator::{
    aggregate, aggregate_with, AchievementSummary, IndicatorSnapshot, StatusBreakdown,
};
pub use staleness::{is_stale, BookActivity};
