pub mod accumulator;
pub mod achievement_classifier;
pub mod goal_matrix;
pub mod indicators_model;
pub mod missing_goals;
pub mod month_model;
pub mod period_calculator;
pub mod time_series;

pub use accumulator::accumulate;
pub use achievement_classifier::{
    classify, classify_period, classify_with, AchievementThresholds, Classification, Status,
};
pub use goal_matrix::{ActualMap, GoalMap, GoalMatrix};
pub use indicators_model::{Direction, IndicatorDefinition, NewIndicator, PeriodValue};
pub use missing_goals::{missing_goals, MissingGoalReport, QuarterCompleteness};
pub use month_model::{MonthKey, Quarter};
pub use period_calculator::{compute_percentage, evaluate_period};
pub use time_series::{IndicatorTimeSeries, MissingGoalPolicy, DEFAULT_MISSING_GOAL_POLICY};
