use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::goal_matrix::{ActualMap, GoalMap};

/// Whether higher or lower actual values are favorable. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorDefinition {
    pub id: String,
    pub name: String,
    pub unit: String,
    pub direction: Direction,
    /// Whether actuals may be recorded by hand.
    pub editable: bool,
}

/// Payload used to attach a new indicator to a book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIndicator {
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_editable")]
    pub editable: bool,
    #[serde(default)]
    pub goals: GoalMap,
    #[serde(default)]
    pub actuals: ActualMap,
}

fn default_editable() -> bool {
    true
}

impl NewIndicator {
    pub fn new(name: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            unit: String::new(),
            direction,
            editable: true,
            goals: GoalMap::default(),
            actuals: ActualMap::default(),
        }
    }

    pub fn with_goals(mut self, goals: GoalMap) -> Self {
        self.goals = goals;
        self
    }

    pub fn with_actuals(mut self, actuals: ActualMap) -> Self {
        self.actuals = actuals;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.editable = false;
        self
    }
}

/// One evaluated period: a single month, a quarter, or the accumulated year.
///
/// `percentage` is always derived from `actual` and `target` by
/// [`evaluate_period`](super::period_calculator::evaluate_period); there is no
/// public way to author it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodValue {
    pub target: Decimal,
    pub actual: Decimal,
    pub(crate) percentage: i64,
}

impl PeriodValue {
    pub fn percentage(&self) -> i64 {
        self.percentage
    }

    /// False for the "no data yet" sentinel: zero percentage with zero actual.
    pub fn has_data(&self) -> bool {
        !(self.percentage == 0 && self.actual.is_zero())
    }
}
