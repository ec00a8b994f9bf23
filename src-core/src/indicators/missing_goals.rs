use serde::Serialize;

use super::goal_matrix::GoalMap;
use super::month_model::{MonthKey, Quarter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuarterCompleteness {
    pub q: u8,
    pub complete: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingGoalReport {
    pub count: usize,
    pub missing_months: Vec<MonthKey>,
    pub per_quarter: [QuarterCompleteness; 4],
}

impl MissingGoalReport {
    pub fn is_complete(&self) -> bool {
        self.count == 0
    }
}

/// Reports months with no goal set. A goal of zero is set, not missing.
/// Actuals play no part here.
pub fn missing_goals(goals: &GoalMap) -> MissingGoalReport {
    let missing_months: Vec<MonthKey> = MonthKey::ALL
        .into_iter()
        .filter(|m| !goals.is_set(*m))
        .collect();

    let per_quarter = Quarter::ALL.map(|q| QuarterCompleteness {
        q: q.number(),
        complete: q.months().iter().all(|m| goals.is_set(*m)),
    });

    MissingGoalReport {
        count: missing_months.len(),
        missing_months,
        per_quarter,
    }
}
