//! Twelve-month target/actual storage for a single indicator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month_model::MonthKey;
use super::time_series::{IndicatorTimeSeries, MissingGoalPolicy};

/// Sparse monthly targets. An absent month has no goal, which is not the
/// same as a goal of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalMap(BTreeMap<MonthKey, Decimal>);

impl GoalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same goal in every month.
    pub fn uniform(target: Decimal) -> Self {
        MonthKey::ALL.iter().map(|m| (*m, target)).collect()
    }

    pub fn get(&self, month: MonthKey) -> Option<Decimal> {
        self.0.get(&month).copied()
    }

    pub fn is_set(&self, month: MonthKey) -> bool {
        self.0.contains_key(&month)
    }

    pub fn set(&mut self, month: MonthKey, target: Decimal) {
        self.0.insert(month, target);
    }

    pub fn clear(&mut self, month: MonthKey) -> Option<Decimal> {
        self.0.remove(&month)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MonthKey, Decimal)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MonthKey, Decimal)> for GoalMap {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Decimal)>>(iter: I) -> Self {
        GoalMap(iter.into_iter().collect())
    }
}

/// Recorded monthly actuals. Unrecorded months read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActualMap(BTreeMap<MonthKey, Decimal>);

impl ActualMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from values in calendar order, starting at January.
    /// Extra values past December are ignored.
    pub fn from_calendar(values: &[Decimal]) -> Self {
        MonthKey::ALL
            .iter()
            .zip(values.iter())
            .map(|(m, v)| (*m, *v))
            .collect()
    }

    pub fn get(&self, month: MonthKey) -> Decimal {
        self.0.get(&month).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn set(&mut self, month: MonthKey, actual: Decimal) {
        self.0.insert(month, actual);
    }
}

impl FromIterator<(MonthKey, Decimal)> for ActualMap {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Decimal)>>(iter: I) -> Self {
        ActualMap(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalMatrix {
    #[serde(default)]
    pub goals: GoalMap,
    #[serde(default)]
    pub actuals: ActualMap,
}

impl GoalMatrix {
    pub fn new(goals: GoalMap, actuals: ActualMap) -> Self {
        Self { goals, actuals }
    }

    /// `(target, actual)` for one month.
    pub fn cell(&self, month: MonthKey) -> (Option<Decimal>, Decimal) {
        (self.goals.get(month), self.actuals.get(month))
    }

    pub fn set_goal(&mut self, month: MonthKey, target: Decimal) {
        self.goals.set(month, target);
    }

    pub fn clear_goal(&mut self, month: MonthKey) -> Option<Decimal> {
        self.goals.clear(month)
    }

    pub fn set_actual(&mut self, month: MonthKey, actual: Decimal) {
        self.actuals.set(month, actual);
    }

    pub fn time_series(&self, policy: MissingGoalPolicy) -> IndicatorTimeSeries {
        IndicatorTimeSeries::build(&self.goals, &self.actuals, policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn goal_map_distinguishes_zero_from_absent() {
        let mut goals = GoalMap::new();
        goals.set(MonthKey::Jan, dec!(0));

        assert!(goals.is_set(MonthKey::Jan));
        assert_eq!(goals.get(MonthKey::Jan), Some(dec!(0)));
        assert!(!goals.is_set(MonthKey::Feb));
        assert_eq!(goals.get(MonthKey::Feb), None);
    }

    #[test]
    fn unrecorded_actuals_read_as_zero() {
        let matrix = GoalMatrix::default();
        assert_eq!(matrix.cell(MonthKey::Oct), (None, dec!(0)));
    }

    #[test]
    fn goal_map_serializes_as_month_object() {
        let mut goals = GoalMap::new();
        goals.set(MonthKey::Mar, dec!(12.5));
        let json = serde_json::to_value(&goals).unwrap();
        assert_eq!(json, serde_json::json!({ "mar": 12.5 }));

        let back: GoalMap = serde_json::from_value(json).unwrap();
        assert_eq!(back, goals);
    }
}
