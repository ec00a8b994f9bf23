//! Derived monthly, quarterly and accumulated periods for one indicator.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::accumulator::accumulate;
use super::goal_matrix::{ActualMap, GoalMap};
use super::indicators_model::PeriodValue;
use super::month_model::{MonthKey, Quarter};
use super::period_calculator::evaluate_period;

/// How a month without a goal takes part in quarter and year totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingGoalPolicy {
    /// The month counts with a target of zero; its actual is still summed.
    ZeroTarget,
    /// The month is left out of totals entirely, target and actual both.
    ExcludeMonth,
}

pub const DEFAULT_MISSING_GOAL_POLICY: MissingGoalPolicy = MissingGoalPolicy::ZeroTarget;

impl Default for MissingGoalPolicy {
    fn default() -> Self {
        DEFAULT_MISSING_GOAL_POLICY
    }
}

/// Immutable snapshot of an indicator's year.
///
/// The accumulated period is rebuilt from all twelve months on every
/// construction, so it always matches the months it was built from.
/// Edits return a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorTimeSeries {
    months: [PeriodValue; 12],
    /// Months that take part in quarter and year totals.
    counted: [bool; 12],
    accumulated: PeriodValue,
}

impl IndicatorTimeSeries {
    pub fn build(goals: &GoalMap, actuals: &ActualMap, policy: MissingGoalPolicy) -> Self {
        let mut months = [PeriodValue::default(); 12];
        let mut counted = [true; 12];

        for month in MonthKey::ALL {
            let goal = goals.get(month);
            months[month.index()] =
                evaluate_period(goal.unwrap_or(Decimal::ZERO), actuals.get(month));
            counted[month.index()] = goal.is_some() || policy == MissingGoalPolicy::ZeroTarget;
        }

        Self::from_months(months, counted)
    }

    fn from_months(months: [PeriodValue; 12], counted: [bool; 12]) -> Self {
        let accumulated = accumulate(
            months
                .iter()
                .zip(counted.iter())
                .filter(|(_, counted)| **counted)
                .map(|(period, _)| period),
        );

        Self {
            months,
            counted,
            accumulated,
        }
    }

    /// New snapshot with one month's actual replaced.
    pub fn with_actual(&self, month: MonthKey, actual: Decimal) -> Self {
        let mut months = self.months;
        let current = months[month.index()];
        months[month.index()] = evaluate_period(current.target, actual);
        log::debug!(
            "Recomputing accumulated period after {} actual changed {} -> {}",
            month,
            current.actual,
            actual
        );
        Self::from_months(months, self.counted)
    }

    pub fn month(&self, month: MonthKey) -> &PeriodValue {
        &self.months[month.index()]
    }

    /// Months in calendar order.
    pub fn months(&self) -> impl Iterator<Item = (MonthKey, &PeriodValue)> + '_ {
        MonthKey::ALL.into_iter().zip(self.months.iter())
    }

    pub fn accumulated(&self) -> &PeriodValue {
        &self.accumulated
    }

    pub fn quarter(&self, quarter: Quarter) -> PeriodValue {
        accumulate(
            quarter
                .months()
                .into_iter()
                .filter(|m| self.counted[m.index()])
                .map(|m| &self.months[m.index()]),
        )
    }

    pub fn quarters(&self) -> [(Quarter, PeriodValue); 4] {
        Quarter::ALL.map(|q| (q, self.quarter(q)))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeSeriesView<'a> {
    months: BTreeMap<MonthKey, &'a PeriodValue>,
    quarters: BTreeMap<Quarter, PeriodValue>,
    accumulated: &'a PeriodValue,
}

impl Serialize for IndicatorTimeSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TimeSeriesView {
            months: self.months().collect(),
            quarters: self.quarters().into_iter().collect(),
            accumulated: &self.accumulated,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn with_actual_keeps_accumulated_in_sync() {
        let goals = GoalMap::uniform(dec!(10));
        let series = IndicatorTimeSeries::build(&goals, &ActualMap::new(), MissingGoalPolicy::ZeroTarget);
        assert_eq!(series.accumulated().target, dec!(120));
        assert_eq!(series.accumulated().percentage(), 0);

        let edited = series.with_actual(MonthKey::Feb, dec!(60));
        assert_eq!(edited.month(MonthKey::Feb).percentage(), 600);
        assert_eq!(edited.accumulated().actual, dec!(60));
        assert_eq!(edited.accumulated().percentage(), 50);
        // the earlier snapshot is untouched
        assert_eq!(series.accumulated().actual, dec!(0));
    }

    #[test]
    fn serializes_months_quarters_and_accumulated() {
        let series = IndicatorTimeSeries::build(
            &GoalMap::uniform(dec!(1)),
            &ActualMap::from_calendar(&[dec!(1)]),
            MissingGoalPolicy::ZeroTarget,
        );
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json["months"]["jan"]["percentage"], 100);
        assert_eq!(json["quarters"]["Q1"]["target"], 3.0);
        assert_eq!(json["accumulated"]["actual"], 1.0);
    }
}
