use rust_decimal::Decimal;

use super::indicators_model::PeriodValue;
use super::period_calculator::evaluate_period;

/// Folds periods into one by summing targets and actuals, then re-deriving
/// the percentage. Months without a reported actual still add their target.
///
/// Always recomputed from the full set; order of `periods` does not matter.
pub fn accumulate<'a, I>(periods: I) -> PeriodValue
where
    I: IntoIterator<Item = &'a PeriodValue>,
{
    let (target, actual) = periods
        .into_iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(target, actual), period| {
            (
                target.saturating_add(period.target),
                actual.saturating_add(period.actual),
            )
        });

    evaluate_period(target, actual)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sums_targets_and_actuals() {
        let periods = [
            evaluate_period(dec!(100), dec!(90)),
            evaluate_period(dec!(100), dec!(120)),
            evaluate_period(dec!(100), dec!(0)),
        ];
        let total = accumulate(&periods);

        assert_eq!(total.target, dec!(300));
        assert_eq!(total.actual, dec!(210));
        assert_eq!(total.percentage(), 70);
    }

    #[test]
    fn order_does_not_matter() {
        let mut periods = vec![
            evaluate_period(dec!(80), dec!(80)),
            evaluate_period(dec!(80), dec!(33)),
            evaluate_period(dec!(75), dec!(16)),
            evaluate_period(dec!(0), dec!(5)),
        ];
        let forward = accumulate(&periods);
        periods.reverse();
        assert_eq!(accumulate(&periods), forward);
        periods.swap(0, 2);
        assert_eq!(accumulate(&periods), forward);
    }

    #[test]
    fn empty_input_is_zero_period() {
        let total = accumulate(std::iter::empty());
        assert_eq!(total, PeriodValue::default());
    }

    #[test]
    fn rounds_the_aggregate_not_the_months() {
        let periods = [
            evaluate_period(dec!(3), dec!(1)),
            evaluate_period(dec!(3), dec!(1)),
            evaluate_period(dec!(2), dec!(1)),
        ];
        // 3 / 8 = 37.5 -> 38, while the monthly values are 33, 33, 50
        assert_eq!(accumulate(&periods).percentage(), 38);
    }
}
