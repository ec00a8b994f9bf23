//! The single place where an achievement percentage is computed.
//!
//! Monthly, quarterly, accumulated and portfolio-level percentages all go
//! through [`compute_percentage`], so they share one rounding rule.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::indicators_model::PeriodValue;

/// Rounding applied to every percentage the engine produces.
pub const PERCENTAGE_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;

const ONE_HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// `round(actual / target * 100)`, or `0` when `target` is zero.
///
/// A zero result with a zero target means "no goal", not "0% of zero".
/// Results too large for `i64` saturate.
pub fn compute_percentage(actual: Decimal, target: Decimal) -> i64 {
    if target.is_zero() {
        return 0;
    }

    let ratio = actual
        .checked_mul(ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(target))
        .or_else(|| {
            actual
                .checked_div(target)
                .and_then(|r| r.checked_mul(ONE_HUNDRED))
        });

    match ratio {
        Some(ratio) => {
            let rounded = ratio.round_dp_with_strategy(0, PERCENTAGE_ROUNDING);
            rounded.to_i64().unwrap_or_else(|| saturate(rounded.is_sign_negative()))
        }
        None => {
            log::debug!(
                "Percentage overflow for actual={} target={}, saturating",
                actual,
                target
            );
            saturate(actual.is_sign_negative() != target.is_sign_negative())
        }
    }
}

fn saturate(negative: bool) -> i64 {
    if negative {
        i64::MIN
    } else {
        i64::MAX
    }
}

/// Evaluates one period from its target and actual.
pub fn evaluate_period(target: Decimal, actual: Decimal) -> PeriodValue {
    PeriodValue {
        target,
        actual,
        percentage: compute_percentage(actual, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn full_achievement_is_one_hundred() {
        for target in [dec!(1), dec!(0.3), dec!(80), dec!(123456.789)] {
            assert_eq!(compute_percentage(target, target), 100, "target {}", target);
        }
    }

    #[test]
    fn zero_target_is_the_no_goal_sentinel() {
        assert_eq!(compute_percentage(dec!(0), dec!(0)), 0);
        assert_eq!(compute_percentage(dec!(50), dec!(0)), 0);
        assert_eq!(compute_percentage(dec!(-50), dec!(0)), 0);
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(compute_percentage(dec!(50), dec!(80)), 63); // 62.5
        assert_eq!(compute_percentage(dec!(30), dec!(80)), 38); // 37.5
        assert_eq!(compute_percentage(dec!(33), dec!(80)), 41); // 41.25
        assert_eq!(compute_percentage(dec!(-1), dec!(8)), -13); // -12.5
    }

    #[test]
    fn overflow_saturates_instead_of_panicking() {
        assert_eq!(compute_percentage(Decimal::MAX, dec!(0.0000000001)), i64::MAX);
        assert_eq!(compute_percentage(Decimal::MIN, dec!(0.0000000001)), i64::MIN);
    }

    #[test]
    fn evaluate_period_derives_percentage() {
        let period = evaluate_period(dec!(200), dec!(150));
        assert_eq!(period.percentage(), 75);
        assert!(period.has_data());
        assert!(!evaluate_period(dec!(200), dec!(0)).has_data());
    }
}
