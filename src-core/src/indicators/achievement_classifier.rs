//! Direction-aware banding of achievement percentages.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::indicators_model::{Direction, PeriodValue};

/// Band boundaries, in whole percentage points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementThresholds {
    /// Where "achieving" starts for `up` and ends for `down`.
    pub target: i64,
    /// Lowest `up` percentage still counted as a warning.
    pub up_warning_floor: i64,
    /// Highest `down` percentage still counted as a warning.
    pub down_warning_ceiling: i64,
}

impl AchievementThresholds {
    pub const DEFAULT: AchievementThresholds = AchievementThresholds {
        target: 100,
        up_warning_floor: 80,
        down_warning_ceiling: 110,
    };
}

impl Default for AchievementThresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No data recorded yet.
    None,
    Achieving,
    Warning,
    Critical,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Achieving => write!(f, "achieving"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Classification {
    pub status: Status,
    pub is_achieving: bool,
}

impl From<Status> for Classification {
    fn from(status: Status) -> Self {
        Classification {
            status,
            is_achieving: status == Status::Achieving,
        }
    }
}

/// Classifies with the default thresholds.
pub fn classify(percentage: i64, direction: Direction) -> Classification {
    classify_with(percentage, direction, &AchievementThresholds::DEFAULT)
}

pub fn classify_with(
    percentage: i64,
    direction: Direction,
    thresholds: &AchievementThresholds,
) -> Classification {
    // 0% is the no-data sentinel and is checked before any direction logic.
    if percentage == 0 {
        return Status::None.into();
    }

    let status = match direction {
        Direction::Up => {
            if percentage >= thresholds.target {
                Status::Achieving
            } else if percentage >= thresholds.up_warning_floor {
                Status::Warning
            } else {
                Status::Critical
            }
        }
        Direction::Down => {
            if percentage <= thresholds.target {
                Status::Achieving
            } else if percentage <= thresholds.down_warning_ceiling {
                Status::Warning
            } else {
                Status::Critical
            }
        }
    };

    status.into()
}

pub fn classify_period(
    period: &PeriodValue,
    direction: Direction,
    thresholds: &AchievementThresholds,
) -> Classification {
    classify_with(period.percentage(), direction, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_none_in_both_directions() {
        for direction in [Direction::Up, Direction::Down] {
            let c = classify(0, direction);
            assert_eq!(c.status, Status::None);
            assert!(!c.is_achieving);
        }
    }

    #[test]
    fn up_bands() {
        assert!(classify(100, Direction::Up).is_achieving);
        assert_eq!(classify(150, Direction::Up).status, Status::Achieving);
        assert_eq!(classify(99, Direction::Up).status, Status::Warning);
        assert_eq!(classify(80, Direction::Up).status, Status::Warning);
        assert_eq!(classify(79, Direction::Up).status, Status::Critical);
        assert_eq!(classify(-5, Direction::Up).status, Status::Critical);
    }

    #[test]
    fn down_bands() {
        assert!(classify(100, Direction::Down).is_achieving);
        assert_eq!(classify(1, Direction::Down).status, Status::Achieving);
        assert_eq!(classify(101, Direction::Down).status, Status::Warning);
        assert_eq!(classify(105, Direction::Down).status, Status::Warning);
        assert_eq!(classify(110, Direction::Down).status, Status::Warning);
        assert_eq!(classify(111, Direction::Down).status, Status::Critical);
    }

    #[test]
    fn custom_thresholds_move_the_bands() {
        let strict = AchievementThresholds {
            target: 100,
            up_warning_floor: 95,
            down_warning_ceiling: 102,
        };
        assert_eq!(classify_with(90, Direction::Up, &strict).status, Status::Critical);
        assert_eq!(classify_with(105, Direction::Down, &strict).status, Status::Critical);
    }
}
