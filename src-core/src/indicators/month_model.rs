//! Month and quarter keys shared by every per-month map.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One of the twelve calendar months. Declaration order is calendar order,
/// so the derived `Ord` sorts maps from January to December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthKey {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl MonthKey {
    pub const ALL: [MonthKey; 12] = [
        MonthKey::Jan,
        MonthKey::Feb,
        MonthKey::Mar,
        MonthKey::Apr,
        MonthKey::May,
        MonthKey::Jun,
        MonthKey::Jul,
        MonthKey::Aug,
        MonthKey::Sep,
        MonthKey::Oct,
        MonthKey::Nov,
        MonthKey::Dec,
    ];

    /// Zero-based position in the year.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<MonthKey> {
        Self::ALL.get(index).copied()
    }

    /// Maps a chrono month number (1..=12).
    pub fn from_number(month: u32) -> Option<MonthKey> {
        month
            .checked_sub(1)
            .and_then(|i| Self::from_index(i as usize))
    }

    /// The month before this one, wrapping January back to December.
    pub fn previous(self) -> MonthKey {
        Self::ALL[(self.index() + 11) % 12]
    }

    pub fn quarter(self) -> Quarter {
        Quarter::ALL[self.index() / 3]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonthKey::Jan => "jan",
            MonthKey::Feb => "feb",
            MonthKey::Mar => "mar",
            MonthKey::Apr => "apr",
            MonthKey::May => "may",
            MonthKey::Jun => "jun",
            MonthKey::Jul => "jul",
            MonthKey::Aug => "aug",
            MonthKey::Sep => "sep",
            MonthKey::Oct => "oct",
            MonthKey::Nov => "nov",
            MonthKey::Dec => "dec",
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MonthKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        MonthKey::ALL
            .iter()
            .copied()
            .find(|m| m.as_str() == lower)
            .ok_or_else(|| Error::invalid_input(format!("Unknown month key '{}'", s)))
    }
}

/// Fixed three-month groupings of the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// 1-based quarter number.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    pub fn months(self) -> [MonthKey; 3] {
        let start = (self as usize) * 3;
        [
            MonthKey::ALL[start],
            MonthKey::ALL[start + 1],
            MonthKey::ALL[start + 2],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_wraps_january_to_december() {
        assert_eq!(MonthKey::Jan.previous(), MonthKey::Dec);
        assert_eq!(MonthKey::Jul.previous(), MonthKey::Jun);
    }

    #[test]
    fn quarters_group_calendar_months() {
        assert_eq!(Quarter::Q1.months(), [MonthKey::Jan, MonthKey::Feb, MonthKey::Mar]);
        assert_eq!(Quarter::Q4.months(), [MonthKey::Oct, MonthKey::Nov, MonthKey::Dec]);
        assert_eq!(MonthKey::Sep.quarter(), Quarter::Q3);
        assert_eq!(Quarter::Q2.number(), 2);
    }

    #[test]
    fn parses_month_keys_case_insensitively() {
        assert_eq!("Mar".parse::<MonthKey>().ok(), Some(MonthKey::Mar));
        assert!("march".parse::<MonthKey>().is_err());
        assert_eq!(MonthKey::from_number(12), Some(MonthKey::Dec));
        assert_eq!(MonthKey::from_number(0), None);
    }
}
