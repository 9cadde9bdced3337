//! Calendar-month arithmetic for period bucketing
//!
//! The ledger allocates payments into calendar-month buckets keyed by a
//! `YYYY-MM` label. This module owns that label as a value type so that month
//! arithmetic (advancing, diffing, day and week counts) is done with proper
//! month-length and leap-year handling rather than manual day-count math.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month {month}: must be 1-12")]
    InvalidMonth { month: u32 },

    #[error("Invalid month key '{0}': expected YYYY-MM")]
    InvalidMonthKey(String),
}

/// A calendar month, the allocation key for payment bucketing
///
/// Displayed and serialized as `YYYY-MM`. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Creates a month key, validating the month number
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12)
    pub fn month(&self) -> u32 {
        self.month
    }

    /// This month advanced by `months` calendar months
    pub fn advance(&self, months: u32) -> Self {
        let index = self.month as i64 - 1 + months as i64;
        Self {
            year: self.year + (index / 12) as i32,
            month: (index % 12) as u32 + 1,
        }
    }

    /// Signed number of whole months from `earlier` to `self`
    ///
    /// Negative when `self` precedes `earlier`.
    pub fn months_since(&self, earlier: MonthKey) -> i64 {
        (self.year as i64 - earlier.year as i64) * 12 + self.month as i64 - earlier.month as i64
    }

    /// The first day of this month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated 1-12")
    }

    /// Number of days in this month (Gregorian, leap-year aware)
    pub fn days_in_month(&self) -> u32 {
        (self.advance(1).first_day() - self.first_day()).num_days() as u32
    }

    /// Number of calendar weeks this month spans
    ///
    /// A week row starts on Sunday: `ceil((days + first_weekday_offset) / 7)`,
    /// where the offset is the 0-based weekday (Sunday = 0) of the month's
    /// first day. This is a calendar-aware count, not a fixed 4.
    pub fn weeks_in_month(&self) -> u32 {
        let offset = self.first_day().weekday().num_days_from_sunday();
        (self.days_in_month() + offset).div_ceil(7)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| TemporalError::InvalidMonthKey(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| TemporalError::InvalidMonthKey(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| TemporalError::InvalidMonthKey(s.to_string()))?;
        Self::new(year, month).map_err(|_| TemporalError::InvalidMonthKey(s.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
