//! Inclusive calendar date ranges.
//!
//! Reservations span whole days with inclusive bounds: a booking from
//! 2025-06-01 to 2025-06-01 occupies one day. This module provides the
//! range type, the interval-intersection predicate used for conflict
//! detection, and the inclusive day count used for pricing.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An inclusive range of calendar dates.
///
/// Both endpoints are part of the range. Construction enforces
/// `start <= end`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use kura::DateRange;
///
/// let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
/// let range = DateRange::new(start, end).unwrap();
///
/// assert_eq!(range.days_inclusive(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a new inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use kura::DateRange;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    /// assert!(DateRange::new(start, end).is_err());
    /// assert!(DateRange::new(end, start).is_ok());
    /// ```
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(Error::InvalidDateRange {
                start: start.to_string(),
                end: end.to_string(),
                reason: "start date must not be after end date".to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parses a range from two ISO-8601 (`YYYY-MM-DD`) date strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either string is not a valid ISO-8601 date,
    /// or if the parsed start is after the parsed end.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::DateRange;
    ///
    /// let range = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
    /// assert_eq!(range.days_inclusive(), 10);
    ///
    /// assert!(DateRange::parse("2025/06/01", "2025-06-10").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let parse_date = |field: &str, value: &str| -> Result<NaiveDate> {
            value
                .parse::<NaiveDate>()
                .map_err(|_| Error::Validation {
                    field: field.to_string(),
                    message: format!("invalid date '{value}': expected YYYY-MM-DD"),
                })
        };

        let start = parse_date("start_date", start)?;
        let end = parse_date("end_date", end)?;
        Self::new(start, end)
    }

    /// Returns the first day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the last day of the range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns the number of days covered, counting both endpoints.
    ///
    /// Always at least 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::DateRange;
    ///
    /// let single = DateRange::parse("2025-06-01", "2025-06-01").unwrap();
    /// assert_eq!(single.days_inclusive(), 1);
    /// ```
    #[must_use]
    pub fn days_inclusive(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Checks whether two ranges share at least one day.
    ///
    /// Two inclusive ranges intersect iff
    /// `self.start <= other.end && self.end >= other.start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use kura::DateRange;
    ///
    /// let a = DateRange::parse("2025-06-01", "2025-06-10").unwrap();
    /// let b = DateRange::parse("2025-06-10", "2025-06-20").unwrap();
    /// let c = DateRange::parse("2025-06-11", "2025-06-20").unwrap();
    ///
    /// // Shared endpoint counts as an overlap
    /// assert!(a.overlaps(&b));
    /// assert!(!a.overlaps(&c));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    /// Checks whether a single date falls within the range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
