//! Calendar dates whose day, month and year may each be missing.
//!
//! Travel records rarely carry a complete arrival and departure date. A
//! [`PartialDate`] keeps whatever components are known and can be resolved
//! into the earliest and latest real calendar day it may refer to.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How precisely a [`PartialDate`] pins down a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    /// Day, month and year are all known
    Day,
    /// Month and year are known, day is missing
    Month,
    /// Only the year is usable
    Year,
    /// Not enough information to resolve a calendar range
    Unknown,
}

impl DatePrecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatePrecision::Day => "day",
            DatePrecision::Month => "month",
            DatePrecision::Year => "year",
            DatePrecision::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date with independently optional components.
///
/// Months are 1-indexed. A value with every component absent is a valid
/// value of this type; the estimator treats it as an unknown endpoint.
///
/// # Examples
///
/// ```
/// use traveler_points::models::{DatePrecision, PartialDate};
///
/// let arrival = PartialDate::month_of(6, 2020);
/// assert_eq!(arrival.precision(), DatePrecision::Month);
///
/// let bounds = arrival.bounds().unwrap();
/// assert_eq!(bounds.lower.to_string(), "2020-06-01");
/// assert_eq!(bounds.upper.to_string(), "2020-06-30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PartialDate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

/// Earliest and latest calendar day a [`PartialDate`] may refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateBounds {
    pub lower: NaiveDate,
    pub upper: NaiveDate,
}

impl DateBounds {
    fn single(date: NaiveDate) -> Self {
        Self {
            lower: date,
            upper: date,
        }
    }
}

impl PartialDate {
    pub fn new(day: Option<u32>, month: Option<u32>, year: Option<i32>) -> Self {
        Self { day, month, year }
    }

    /// A fully specified date.
    pub fn exact(day: u32, month: u32, year: i32) -> Self {
        Self::new(Some(day), Some(month), Some(year))
    }

    /// A month of a year, day unknown.
    pub fn month_of(month: u32, year: i32) -> Self {
        Self::new(None, Some(month), Some(year))
    }

    /// A year, day and month unknown.
    pub fn year_of(year: i32) -> Self {
        Self::new(None, None, Some(year))
    }

    /// A date with nothing known.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns `true` when day, month and year are all absent.
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none()
    }

    /// Returns `true` when day, month and year are all present.
    pub fn is_complete(&self) -> bool {
        self.day.is_some() && self.month.is_some() && self.year.is_some()
    }

    pub fn precision(&self) -> DatePrecision {
        match (self.day, self.month, self.year) {
            (Some(_), Some(_), Some(_)) => DatePrecision::Day,
            (None, Some(_), Some(_)) => DatePrecision::Month,
            (_, _, Some(_)) => DatePrecision::Year,
            _ => DatePrecision::Unknown,
        }
    }

    /// The calendar day this date names, if it is complete and real.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match (self.day, self.month, self.year) {
            (Some(day), Some(month), Some(year)) => NaiveDate::from_ymd_opt(year, month, day),
            _ => None,
        }
    }

    /// Resolves this date into the range of calendar days it may refer to.
    ///
    /// A complete date resolves to itself, a month and year to the first and
    /// last day of that month, and anything else carrying a year to the first
    /// and last day of that year. Returns `None` when no year is known or the
    /// known components do not name a real Gregorian date.
    pub fn bounds(&self) -> Option<DateBounds> {
        match self.precision() {
            DatePrecision::Day => self.to_date().map(DateBounds::single),
            DatePrecision::Month => {
                let year = self.year?;
                let month = self.month?;
                Some(DateBounds {
                    lower: NaiveDate::from_ymd_opt(year, month, 1)?,
                    upper: last_day_of_month(year, month)?,
                })
            }
            DatePrecision::Year => {
                let year = self.year?;
                Some(DateBounds {
                    lower: NaiveDate::from_ymd_opt(year, 1, 1)?,
                    upper: NaiveDate::from_ymd_opt(year, 12, 31)?,
                })
            }
            DatePrecision::Unknown => None,
        }
    }
}

impl From<NaiveDate> for PartialDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self::exact(date.day(), date.month(), date.year())
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}", year)?,
            None => f.write_str("????")?,
        }
        match self.month {
            Some(month) => write!(f, "-{:02}", month)?,
            None => f.write_str("-??")?,
        }
        match self.day {
            Some(day) => write!(f, "-{:02}", day),
            None => f.write_str("-??"),
        }
    }
}

/// Last calendar day of `month` in `year`.
///
/// Computed as day zero of the following month, i.e. the day before the
/// first of the next month. Returns `None` for a month outside `1..=12`.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
