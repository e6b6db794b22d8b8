//! Gregorian calendar primitives
//!
//! Leap-year rule, month lengths and a normalized `(year, month)` pair that
//! can be shifted by any number of months.

use crate::error::CalendarError;
use chrono::Month;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Returns true if `year` is a Gregorian leap year.
///
/// A year is a leap year if it is divisible by 4 and not by 100, or if it is
/// divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: Month) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// A calendar month of a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YearMonth {
    pub year: i32,
    pub month: Month,
}

impl YearMonth {
    /// Create a year-month from a 1-based month number
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(CalendarError::InvalidMonth(month))?;
        Ok(Self { year, month })
    }

    /// The 1-based month number
    pub fn month_number(&self) -> u32 {
        self.month.number_from_month()
    }

    /// Number of days in this month
    pub fn days(&self) -> u32 {
        days_in_month(self.year, self.month)
    }

    /// Shift by a (possibly negative) number of months.
    ///
    /// The 0-based month index is normalized with floor division, so
    /// January minus one month is December of the previous year. `months`
    /// may be any `i64`; offsets that overflow the month index are reported
    /// as out of range.
    pub fn plus_months(self, months: i64) -> Result<Self, CalendarError> {
        let index = i64::from(self.year) * 12 + i64::from(self.month.number_from_month()) - 1;
        let shifted = index
            .checked_add(months)
            .ok_or_else(|| CalendarError::out_of_range(i64::from(self.year), self.month_number()))?;

        let year = shifted.div_euclid(12);
        let month = (shifted.rem_euclid(12) + 1) as u32;
        let year = i32::try_from(year).map_err(|_| CalendarError::out_of_range(year, month))?;

        Self::new(year, month)
    }
}
