//! Month arithmetic with day-of-month clamping
//!
//! Adding months moves the calendar date to the same day of the target
//! month. When the target month is shorter, the day is clamped to its last
//! day instead of rolling into the following month:
//!
//! ```rust
//! use chrono::NaiveDate;
//! use utilkit::times::MonthArithmetic;
//!
//! let date = NaiveDate::from_ymd_opt(2022, 3, 31).unwrap();
//! assert_eq!(date.plus_months(1).unwrap(), NaiveDate::from_ymd_opt(2022, 4, 30).unwrap());
//! assert_eq!(date.minus_months(1).unwrap(), NaiveDate::from_ymd_opt(2022, 2, 28).unwrap());
//! ```
//!
//! Clamping is lossy: shifting forward and back by the same amount does not
//! always return the original date.

use super::calendar::YearMonth;
use crate::error::CalendarError;
use chrono::{
    DateTime, Datelike, Duration, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone,
};
use tracing::debug;

/// Date and date-time values that can be shifted by whole months.
///
/// Implementors only describe how to read their calendar date and how to
/// rebuild themselves on another date; the shifting itself is shared.
pub trait MonthArithmetic: Sized + Clone {
    /// The calendar date this value falls on, in its own time zone
    fn calendar_date(&self) -> NaiveDate;

    /// Rebuild this value on `date`, keeping time of day and time zone.
    ///
    /// Returns `None` if the result cannot be represented.
    fn with_calendar_date(&self, date: NaiveDate) -> Option<Self>;

    /// Returns this value with `months` added (negative values subtract)
    fn plus_months(&self, months: i32) -> Result<Self, CalendarError> {
        shift_months(self, i64::from(months))
    }

    /// Returns this value with `months` subtracted
    fn minus_months(&self, months: i32) -> Result<Self, CalendarError> {
        shift_months(self, -i64::from(months))
    }
}

/// Returns `value` with the given number of months added.
pub fn plus_months<D: MonthArithmetic>(value: &D, months: i32) -> Result<D, CalendarError> {
    value.plus_months(months)
}

/// Returns `value` with the given number of months subtracted.
pub fn minus_months<D: MonthArithmetic>(value: &D, months: i32) -> Result<D, CalendarError> {
    value.minus_months(months)
}

fn shift_months<D: MonthArithmetic>(value: &D, months: i64) -> Result<D, CalendarError> {
    if months == 0 {
        return Ok(value.clone());
    }

    let date = value.calendar_date();
    let target = YearMonth::new(date.year(), date.month())?.plus_months(months)?;
    let day = date.day().min(target.days());
    if day < date.day() {
        debug!(
            from = %date,
            months,
            year = target.year,
            month = target.month_number(),
            day,
            "Clamped day of month"
        );
    }

    NaiveDate::from_ymd_opt(target.year, target.month_number(), day)
        .and_then(|shifted| value.with_calendar_date(shifted))
        .ok_or_else(|| {
            debug!(from = %date, months, "Shifted date is outside the representable range");
            CalendarError::out_of_range(i64::from(target.year), target.month_number())
        })
}

impl MonthArithmetic for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Option<Self> {
        Some(date)
    }
}

impl MonthArithmetic for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Option<Self> {
        Some(date.and_time(self.time()))
    }
}

/// Zoned values are shifted on their local wall clock.
///
/// An ambiguous local result picks the earlier instant. A local time that
/// falls into a gap is interpreted with the input's UTC offset.
impl<Tz: TimeZone> MonthArithmetic for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn with_calendar_date(&self, date: NaiveDate) -> Option<Self> {
        let local = date.and_time(self.naive_local().time());
        let zone = self.timezone();

        match zone.from_local_datetime(&local) {
            LocalResult::Single(shifted) => Some(shifted),
            LocalResult::Ambiguous(earliest, _) => Some(earliest),
            LocalResult::None => {
                let offset = self.offset().fix();
                let utc = local
                    .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))?;
                Some(zone.from_utc_datetime(&utc))
            }
        }
    }
}
