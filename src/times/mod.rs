//! Calendar-safe month arithmetic
//!
//! Shifting a date by whole months keeps the day of month where possible and
//! clamps it to the last day of the target month otherwise. Time of day and
//! time zone are carried through unchanged.
//!
//! Implemented for chrono's `NaiveDate`, `NaiveDateTime` and `DateTime<Tz>`.

pub mod calendar;
pub mod months;

pub use calendar::{days_in_month, is_leap_year, YearMonth};
pub use months::{minus_months, plus_months, MonthArithmetic};
