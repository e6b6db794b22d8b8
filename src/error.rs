use thiserror::Error;

/// Errors raised by calendar arithmetic.
///
/// Month shifting is total over every date chrono can represent; these
/// variants cover inputs that are not months at all and results that fall
/// past the end of the representable calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month number: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Date out of range: {year}-{month:02} cannot be represented")]
    OutOfRange { year: i64, month: u32 },
}

impl CalendarError {
    /// Create an out-of-range error for the given target year and month
    pub fn out_of_range(year: i64, month: u32) -> Self {
        Self::OutOfRange { year, month }
    }

    /// Returns true if the error was caused by leaving the representable range
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
