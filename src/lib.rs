//! # Utilkit
//!
//! Small, dependency-light helpers for everyday Rust code.
//!
//! ## Modules
//!
//! - `collections` - Functional-style sequence operations (map, filter, partition, fold,
//!   flatten, search predicates) over slices, with `Option` elements as absent slots
//! - `times` - Month arithmetic on chrono date/time values that clamps the day of month
//!   across month-length and leap-year boundaries
//! - `error` - Error type for calendar arithmetic
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use utilkit::collections::SequenceExt;
//! use utilkit::times::MonthArithmetic;
//!
//! let (adults, minors) = [34, 12, 56, 17].partition(|&age| age >= 18);
//! assert_eq!(adults, vec![34, 56]);
//! assert_eq!(minors, vec![12, 17]);
//!
//! let due = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
//! assert_eq!(due.plus_months(1).unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```
pub mod collections;
pub mod error;
pub mod times;

pub use error::CalendarError;
