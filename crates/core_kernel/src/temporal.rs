//! Calendar arithmetic and the system clock
//!
//! Premium calculation depends on the insured's age "as of today" and term
//! policies derive their end date by adding whole years to the start date.
//! Both operations work on calendar dates only; no time-of-day component is
//! involved anywhere in pricing.

use chrono::{Datelike, Months, NaiveDate, Utc};
use std::fmt;
use thiserror::Error;

/// Errors related to calendar operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Adding {years} years to {date} leaves the supported calendar range")]
    DateOutOfRange {
        date: NaiveDate,
        years: u32,
    },
}

/// Source of the current calendar date
///
/// Age is derived relative to "now" on every calculation and never cached, so
/// the clock is injected wherever ages are computed. Tests pin it with
/// [`FixedClock`].
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns today's date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, reading the UTC calendar date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Number of complete years between two dates
///
/// A year only counts once its anniversary (month and day) has been reached,
/// so someone born on 1980-06-15 is 43 on 2024-06-14 and 44 on 2024-06-15.
/// When `to` precedes `from` the result is the negated count of the reverse
/// interval.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::whole_years_between;
///
/// let born = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(whole_years_between(born, today), 44);
/// ```
pub fn whole_years_between(from: NaiveDate, to: NaiveDate) -> i32 {
    if to < from {
        return -whole_years_between(to, from);
    }

    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years
}

/// Adds whole years to a date
///
/// February 29th maps onto February 28th when the target year is not a leap
/// year.
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate, TemporalError> {
    years
        .checked_mul(12)
        .and_then(|months| date.checked_add_months(Months::new(months)))
        .ok_or(TemporalError::DateOutOfRange { date, years })
}
