//! Business day calendars.
//!
//! A calendar is the injected "is this date a valid business day" oracle.
//! The core owns no holiday database: market holidays arrive as a list of
//! valid business days (see [`HolidayCalendar`]), or the weekend-only
//! calendar is used.

use std::collections::BTreeSet;

use crate::error::{CoreError, CoreResult};
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the earliest business day on or after the given date.
    fn next_business_day(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            result = result.add_days(1);
        }
        result
    }
}

/// A weekend-only calendar: every weekday is a business day.
///
/// Used when no market holiday data has been injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// A calendar built from an injected list of valid business days.
///
/// Dates outside the loaded range fall back to the weekday test, so a
/// partially loaded calendar stays usable for long-dated schedules.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    valid_days: BTreeSet<Date>,
    range_start: Date,
    range_end: Date,
}

impl HolidayCalendar {
    /// Creates a calendar from the valid business days of a market over a
    /// date range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the list is empty.
    pub fn from_valid_days(valid_days: impl IntoIterator<Item = Date>) -> CoreResult<Self> {
        let valid_days: BTreeSet<Date> = valid_days.into_iter().collect();
        let (first, last) = match (valid_days.iter().next(), valid_days.iter().next_back()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => {
                return Err(CoreError::invalid_date(
                    "calendar requires at least one valid business day",
                ))
            }
        };

        Ok(Self {
            valid_days,
            range_start: first,
            range_end: last,
        })
    }

    /// Returns the date range covered by the injected data.
    #[must_use]
    pub fn coverage(&self) -> (Date, Date) {
        (self.range_start, self.range_end)
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &'static str {
        "Injected Holidays"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date < self.range_start || date > self.range_end {
            return !date.is_weekend();
        }
        self.valid_days.contains(&date)
    }
}

/// Validates that a date is a business day under the given calendar.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` naming the next valid business day if
/// the date falls on a weekend or holiday.
pub fn validate_business_day(date: Date, calendar: &dyn Calendar) -> CoreResult<Date> {
    if calendar.is_business_day(date) {
        return Ok(date);
    }
    let next = calendar.next_business_day(date);
    Err(CoreError::invalid_date(format!(
        "{date} is not a valid trading day. Next valid date is {next}"
    )))
}
