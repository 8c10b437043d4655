//! Actual-day-count family of conventions.

use super::{check_range, is_leap_year, DayCount};
use crate::error::CoreResult;
use crate::types::Date;

fn actual_days(start: Date, end: Date) -> f64 {
    start.days_between(&end) as f64
}

fn year_basis(year: i32) -> f64 {
    if is_leap_year(year) {
        366.0
    } else {
        365.0
    }
}

/// Actual/Actual (ISDA) convention.
///
/// Within one calendar year the fraction is actual days over that year's
/// basis. Across years the two boundary years contribute fractional
/// amounts and each fully spanned calendar year contributes 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActActIsda;

impl DayCount for ActActIsda {
    fn name(&self) -> &'static str {
        "Actual/Actual"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        let y1 = start.year();
        let y2 = end.year();

        if y1 == y2 {
            return Ok(actual_days(start, end) / year_basis(y1));
        }

        let end_of_start_year = Date::from_ymd(y1, 12, 31)?;
        let start_of_end_year = Date::from_ymd(y2, 1, 1)?;

        let head = actual_days(start, end_of_start_year) / year_basis(y1);
        let tail = actual_days(start_of_end_year, end) / year_basis(y2);
        let whole_years = f64::from(y2 - y1 - 1);

        Ok(head + tail + whole_years)
    }
}

/// Actual/365 convention: actual days over a fixed 365-day year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365;

impl DayCount for Act365 {
    fn name(&self) -> &'static str {
        "Actual/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        Ok(actual_days(start, end) / 365.0)
    }
}

/// Actual/360 convention: the money-market basis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act360;

impl DayCount for Act360 {
    fn name(&self) -> &'static str {
        "Actual/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        Ok(actual_days(start, end) / 360.0)
    }
}

/// Actual/364 convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act364;

impl DayCount for Act364 {
    fn name(&self) -> &'static str {
        "Actual/364"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        Ok(actual_days(start, end) / 364.0)
    }
}
