//! 30/360 family of day count conventions.
//!
//! All variants share the formula
//! `(360 (y2-y1) + 30 (m2-m1) + (d2-d1)) / 360` and differ only in how
//! the day components are adjusted first.

use super::{check_range, DayCount};
use crate::error::CoreResult;
use crate::types::Date;

fn thirty360_fraction(y1: i64, m1: i64, d1: i64, y2: i64, m2: i64, d2: i64) -> f64 {
    (360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1)) as f64 / 360.0
}

fn components(date: Date) -> (i64, i64, i64) {
    (
        i64::from(date.year()),
        i64::from(date.month()),
        i64::from(date.day()),
    )
}

/// Plain 30/360 convention: no day adjustment at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        let (y1, m1, d1) = components(start);
        let (y2, m2, d2) = components(end);
        Ok(thirty360_fraction(y1, m1, d1, y2, m2, d2))
    }
}

/// 30U/360 convention.
///
/// February month-end pairs are adjusted to day 30 before the usual
/// 31 -> 30 end clamping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360U;

impl DayCount for Thirty360U {
    fn name(&self) -> &'static str {
        "30U/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        let (y1, m1, mut d1) = components(start);
        let (y2, m2, mut d2) = components(end);

        let start_feb_eom = m1 == 2 && (d1 == 28 || d1 == 29);
        let end_feb_eom = m2 == 2 && (d2 == 28 || d2 == 29);

        if start_feb_eom && end_feb_eom {
            d2 = 30;
        }
        if start_feb_eom {
            d1 = 30;
        }
        if d2 == 31 && (d1 == 30 || d1 == 31) {
            d2 = 30;
        }
        if d1 == 31 {
            d1 = 30;
        }

        Ok(thirty360_fraction(y1, m1, d1, y2, m2, d2))
    }
}

/// 30B/360 convention.
///
/// The start day is clamped to at most 30; the end day is clamped only
/// once the start day has reached 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360B;

impl DayCount for Thirty360B {
    fn name(&self) -> &'static str {
        "30B/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        let (y1, m1, mut d1) = components(start);
        let (y2, m2, mut d2) = components(end);

        d1 = d1.min(30);
        if d1 > 29 {
            d2 = d2.min(30);
        }
        if d2 == 31 && (d1 == 30 || d1 == 31) {
            d2 = 30;
        }
        if d1 == 31 {
            d1 = 30;
        }

        Ok(thirty360_fraction(y1, m1, d1, y2, m2, d2))
    }
}

/// 30E/360 (Eurobond) convention: both day components are clamped from
/// 31 to 30 independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360E;

impl DayCount for Thirty360E {
    fn name(&self) -> &'static str {
        "30E/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> CoreResult<f64> {
        check_range(start, end)?;
        let (y1, m1, mut d1) = components(start);
        let (y2, m2, mut d2) = components(end);

        if d1 == 31 {
            d1 = 30;
        }
        if d2 == 31 {
            d2 = 30;
        }

        Ok(thirty360_fraction(y1, m1, d1, y2, m2, d2))
    }
}
