//! Payment schedule generation and business-day adjustment.

use termstruct_core::calendars::Calendar;
use termstruct_core::daycounts::DayCountConvention;
use termstruct_core::types::{Date, Frequency};

use crate::error::{InstrumentError, InstrumentResult};

/// Generates raw payment dates between a valuation date and maturity.
///
/// Dates are anchored to maturity: the generator steps backward one period
/// at a time, preserving maturity's day-of-month (clamped to month length
/// where necessary), and keeps every date strictly after the valuation
/// date. The result is strictly increasing and ends at maturity.
///
/// When the interval is not a whole number of periods, the first period is
/// a short stub; no stub adjustment is applied.
///
/// # Errors
///
/// `InvalidTerms` if maturity is not strictly after the valuation date.
pub fn generate_payment_dates(
    valuation_date: Date,
    maturity_date: Date,
    frequency: Frequency,
) -> InstrumentResult<Vec<Date>> {
    if maturity_date <= valuation_date {
        return Err(InstrumentError::invalid_terms(format!(
            "maturity {maturity_date} must be after valuation date {valuation_date}"
        )));
    }

    let mut dates = Vec::new();
    let mut step: i32 = 0;
    loop {
        let date = match frequency.months_per_period() {
            Some(months) => maturity_date.add_months(-step * months as i32)?,
            None => maturity_date.add_days(i64::from(-step) * 7),
        };
        if date <= valuation_date {
            break;
        }
        dates.push(date);
        step += 1;
    }

    dates.reverse();
    validate_schedule(&dates)?;
    Ok(dates)
}

/// Checks that a raw payment schedule is non-empty and strictly increasing.
///
/// Every schedule produced by [`generate_payment_dates`] must satisfy this;
/// callers assembling schedules by other means can use it as the same gate.
///
/// # Errors
///
/// `InvalidSchedule` describing the first defect found.
pub fn validate_schedule(dates: &[Date]) -> InstrumentResult<()> {
    if dates.is_empty() {
        return Err(InstrumentError::invalid_schedule(
            "schedule contains no payment dates",
        ));
    }
    for window in dates.windows(2) {
        if window[1] <= window[0] {
            return Err(InstrumentError::invalid_schedule(format!(
                "payment dates out of order: {} does not follow {}",
                window[1], window[0]
            )));
        }
    }
    Ok(())
}

/// Rolls each date forward to the nearest valid business day.
///
/// Valid dates are kept as-is; invalid ones are replaced with the earliest
/// business day strictly after them. Rolling may collapse two adjacent
/// schedule dates onto the same business day; that is accepted rather than
/// reordered.
#[must_use]
pub fn business_day_adjust(dates: &[Date], calendar: &dyn Calendar) -> Vec<Date> {
    dates
        .iter()
        .map(|&date| {
            if calendar.is_business_day(date) {
                date
            } else {
                calendar.next_business_day(date)
            }
        })
        .collect()
}

/// Converts payment dates into year fractions from the valuation date.
pub fn payment_times(
    dates: &[Date],
    valuation_date: Date,
    convention: DayCountConvention,
) -> InstrumentResult<Vec<f64>> {
    dates
        .iter()
        .map(|&date| {
            convention
                .year_fraction(valuation_date, date)
                .map_err(InstrumentError::from)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use termstruct_core::calendars::WeekendCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_quarterly_whole_year() {
        let dates = generate_payment_dates(
            date(2024, 1, 15),
            date(2025, 1, 15),
            Frequency::Quarterly,
        )
        .unwrap();

        assert_eq!(
            dates,
            vec![
                date(2024, 4, 15),
                date(2024, 7, 15),
                date(2024, 10, 15),
                date(2025, 1, 15),
            ]
        );
    }

    #[test]
    fn test_semiannual_with_stub() {
        // 16 months of term leaves a 4-month stub at the front
        let dates = generate_payment_dates(
            date(2024, 1, 10),
            date(2025, 5, 20),
            Frequency::SemiAnnual,
        )
        .unwrap();

        assert_eq!(
            dates,
            vec![date(2024, 5, 20), date(2024, 11, 20), date(2025, 5, 20)]
        );
    }

    #[test]
    fn test_month_end_day_preserved_with_clamping() {
        // maturity on the 31st clamps in shorter months
        let dates = generate_payment_dates(
            date(2024, 10, 15),
            date(2025, 3, 31),
            Frequency::Monthly,
        )
        .unwrap();

        assert_eq!(
            dates,
            vec![
                date(2024, 10, 31),
                date(2024, 11, 30),
                date(2024, 12, 31),
                date(2025, 1, 31),
                date(2025, 2, 28),
                date(2025, 3, 31),
            ]
        );
    }

    #[test]
    fn test_weekly_steps_by_seven_days() {
        let dates = generate_payment_dates(
            date(2025, 1, 1),
            date(2025, 1, 29),
            Frequency::Weekly,
        )
        .unwrap();

        assert_eq!(
            dates,
            vec![
                date(2025, 1, 8),
                date(2025, 1, 15),
                date(2025, 1, 22),
                date(2025, 1, 29),
            ]
        );
    }

    #[test]
    fn test_strictly_increasing_and_ends_at_maturity() {
        let maturity = date(2030, 6, 30);
        let dates =
            generate_payment_dates(date(2025, 1, 13), maturity, Frequency::SemiAnnual).unwrap();

        assert_eq!(*dates.last().unwrap(), maturity);
        for window in dates.windows(2) {
            assert!(window[0] < window[1]);
        }
    }

    #[test]
    fn test_maturity_before_valuation_rejected() {
        let result =
            generate_payment_dates(date(2025, 1, 15), date(2024, 1, 15), Frequency::Annual);
        assert!(matches!(result, Err(InstrumentError::InvalidTerms { .. })));
    }

    #[test]
    fn test_validate_schedule_rejects_empty() {
        let result = validate_schedule(&[]);
        assert!(matches!(result, Err(InstrumentError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_validate_schedule_rejects_out_of_order_dates() {
        let result = validate_schedule(&[date(2025, 7, 15), date(2025, 4, 15), date(2025, 10, 15)]);
        let err = result.unwrap_err();
        assert!(matches!(err, InstrumentError::InvalidSchedule { .. }));
        assert!(err.to_string().contains("2025-04-15"));
    }

    #[test]
    fn test_validate_schedule_rejects_duplicate_dates() {
        let result = validate_schedule(&[date(2025, 4, 15), date(2025, 4, 15)]);
        assert!(matches!(result, Err(InstrumentError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_generated_schedule_passes_validation() {
        let dates = generate_payment_dates(
            date(2024, 10, 15),
            date(2025, 3, 31),
            Frequency::Monthly,
        )
        .unwrap();
        assert!(validate_schedule(&dates).is_ok());
    }

    #[test]
    fn test_weekend_rolls_forward() {
        // 2025-06-15 is a Sunday
        let calendar = WeekendCalendar;
        let adjusted = business_day_adjust(&[date(2025, 6, 13), date(2025, 6, 15)], &calendar);
        assert_eq!(adjusted, vec![date(2025, 6, 13), date(2025, 6, 16)]);
    }

    #[test]
    fn test_payment_times_act365() {
        let times = payment_times(
            &[date(2025, 7, 13), date(2026, 1, 13)],
            date(2025, 1, 13),
            DayCountConvention::Act365,
        )
        .unwrap();

        assert_relative_eq!(times[0], 181.0 / 365.0, epsilon = 1e-12);
        assert_relative_eq!(times[1], 365.0 / 365.0, epsilon = 1e-12);
    }
}
