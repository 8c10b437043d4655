//! Calendar identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::calendars::{Calendar, WeekendCalendar};
use crate::error::CoreError;
use crate::types::region::choices;

/// Identifier for a trading calendar.
///
/// The identifier names which market's business-day oracle applies. Holiday
/// data itself is injected (see [`crate::calendars::HolidayCalendar`]);
/// resolving an identifier without injected data falls back to the
/// weekend-only calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CalendarId {
    /// NYSE trading calendar
    UnitedStates,
    /// TARGET2 trading calendar
    EuropeanUnion,
    /// JPX trading calendar
    Japan,
    /// LSE trading calendar
    UnitedKingdom,
    /// Saturdays and Sundays only, no market holidays
    #[default]
    WeekendOnly,
}

impl CalendarId {
    /// Returns the display name of the calendar.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CalendarId::UnitedStates => "NYSE",
            CalendarId::EuropeanUnion => "TARGET2",
            CalendarId::Japan => "JPX",
            CalendarId::UnitedKingdom => "LSE",
            CalendarId::WeekendOnly => "Weekend Only",
        }
    }

    /// Returns all calendar identifiers.
    #[must_use]
    pub fn all() -> &'static [CalendarId] {
        &[
            CalendarId::UnitedStates,
            CalendarId::EuropeanUnion,
            CalendarId::Japan,
            CalendarId::UnitedKingdom,
            CalendarId::WeekendOnly,
        ]
    }

    /// Resolves the identifier to a business-day oracle.
    ///
    /// Without injected holiday data every market resolves to the
    /// weekend-only calendar.
    #[must_use]
    pub fn to_calendar(&self) -> Box<dyn Calendar> {
        Box::new(WeekendCalendar)
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CalendarId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarId::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CoreError::invalid_enum_value("calendar", s, choices(CalendarId::all())))
    }
}
