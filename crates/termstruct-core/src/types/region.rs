//! Region and currency enumerations.
//!
//! These are closed enumerations with an associated display string and a
//! lookup-by-string constructor. Region-specific defaults for currency and
//! calendar are total mapping tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::CalendarId;

/// Market region a curve or instrument belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// United States
    UnitedStates,
    /// European Union
    EuropeanUnion,
    /// Japan
    Japan,
    /// China
    China,
    /// United Kingdom
    UnitedKingdom,
    /// Canada
    Canada,
}

impl Region {
    /// Returns the display name of the region.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Region::UnitedStates => "United States",
            Region::EuropeanUnion => "European Union",
            Region::Japan => "Japan",
            Region::China => "China",
            Region::UnitedKingdom => "United Kingdom",
            Region::Canada => "Canada",
        }
    }

    /// Returns all regions.
    #[must_use]
    pub fn all() -> &'static [Region] {
        &[
            Region::UnitedStates,
            Region::EuropeanUnion,
            Region::Japan,
            Region::China,
            Region::UnitedKingdom,
            Region::Canada,
        ]
    }

    /// Returns the default currency for the region.
    #[must_use]
    pub fn default_currency(&self) -> Currency {
        match self {
            Region::UnitedStates => Currency::Usd,
            Region::EuropeanUnion => Currency::Eur,
            Region::Japan => Currency::Jpy,
            Region::China => Currency::Cny,
            Region::UnitedKingdom => Currency::Gbp,
            Region::Canada => Currency::Cad,
        }
    }

    /// Returns the default trading calendar for the region.
    ///
    /// Regions without a dedicated market calendar fall back to the
    /// weekend-only calendar.
    #[must_use]
    pub fn default_calendar(&self) -> CalendarId {
        match self {
            Region::UnitedStates => CalendarId::UnitedStates,
            Region::EuropeanUnion => CalendarId::EuropeanUnion,
            Region::Japan => CalendarId::Japan,
            Region::UnitedKingdom => CalendarId::UnitedKingdom,
            Region::China | Region::Canada => CalendarId::WeekendOnly,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Region {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::all()
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| CoreError::invalid_enum_value("region", s, choices(Region::all())))
    }
}

/// Settlement currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// United States Dollar
    Usd,
    /// Euro
    Eur,
    /// Japanese Yen
    Jpy,
    /// Chinese Yuan
    Cny,
    /// British Pound
    Gbp,
    /// Canadian Dollar
    Cad,
}

impl Currency {
    /// Returns the display name of the currency.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::Usd => "United States Dollar",
            Currency::Eur => "Euro",
            Currency::Jpy => "Japanese Yen",
            Currency::Cny => "Chinese Yuan",
            Currency::Gbp => "British Pound",
            Currency::Cad => "Canadian Dollar",
        }
    }

    /// Returns the ISO 4217 code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
        }
    }

    /// Returns all currencies.
    #[must_use]
    pub fn all() -> &'static [Currency] {
        &[
            Currency::Usd,
            Currency::Eur,
            Currency::Jpy,
            Currency::Cny,
            Currency::Gbp,
            Currency::Cad,
        ]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Currency::all()
            .iter()
            .find(|c| c.name().eq_ignore_ascii_case(input) || c.code().eq_ignore_ascii_case(input))
            .copied()
            .ok_or_else(|| CoreError::invalid_enum_value("currency", s, choices(Currency::all())))
    }
}

/// Joins display names into the comma-separated choice list used in
/// `InvalidEnumValue` messages.
pub(crate) fn choices<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_from_str() {
        assert_eq!("United States".parse::<Region>().unwrap(), Region::UnitedStates);
        assert_eq!("japan".parse::<Region>().unwrap(), Region::Japan);
    }

    #[test]
    fn test_region_from_str_invalid_lists_choices() {
        let err = "Atlantis".parse::<Region>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Atlantis"));
        assert!(msg.contains("United States"));
        assert!(msg.contains("Canada"));
    }

    #[test]
    fn test_default_currency_total() {
        for region in Region::all() {
            // every region resolves to a currency and a calendar
            let _ = region.default_currency();
            let _ = region.default_calendar();
        }
        assert_eq!(Region::UnitedStates.default_currency(), Currency::Usd);
        assert_eq!(Region::UnitedKingdom.default_currency(), Currency::Gbp);
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!("USD".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("Euro".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("XAU".parse::<Currency>().is_err());
    }
}
