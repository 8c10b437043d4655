//! # Termstruct Core
//!
//! Core types, conventions, and calendars for the Termstruct fixed income
//! library.
//!
//! This crate provides the foundational building blocks used throughout
//! Termstruct:
//!
//! - **Types**: Domain types like [`types::Date`], [`types::Region`],
//!   [`types::Compounding`], [`types::Frequency`]
//! - **Day Count Conventions**: Year fraction calculations between dates
//! - **Business Day Calendars**: The injected "is this a business day" oracle
//!
//! ## Design Philosophy
//!
//! - Closed enumerations with string lookup that fails listing every valid
//!   member
//! - Region-specific defaults as total mapping tables, not scattered branches
//! - Explicit `Result` returns at every fallible boundary

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{Calendar, HolidayCalendar, WeekendCalendar};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{CalendarId, Compounding, Currency, Date, Frequency, Region};
}

pub use error::{CoreError, CoreResult};
pub use types::Date;
