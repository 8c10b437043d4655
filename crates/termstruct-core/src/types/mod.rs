//! Core domain types.

mod calendar_id;
mod date;
mod frequency;
mod region;

pub use calendar_id::CalendarId;
pub use date::Date;
pub use frequency::{Compounding, Frequency};
pub use region::{Currency, Region};

pub(crate) use region::choices;
