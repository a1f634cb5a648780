//! Time units, anchored on the second.
//!
//! This dimension's table is written in the [`PerBase`](crate::Conversion::PerBase)
//! direction: each factor states how many of the unit make up one second (`1/3600` for
//! the hour), so accessors multiply and factories divide.

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of time units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Second)]
pub enum TimeUnit {
    /// The second, SI base unit of time.
    #[unit(symbol = "s", per_base = 1.0)]
    Second,
    /// Minute.
    #[unit(symbol = "min", per_base = 1.0 / 60.0)]
    Minute,
    /// Hour.
    #[unit(symbol = "h", per_base = 1.0 / 3600.0)]
    Hour,
    /// Day.
    #[unit(symbol = "days", per_base = 1.0 / 86_400.0)]
    Day,
    /// Week.
    #[unit(symbol = "weeks", per_base = 1.0 / 604_800.0)]
    Week,
}

/// A time, stored in seconds.
pub type Time = Quantity<TimeUnit>;

crate::impl_quantity_accessors! {
    Time, TimeUnit {
        Second => from_seconds / seconds ("seconds");
        Minute => from_minutes / minutes ("minutes");
        Hour => from_hours / hours ("hours");
        Day => from_days / days ("days");
        Week => from_weeks / weeks ("weeks");
    }
}

impl Time {
    /// Creates a time from an hours, minutes and seconds triple.
    ///
    /// The components are not range-checked; `from_hms(0.0, 90.0, 0.0)` is the same
    /// time as `from_hms(1.0, 30.0, 0.0)`.
    pub fn from_hms(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self::from_hours(hours) + Self::from_minutes(minutes) + Self::from_seconds(seconds)
    }
}
