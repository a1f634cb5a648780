//! Per-dimension unit enumerations and quantity aliases.
//!
//! Each submodule defines one dimension: its unit enumeration (deriving
//! [`Unit`](crate::Unit)), a `Quantity` alias stored in the dimension's base unit, and
//! named `from_<unit>` / `<unit>()` conversions for every member of the enumeration.

pub mod area;
pub mod current;
pub mod length;
pub mod mass;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod volume;
