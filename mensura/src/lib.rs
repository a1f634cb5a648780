//! Strongly typed physical quantities with culture-aware formatting.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the full API
//! from `mensura-core`: the generic [`Quantity`] type, eight predefined dimensions
//! (length, mass, time, area, volume, pressure, temperature, electric current), and
//! the [`Culture`]/[`Template`] formatting pair.
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is the dimension's
//! unit enumeration. The magnitude is a single `f64` stored in the dimension's base
//! unit; named constructors convert in, named accessors convert out.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to kilograms).
//! - Keeps every conversion factor in one audited table per dimension.
//! - Renders quantities for people: `"123.46 m"`, `"123,46 bar"` under a Dutch
//!   locale, or any custom `{value}`/`{symbol}` template.
//!
//! # What this crate does not try to solve
//!
//! - Dimensional algebra (dividing a length by a time does not yield a velocity type).
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Parsing quantities back out of strings.
//!
//! # Quick start
//!
//! ```rust
//! use mensura::{Length, LengthUnit};
//!
//! let distance = Length::from_meters(123.456);
//! assert_eq!(distance.to_string(), "123.46 m");
//! assert_eq!(distance.format(LengthUnit::Inch), "4860.47 in");
//! ```
//!
//! Localized output goes through a [`Culture`]:
//!
//! ```rust
//! use mensura::{Culture, Pressure, PressureUnit};
//!
//! let dutch = Culture::named("nl-NL")?;
//! let p = Pressure::from_bars(123.456);
//! assert_eq!(p.format_localized(PressureUnit::Bar, &dutch), "123,46 bar");
//! # Ok::<(), mensura::CultureError>(())
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Length, Mass};
//!
//! let d = Length::from_meters(1.0);
//! let m = Mass::from_kilograms(1.0);
//! let _ = d + m; // cannot add different dimensions
//! ```
//!
//! # Modules
//!
//! Dimensions are grouped under modules (also re-exported at the crate root for
//! convenience):
//!
//! - `mensura::length` (metres, inches, miles, light years, …)
//! - `mensura::mass` (kilograms, pounds, solar masses, …)
//! - `mensura::time` (seconds through weeks, plus `from_hms`)
//! - `mensura::area` (square metres, acres, barns, …)
//! - `mensura::volume` (cubic metres, litres, imperial gallons, …)
//! - `mensura::pressure` (pascals, bars, psi, …)
//! - `mensura::temperature` (kelvin plus seven historical scales)
//! - `mensura::current` (amperes)
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support for `Quantity<U>`; serialization is the raw
//!   `f64` base magnitude, with an opt-in `serde_with_unit` tagged adapter.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic are pure `f64` computations; they do not panic on their
//! own, but they follow IEEE-754 behavior (NaN and infinities propagate according to
//! the underlying operation). The only fallible entry points are [`Culture`]
//! construction and [`Template`] parsing.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions
//! until `1.0`.
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to implement the `Unit` trait for unit
/// enumerations.
///
/// The expansion refers to `crate::Unit` and `crate::Conversion`, so it is intended
/// for use inside `mensura-core` (or crates exposing the same crate-root API). Most
/// users should not need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::area;
pub use mensura_core::units::current;
pub use mensura_core::units::length;
pub use mensura_core::units::mass;
pub use mensura_core::units::pressure;
pub use mensura_core::units::temperature;
pub use mensura_core::units::time;
pub use mensura_core::units::volume;

pub use mensura_core::units::area::*;
pub use mensura_core::units::current::*;
pub use mensura_core::units::length::*;
pub use mensura_core::units::mass::*;
pub use mensura_core::units::pressure::*;
pub use mensura_core::units::temperature::*;
pub use mensura_core::units::time::*;
pub use mensura_core::units::volume::*;
