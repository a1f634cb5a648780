//! Typed physical quantities over `f64`, with table-driven conversions and
//! culture-aware formatting.
//!
//! # What this crate solves
//!
//! - **Dimension safety**: [`Quantity<U>`](Quantity) is parameterised by a per-dimension
//!   unit enumeration, so lengths, masses and times are distinct types and mixing them
//!   in arithmetic or comparisons is a compile error.
//! - **Canonical storage**: every quantity stores one `f64` in its dimension's base
//!   unit (metres, kilograms, seconds, …). Constructors convert in, accessors convert
//!   out, and equality and hashing act on the stored magnitude alone.
//! - **Readable output**: the `format` method family renders a quantity in any of its
//!   units through a [`Template`] (`"{value} {symbol}"` with two fraction digits by
//!   default) and a [`Culture`] deciding the decimal separator.
//!
//! # What it does not
//!
//! - No dimensional algebra: multiplying a length by a length does not produce an area.
//! - No range validation: NaN, infinities and physically impossible magnitudes pass
//!   through by IEEE 754 rules.
//! - No parsing of quantities back out of strings.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::length::{Length, LengthUnit};
//! use mensura_core::Culture;
//!
//! let distance = Length::from_meters(123.456);
//! assert_eq!(distance.to_string(), "123.46 m");
//! assert_eq!(distance.format(LengthUnit::Inch), "4860.47 in");
//!
//! let dutch = Culture::named("nl-NL")?;
//! assert_eq!(distance.format_localized(LengthUnit::Meter, &dutch), "123,46 m");
//! # Ok::<(), mensura_core::CultureError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde` (off by default): `Serialize`/`Deserialize` for [`Quantity`] as a bare
//!   `f64` in the base unit, plus a tagged `serde_with_unit` field adapter.
//!
//! # Panics and errors
//!
//! Conversions and arithmetic never panic; formatting allocates only the output
//! `String`. Fallible construction is limited to [`Culture`] (BCP-47 parsing and
//! locale-data lookup) and [`Template`] parsing, reported through [`CultureError`]
//! and [`TemplateError`].
//!
//! # SemVer
//!
//! Pre-`1.0`: breaking changes arrive with a minor version bump.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod format;
mod macros;
mod quantity;
mod unit;
pub mod units;

pub use format::{Culture, CultureError, Template, TemplateError};
#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;
pub use quantity::Quantity;
pub use unit::{Conversion, Unit};
pub use units::{area, current, length, mass, pressure, temperature, time, volume};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
