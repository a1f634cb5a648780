//! Length units, anchored on the metre.
//!
//! Every factor is [`Linear`](crate::Conversion::Linear) and states how many metres make
//! up one of the unit. Exact legal definitions are used where they exist (the
//! international inch and its multiples, the astronomical unit); the light year and
//! parsec carry rounded reference constants.
//!
//! # Quick start
//!
//! ```rust
//! use mensura_core::length::Length;
//!
//! let marathon = Length::from_meters(42_195.0);
//! assert!((marathon.miles() - 26.218_757).abs() < 1e-4);
//! ```

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of length units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Meter)]
pub enum LengthUnit {
    /// The metre, SI base unit of length.
    #[unit(symbol = "m", ratio = 1.0)]
    Meter,
    /// International inch, `0.0254 m` exactly.
    #[unit(symbol = "in", ratio = 0.0254)]
    Inch,
    /// International foot, twelve inches.
    #[unit(symbol = "ft", ratio = 12.0 * 0.0254)]
    Foot,
    /// International yard, thirty-six inches.
    #[unit(symbol = "yd", ratio = 36.0 * 0.0254)]
    Yard,
    /// Statute mile, 63 360 inches.
    #[unit(symbol = "mi", ratio = 63_360.0 * 0.0254)]
    Mile,
    /// Light year.
    #[unit(symbol = "ly", ratio = 9.4607e15)]
    LightYear,
    /// Astronomical unit, `149 597 870 700 m` exactly.
    #[unit(symbol = "au", ratio = 149_597_870_700.0)]
    AstronomicalUnit,
    /// Parsec.
    #[unit(symbol = "pc", ratio = 3.0857e16)]
    Parsec,
    /// Furlong, 220 yards.
    #[unit(symbol = "fur", ratio = 201.168)]
    Furlong,
}

/// A length, stored in metres.
pub type Length = Quantity<LengthUnit>;

crate::impl_quantity_accessors! {
    Length, LengthUnit {
        Meter => from_meters / meters ("metres");
        Inch => from_inches / inches ("inches");
        Foot => from_feet / feet ("feet");
        Yard => from_yards / yards ("yards");
        Mile => from_miles / miles ("miles");
        LightYear => from_light_years / light_years ("light years");
        AstronomicalUnit => from_astronomical_units / astronomical_units ("astronomical units");
        Parsec => from_parsecs / parsecs ("parsecs");
        Furlong => from_furlongs / furlongs ("furlongs");
    }
}
