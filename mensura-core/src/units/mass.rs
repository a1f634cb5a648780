//! Mass units, anchored on the kilogram.
//!
//! Factors are [`Linear`](crate::Conversion::Linear) ratios to the kilogram, from the
//! avoirdupois pound (`0.453 592 37 kg` exactly) up to the solar mass.

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of mass units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Kilogram)]
pub enum MassUnit {
    /// The kilogram, SI base unit of mass.
    #[unit(symbol = "kg", ratio = 1.0)]
    Kilogram,
    /// Tonne, `1000 kg`.
    #[unit(symbol = "t", ratio = 1000.0)]
    Tonne,
    /// Gram.
    #[unit(symbol = "g", ratio = 0.001)]
    Gram,
    /// Slug, the imperial engineering mass unit.
    #[unit(symbol = "sl", ratio = 14.59390)]
    Slug,
    /// Avoirdupois pound, `0.453 592 37 kg` exactly.
    #[unit(symbol = "lb", ratio = 0.453_592_37)]
    Pound,
    /// Planck mass.
    #[unit(symbol = "mP", ratio = 2.17643524e-8)]
    PlanckMass,
    /// Solar mass.
    #[unit(symbol = "M☉", ratio = 1.988_47e30)]
    SolarMass,
}

/// A mass, stored in kilograms.
pub type Mass = Quantity<MassUnit>;

crate::impl_quantity_accessors! {
    Mass, MassUnit {
        Kilogram => from_kilograms / kilograms ("kilograms");
        Tonne => from_tonnes / tonnes ("tonnes");
        Gram => from_grams / grams ("grams");
        Slug => from_slugs / slugs ("slugs");
        Pound => from_pounds / pounds ("pounds");
        PlanckMass => from_planck_masses / planck_masses ("Planck masses");
        SolarMass => from_solar_masses / solar_masses ("solar masses");
    }
}
