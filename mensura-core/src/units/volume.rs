//! Volume units, anchored on the cubic metre.
//!
//! Factors are [`Linear`](crate::Conversion::Linear) ratios to the cubic metre. The
//! imperial entries follow the UK definitions (the gallon is `4.546 09 L` exactly, with
//! quart, pint, fluid ounce, dram and teaspoon derived from it).

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of volume units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = CubicMeter)]
pub enum VolumeUnit {
    /// The cubic metre.
    #[unit(symbol = "m³", ratio = 1.0)]
    CubicMeter,
    /// Litre, one cubic decimetre.
    #[unit(symbol = "L", ratio = 0.001)]
    Liter,
    /// Imperial fluid ounce.
    #[unit(symbol = "fl oz", ratio = 0.000_028_413_062_5)]
    FluidOunce,
    /// Imperial gallon, `4.546 09 L` exactly.
    #[unit(symbol = "gal", ratio = 0.004_546_09)]
    Gallon,
    /// Imperial quart, a quarter gallon.
    #[unit(symbol = "qt", ratio = 0.001_136_522_5)]
    Quart,
    /// Imperial pint, half a quart.
    #[unit(symbol = "pt", ratio = 0.000_568_261_25)]
    Pint,
    /// Metric teaspoon, `5 mL`.
    #[unit(symbol = "tsp", ratio = 0.000_005)]
    Tsp,
    /// Imperial fluid dram, an eighth of a fluid ounce.
    #[unit(symbol = "dr", ratio = 0.000_003_551_632_812_5)]
    Dram,
    /// Cubic inch.
    #[unit(symbol = "in³", ratio = 0.000_016_387_064)]
    CubicInch,
    /// Cubic yard.
    #[unit(symbol = "yd³", ratio = 0.764_554_857_984)]
    CubicYard,
    /// Dry barrel, `7056 in³` exactly.
    #[unit(symbol = "barrel", ratio = 0.115_627_123_584)]
    Barrel,
}

/// A volume, stored in cubic metres.
pub type Volume = Quantity<VolumeUnit>;

crate::impl_quantity_accessors! {
    Volume, VolumeUnit {
        CubicMeter => from_cubic_meters / cubic_meters ("cubic metres");
        Liter => from_liters / liters ("litres");
        FluidOunce => from_fluid_ounces / fluid_ounces ("fluid ounces");
        Gallon => from_gallons / gallons ("gallons");
        Quart => from_quarts / quarts ("quarts");
        Pint => from_pints / pints ("pints");
        Tsp => from_teaspoons / teaspoons ("teaspoons");
        Dram => from_drams / drams ("drams");
        CubicInch => from_cubic_inches / cubic_inches ("cubic inches");
        CubicYard => from_cubic_yards / cubic_yards ("cubic yards");
        Barrel => from_barrels / barrels ("barrels");
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn cubic_meters_are_stored_verbatim() {
        let volume = Volume::from_cubic_meters(1.5);
        assert_eq!(volume.value(), 1.5);
        assert_eq!(volume.cubic_meters(), 1.5);
    }

    #[test]
    fn liter_is_a_cubic_decimetre() {
        assert_eq!(Volume::from_liters(1.0).value(), 0.001);
        assert_eq!(Volume::from_liters(1000.0), Volume::from_cubic_meters(1.0));
    }

    #[test]
    fn imperial_ladder_is_consistent() {
        assert_eq!(Volume::from_quarts(4.0), Volume::from_gallons(1.0));
        assert_eq!(Volume::from_pints(2.0), Volume::from_quarts(1.0));
        assert_eq!(Volume::from_drams(8.0), Volume::from_fluid_ounces(1.0));
        assert_relative_eq!(Volume::from_gallons(1.0).liters(), 4.546_09, max_relative = 1e-12);
        assert_eq!(Volume::from_barrels(1.0).cubic_inches(), 7056.0);
        assert_relative_eq!(
            Volume::from_barrels(1.0).gallons(),
            25.434_411,
            max_relative = 1e-7
        );
    }

    #[test]
    fn default_rendering_per_unit() {
        for (unit, symbol) in [
            (VolumeUnit::CubicMeter, "m³"),
            (VolumeUnit::Liter, "L"),
            (VolumeUnit::FluidOunce, "fl oz"),
            (VolumeUnit::Gallon, "gal"),
            (VolumeUnit::Quart, "qt"),
            (VolumeUnit::Pint, "pt"),
            (VolumeUnit::Tsp, "tsp"),
            (VolumeUnit::Dram, "dr"),
            (VolumeUnit::CubicInch, "in³"),
            (VolumeUnit::CubicYard, "yd³"),
            (VolumeUnit::Barrel, "barrel"),
        ] {
            let volume = Volume::from_unit(123.456, unit);
            assert_eq!(volume.format(unit), format!("123.46 {symbol}"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_gallons(value in 1e-6..1e6f64) {
            let back = Volume::from_gallons(value).gallons();
            prop_assert!((back - value).abs() < 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn prop_pint_gallon_ratio(value in 1e-6..1e6f64) {
            let volume = Volume::from_gallons(value);
            prop_assert!((volume.pints() / volume.gallons() - 8.0).abs() < 1e-9);
        }
    }
}
