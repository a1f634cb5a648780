//! Area units, anchored on the square metre.
//!
//! The table is written in the [`PerBase`](crate::Conversion::PerBase) direction:
//! factories divide by the listed factor and accessors multiply by it. The per-unit
//! round-trip (`from_acres(x).acres() == x`) holds for every entry.

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of area units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = SquareMeter)]
pub enum AreaUnit {
    /// The square metre.
    #[unit(symbol = "m²", per_base = 1.0)]
    SquareMeter,
    /// Square foot.
    #[unit(symbol = "ft²", per_base = 0.092_903_04)]
    SquareFoot,
    /// Square yard.
    #[unit(symbol = "yd²", per_base = 0.836_127_36)]
    SquareYard,
    /// Square mile.
    #[unit(symbol = "ml²", per_base = 2_589_988.110_336)]
    SquareMile,
    /// Square inch.
    #[unit(symbol = "in²", per_base = 0.000_645_16)]
    SquareInch,
    /// Are, one hundred square metres.
    #[unit(symbol = "are", per_base = 100.0)]
    Are,
    /// Acre.
    #[unit(symbol = "acre", per_base = 4_046.856_422_4)]
    Acre,
    /// Barn, used for nuclear cross sections.
    #[unit(symbol = "b", per_base = 10e-28)]
    Barn,
}

/// An area, stored in square metres.
pub type Area = Quantity<AreaUnit>;

crate::impl_quantity_accessors! {
    Area, AreaUnit {
        SquareMeter => from_square_meters / square_meters ("square metres");
        SquareFoot => from_square_feet / square_feet ("square feet");
        SquareYard => from_square_yards / square_yards ("square yards");
        SquareMile => from_square_miles / square_miles ("square miles");
        SquareInch => from_square_inches / square_inches ("square inches");
        Are => from_ares / ares ("ares");
        Acre => from_acres / acres ("acres");
        Barn => from_barns / barns ("barns");
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn square_meters_are_stored_verbatim() {
        let area = Area::from_square_meters(1.5);
        assert_eq!(area.value(), 1.5);
        assert_eq!(area.square_meters(), 1.5);
    }

    #[test]
    fn every_unit_roundtrips() {
        assert_relative_eq!(Area::from_square_feet(1.5).square_feet(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(Area::from_square_yards(1.5).square_yards(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(Area::from_square_miles(1.5).square_miles(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(
            Area::from_square_inches(1.5).square_inches(),
            1.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(Area::from_ares(1.5).ares(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(Area::from_acres(1.5).acres(), 1.5, max_relative = 1e-12);
        assert_relative_eq!(Area::from_barns(1.5).barns(), 1.5, max_relative = 1e-12);
    }

    #[test]
    fn table_direction_divides_on_construction() {
        assert_eq!(Area::from_acres(1.0).value(), 1.0 / 4_046.856_422_4);
        assert_eq!(Area::from_ares(1.0).value(), 0.01);
        assert_eq!(Area::from_barns(1.0).value(), 1.0 / 10e-28);
    }

    #[test]
    fn default_rendering_per_unit() {
        for (unit, symbol) in [
            (AreaUnit::SquareMeter, "m²"),
            (AreaUnit::SquareFoot, "ft²"),
            (AreaUnit::SquareYard, "yd²"),
            (AreaUnit::SquareMile, "ml²"),
            (AreaUnit::SquareInch, "in²"),
            (AreaUnit::Are, "are"),
            (AreaUnit::Acre, "acre"),
            (AreaUnit::Barn, "b"),
        ] {
            let area = Area::from_unit(123.456, unit);
            assert_eq!(area.format(unit), format!("123.46 {symbol}"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_acres(value in 1e-6..1e6f64) {
            let back = Area::from_acres(value).acres();
            prop_assert!((back - value).abs() < 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_barns(value in 1e-6..1e6f64) {
            let back = Area::from_barns(value).barns();
            prop_assert!((back - value).abs() < 1e-9 * value.abs().max(1.0));
        }
    }
}
