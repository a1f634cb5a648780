//! Pressure units, anchored on the pascal.
//!
//! Like [`time`](crate::time), the table is written in the
//! [`PerBase`](crate::Conversion::PerBase) direction: each factor states how many of
//! the unit correspond to one pascal.

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of pressure units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Pascal)]
pub enum PressureUnit {
    /// The pascal, SI derived unit of pressure.
    #[unit(symbol = "Pa", per_base = 1.0)]
    Pascal,
    /// Technical atmosphere.
    #[unit(symbol = "atm", per_base = 0.000_010_197_162)]
    Atmosphere,
    /// Bar, `100 000 Pa`.
    #[unit(symbol = "bar", per_base = 0.000_01)]
    Bar,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", per_base = 0.000_145_037_737_73)]
    Psi,
    /// Torr, close to one millimetre of mercury.
    #[unit(symbol = "Torr", per_base = 0.007_500_616_9)]
    Torr,
}

/// A pressure, stored in pascals.
pub type Pressure = Quantity<PressureUnit>;

crate::impl_quantity_accessors! {
    Pressure, PressureUnit {
        Pascal => from_pascals / pascals ("pascals");
        Atmosphere => from_atmospheres / atmospheres ("atmospheres");
        Bar => from_bars / bars ("bars");
        Psi => from_psi / psi ("pounds per square inch");
        Torr => from_torr / torr ("torr");
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn pascals_are_stored_verbatim() {
        let pressure = Pressure::from_pascals(1.5);
        assert_eq!(pressure.value(), 1.5);
        assert_eq!(pressure.pascals(), 1.5);
    }

    #[test]
    fn ten_pascals_in_every_unit() {
        let pressure = Pressure::from_pascals(10.0);
        assert_abs_diff_eq!(pressure.bars(), 0.0001, epsilon = 1e-10);
        assert_abs_diff_eq!(pressure.psi(), 0.0014503773773, epsilon = 1e-10);
        assert_abs_diff_eq!(pressure.atmospheres(), 0.00010197162, epsilon = 1e-10);
        assert_abs_diff_eq!(pressure.torr(), 0.075006169, epsilon = 1e-10);
    }

    #[test]
    fn factories_divide_by_the_table_factor() {
        assert_relative_eq!(Pressure::from_bars(2.0).value(), 200_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            Pressure::from_atmospheres(1.0).value(),
            98_066.5,
            max_relative = 1e-7
        );
        assert_eq!(
            Pressure::from_unit(2.0, PressureUnit::Bar),
            Pressure::from_bars(2.0)
        );
    }

    #[test]
    fn default_rendering_per_unit() {
        for (unit, symbol) in [
            (PressureUnit::Pascal, "Pa"),
            (PressureUnit::Atmosphere, "atm"),
            (PressureUnit::Bar, "bar"),
            (PressureUnit::Psi, "psi"),
            (PressureUnit::Torr, "Torr"),
        ] {
            let pressure = Pressure::from_unit(123.456, unit);
            assert_eq!(pressure.format(unit), format!("123.46 {symbol}"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_psi(value in 1e-6..1e6f64) {
            let back = Pressure::from_psi(value).psi();
            prop_assert!((back - value).abs() < 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn prop_bar_pascal_ratio(value in 1e-6..1e6f64) {
            let pressure = Pressure::from_bars(value);
            prop_assert!((pressure.pascals() / pressure.bars() - 100_000.0).abs() < 1e-9);
        }
    }
}
