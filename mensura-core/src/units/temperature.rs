//! Temperature scales, anchored on the kelvin.
//!
//! Temperature is the one dimension whose conversions carry an offset, so each scale
//! uses an [`Affine`](crate::Conversion::Affine) function pair through kelvin instead
//! of a single factor. The function pairs sit directly above the enumeration.

use mensura_derive::Unit;

use crate::Quantity;

/// Melting point of water in kelvins, the offset shared by most scales.
const WATER_MELTING_POINT: f64 = 273.15;

fn celsius_to_kelvin(c: f64) -> f64 {
    c + WATER_MELTING_POINT
}

fn kelvin_to_celsius(k: f64) -> f64 {
    k - WATER_MELTING_POINT
}

fn fahrenheit_to_kelvin(f: f64) -> f64 {
    (f + 459.67) * 5.0 / 9.0
}

fn kelvin_to_fahrenheit(k: f64) -> f64 {
    k * 9.0 / 5.0 - 459.67
}

fn rankine_to_kelvin(r: f64) -> f64 {
    r * 5.0 / 9.0
}

fn kelvin_to_rankine(k: f64) -> f64 {
    k * 9.0 / 5.0
}

// The Delisle scale runs backwards: larger values are colder.
fn delisle_to_kelvin(d: f64) -> f64 {
    (100.0 + WATER_MELTING_POINT) - d * 2.0 / 3.0
}

fn kelvin_to_delisle(k: f64) -> f64 {
    (100.0 + WATER_MELTING_POINT - k) * 1.5
}

fn newton_to_kelvin(n: f64) -> f64 {
    n * 100.0 / 33.0 + WATER_MELTING_POINT
}

fn kelvin_to_newton(k: f64) -> f64 {
    (k - WATER_MELTING_POINT) * 33.0 / 100.0
}

fn reaumur_to_kelvin(re: f64) -> f64 {
    re * 5.0 / 4.0 + WATER_MELTING_POINT
}

fn kelvin_to_reaumur(k: f64) -> f64 {
    (k - WATER_MELTING_POINT) * 4.0 / 5.0
}

fn romer_to_kelvin(ro: f64) -> f64 {
    (ro - 7.5) * 40.0 / 21.0 + WATER_MELTING_POINT
}

fn kelvin_to_romer(k: f64) -> f64 {
    (k - WATER_MELTING_POINT) * 21.0 / 40.0 + 7.5
}

/// Enumeration of temperature scales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Kelvin)]
pub enum TemperatureUnit {
    /// The kelvin, SI base unit of thermodynamic temperature.
    #[unit(symbol = "K", ratio = 1.0)]
    Kelvin,
    /// Degree Celsius.
    #[unit(symbol = "°C", to_base = celsius_to_kelvin, from_base = kelvin_to_celsius)]
    Celsius,
    /// Degree Fahrenheit.
    #[unit(symbol = "°F", to_base = fahrenheit_to_kelvin, from_base = kelvin_to_fahrenheit)]
    Fahrenheit,
    /// Degree Rankine, the absolute Fahrenheit scale.
    #[unit(symbol = "°R", to_base = rankine_to_kelvin, from_base = kelvin_to_rankine)]
    Rankine,
    /// Degree Delisle.
    #[unit(symbol = "°D", to_base = delisle_to_kelvin, from_base = kelvin_to_delisle)]
    Delisle,
    /// Degree Newton.
    #[unit(symbol = "°N", to_base = newton_to_kelvin, from_base = kelvin_to_newton)]
    Newton,
    /// Degree Réaumur.
    #[unit(symbol = "°Ré", to_base = reaumur_to_kelvin, from_base = kelvin_to_reaumur)]
    Reaumur,
    /// Degree Rømer.
    #[unit(symbol = "°Rø", to_base = romer_to_kelvin, from_base = kelvin_to_romer)]
    Romer,
}

/// A temperature, stored in kelvins.
pub type Temperature = Quantity<TemperatureUnit>;

crate::impl_quantity_accessors! {
    Temperature, TemperatureUnit {
        Kelvin => from_kelvin / kelvin ("kelvins");
        Celsius => from_celsius / celsius ("degrees Celsius");
        Fahrenheit => from_fahrenheit / fahrenheit ("degrees Fahrenheit");
        Rankine => from_rankine / rankine ("degrees Rankine");
        Delisle => from_delisle / delisle ("degrees Delisle");
        Newton => from_newton / newton ("degrees Newton");
        Reaumur => from_reaumur / reaumur ("degrees Réaumur");
        Romer => from_romer / romer ("degrees Rømer");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    use super::*;

    const EPS: f64 = 1e-13;

    fn hash_of(t: Temperature) -> u64 {
        let mut hasher = DefaultHasher::new();
        t.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn kelvins_are_stored_verbatim() {
        let t = Temperature::from_kelvin(273.15);
        assert_eq!(t.value(), 273.15);
        assert_eq!(t.kelvin(), 273.15);
    }

    #[test]
    fn water_melting_point_in_every_scale() {
        assert_abs_diff_eq!(Temperature::from_celsius(0.0).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_fahrenheit(32.0).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_rankine(491.67).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_delisle(150.0).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_newton(0.0).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_reaumur(0.0).kelvin(), 273.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_romer(7.5).kelvin(), 273.15, epsilon = EPS);
        assert_eq!(Temperature::from_fahrenheit(32.0).celsius(), 0.0);
    }

    #[test]
    fn water_boiling_point_in_every_scale() {
        assert_abs_diff_eq!(Temperature::from_celsius(100.0).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_fahrenheit(212.0).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_rankine(671.67).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_delisle(0.0).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_newton(33.0).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_reaumur(80.0).kelvin(), 373.15, epsilon = EPS);
        assert_abs_diff_eq!(Temperature::from_romer(60.0).kelvin(), 373.15, epsilon = EPS);
    }

    #[test]
    fn kelvin_converts_back_into_every_scale() {
        let freezing = Temperature::from_kelvin(273.15);
        assert_abs_diff_eq!(freezing.celsius(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(freezing.fahrenheit(), 32.0, epsilon = EPS);
        assert_abs_diff_eq!(freezing.rankine(), 491.67, epsilon = EPS);
        assert_abs_diff_eq!(freezing.delisle(), 150.0, epsilon = EPS);
        assert_abs_diff_eq!(freezing.newton(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(freezing.reaumur(), 0.0, epsilon = EPS);
        assert_abs_diff_eq!(freezing.romer(), 7.5, epsilon = EPS);
    }

    #[test]
    fn one_hundred_kelvin_in_derived_scales() {
        let t = Temperature::from_kelvin(100.0);
        assert_abs_diff_eq!(t.celsius(), -173.15, epsilon = EPS);
        assert_abs_diff_eq!(t.fahrenheit(), -279.67, epsilon = EPS);
    }

    #[test]
    fn one_hundred_fahrenheit_in_derived_scales() {
        let t = Temperature::from_fahrenheit(100.0);
        assert_abs_diff_eq!(t.celsius(), 37.777_777_777_777_78, epsilon = EPS);
        assert_abs_diff_eq!(t.kelvin(), 310.927_777_777_777_8, epsilon = EPS);
    }

    #[test]
    fn absolute_zero_is_shared() {
        assert_eq!(Temperature::from_celsius(-273.15).value(), 0.0);
        assert_eq!(Temperature::from_rankine(0.0).value(), 0.0);
        assert_eq!(Temperature::from_fahrenheit(-459.67).value(), 0.0);
    }

    #[test]
    fn different_constructors_converge_to_equal_quantities() {
        let from_kelvin = Temperature::from_kelvin(273.15);
        let from_celsius = Temperature::from_celsius(0.0);
        assert_eq!(from_kelvin, from_celsius);
        assert_eq!(hash_of(from_kelvin), hash_of(from_celsius));
    }

    #[test]
    fn default_rendering_per_unit() {
        for (unit, symbol) in [
            (TemperatureUnit::Kelvin, "K"),
            (TemperatureUnit::Celsius, "°C"),
            (TemperatureUnit::Fahrenheit, "°F"),
            (TemperatureUnit::Rankine, "°R"),
            (TemperatureUnit::Delisle, "°D"),
            (TemperatureUnit::Newton, "°N"),
            (TemperatureUnit::Reaumur, "°Ré"),
            (TemperatureUnit::Romer, "°Rø"),
        ] {
            let t = Temperature::from_unit(123.456, unit);
            assert_eq!(t.format(unit), format!("123.46 {symbol}"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_celsius(value in -1000.0..10_000.0f64) {
            let back = Temperature::from_celsius(value).celsius();
            prop_assert!((back - value).abs() < 1e-9);
        }

        #[test]
        fn prop_roundtrip_fahrenheit(value in -1000.0..10_000.0f64) {
            let back = Temperature::from_fahrenheit(value).fahrenheit();
            prop_assert!((back - value).abs() < 1e-9);
        }

        #[test]
        fn prop_roundtrip_delisle(value in -1000.0..10_000.0f64) {
            let back = Temperature::from_delisle(value).delisle();
            prop_assert!((back - value).abs() < 1e-9);
        }

        #[test]
        fn prop_roundtrip_newton(value in -1000.0..10_000.0f64) {
            let back = Temperature::from_newton(value).newton();
            prop_assert!((back - value).abs() < 1e-9);
        }

        #[test]
        fn prop_roundtrip_romer(value in -1000.0..10_000.0f64) {
            let back = Temperature::from_romer(value).romer();
            prop_assert!((back - value).abs() < 1e-9);
        }
    }
}
