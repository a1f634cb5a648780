//! Conversion example: one magnitude, many units, including an affine scale.

use mensura::{Length, LengthUnit, Temperature, TemperatureUnit, Unit};

fn main() {
    let au = Length::from_astronomical_units(1.0);
    for unit in [
        LengthUnit::Meter,
        LengthUnit::Mile,
        LengthUnit::LightYear,
        LengthUnit::Parsec,
    ] {
        println!("1 au = {} ({})", au.format(unit), unit.symbol());
    }

    // Affine scales share the kelvin pivot, so constructors converge.
    let body = Temperature::from_celsius(37.0);
    assert_eq!(body, Temperature::from_kelvin(37.0 + 273.15));
    println!("{}", body.format(TemperatureUnit::Fahrenheit));
}
