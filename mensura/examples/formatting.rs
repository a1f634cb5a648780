//! Formatting example: templates, precision overrides and localized output.

use mensura::{Culture, Pressure, PressureUnit, Template};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let p = Pressure::from_bars(123.456);

    // Default: two fraction digits, invariant decimal point.
    assert_eq!(p.format(PressureUnit::Bar), "123.46 bar");

    // A template overrides the shape and the precision.
    let compact = Template::parse("{value:.0}{symbol}")?;
    assert_eq!(p.format_with(PressureUnit::Bar, &compact), "123bar");

    // A culture swaps the decimal separator.
    let dutch = Culture::named("nl-NL")?;
    assert_eq!(p.format_localized(PressureUnit::Bar, &dutch), "123,46 bar");

    let verbose = Template::parse("pressure: {value:.4} {symbol}")?;
    println!("{}", p.format_localized_with(PressureUnit::Bar, &dutch, &verbose));
    Ok(())
}
