//! Minimal end-to-end example: construct, convert and print a few quantities.

use mensura::{Length, LengthUnit, Mass, Time};

fn main() {
    let distance = Length::from_meters(123.456);
    println!("{}", distance);
    println!("{}", distance.format(LengthUnit::Inch));

    let payload = Mass::from_pounds(50.0);
    println!("{:.3} kg", payload.kilograms());

    let flight = Time::from_hms(1.0, 30.0, 0.0);
    assert_eq!(flight.minutes(), 90.0);
    println!("{}", flight.format(mensura::TimeUnit::Minute));
}
