//! Serde example: bare magnitudes by default, a tagged form on request.
//!
//! Run with: cargo run --example serialization --features serde

#[cfg(feature = "serde")]
fn main() {
    use mensura::{Length, Mass};
    use serde::{Deserialize, Serialize};

    // Plain quantities serialize as the base-unit magnitude, nothing else.
    let distance = Length::from_feet(4.0);
    let json = serde_json::to_string(&distance).unwrap();
    println!("bare: {json}");
    let back: Length = serde_json::from_str(&json).unwrap();
    assert_eq!(back, distance);

    // The tagged adapter writes the base-unit symbol next to the value.
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Shipment {
        #[serde(with = "mensura::serde_with_unit")]
        weight: Mass,
        crates: u32,
    }

    let shipment = Shipment {
        weight: Mass::from_kilograms(250.0),
        crates: 4,
    };
    let json = serde_json::to_string_pretty(&shipment).unwrap();
    println!("tagged:\n{json}");

    // The tag is optional on the way back in, but a wrong one is rejected.
    let untagged: Shipment =
        serde_json::from_str(r#"{"weight":{"value":250.0},"crates":4}"#).unwrap();
    assert_eq!(untagged, shipment);
    let wrong = r#"{"weight":{"value":1.0,"unit":"m"},"crates":1}"#;
    let err = serde_json::from_str::<Shipment>(wrong).unwrap_err();
    println!("rejected: {err}");
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the `serde` feature.");
    println!("Run with: cargo run --example serialization --features serde");
}
