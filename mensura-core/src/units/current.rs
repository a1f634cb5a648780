//! Electric current. The ampere is the only unit this dimension defines.

use mensura_derive::Unit;

use crate::Quantity;

/// Enumeration of electric current units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Unit)]
#[unit(base = Ampere)]
pub enum ElectricCurrentUnit {
    /// The ampere, SI base unit of electric current.
    #[unit(symbol = "A", ratio = 1.0)]
    Ampere,
}

/// An electric current, stored in amperes.
pub type ElectricCurrent = Quantity<ElectricCurrentUnit>;

crate::impl_quantity_accessors! {
    ElectricCurrent, ElectricCurrentUnit {
        Ampere => from_amperes / amperes ("amperes");
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{Culture, Template};

    #[test]
    fn amperes_are_stored_verbatim() {
        let current = ElectricCurrent::from_amperes(1.5);
        assert_eq!(current.value(), 1.5);
        assert_eq!(current.amperes(), 1.5);
    }

    #[test]
    fn rendering_matches_the_other_dimensions() {
        let current = ElectricCurrent::from_amperes(123.456);
        assert_eq!(current.format(ElectricCurrentUnit::Ampere), "123.46 A");

        let three_digits = Template::parse("{value:.3} {symbol}").unwrap();
        assert_eq!(
            current.format_with(ElectricCurrentUnit::Ampere, &three_digits),
            "123.456 A"
        );

        let dutch = Culture::named("nl-NL").unwrap();
        assert_eq!(
            current.format_localized_with(ElectricCurrentUnit::Ampere, &dutch, &three_digits),
            "123,456 A"
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_ampere_arithmetic(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let x = ElectricCurrent::from_amperes(a);
            let y = ElectricCurrent::from_amperes(b);
            prop_assert_eq!(x + y, y + x);
            prop_assert!(((x + y).amperes() - (a + b)).abs() < 1e-9);
        }
    }
}
