//! Macro for defining per-unit constructors and accessors.

/// Generates named `from_<unit>` constructors and `<unit>()` accessors for a
/// quantity alias, one pair per listed variant.
///
/// Each `Variant => from_name / get_name ("noun")` row expands to a
/// `from_name(value: f64) -> Self` constructor interpreting `value` in that unit,
/// and a `get_name(self) -> f64` accessor converting the quantity back to it.
#[macro_export]
macro_rules! impl_quantity_accessors {
    ($quantity:ty, $unit:ty {
        $( $variant:ident => $from:ident / $get:ident ($noun:literal) );+ $(;)?
    }) => {
        impl $quantity {
            $(
                #[doc = concat!("Creates a quantity from a magnitude in ", $noun, ".")]
                #[inline]
                pub fn $from(value: f64) -> Self {
                    Self::from_unit(value, <$unit>::$variant)
                }

                #[doc = concat!("Returns the magnitude expressed in ", $noun, ".")]
                #[inline]
                pub fn $get(self) -> f64 {
                    self.value_in(<$unit>::$variant)
                }
            )+
        }
    };
}
