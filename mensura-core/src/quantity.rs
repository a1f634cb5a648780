//! Generic quantity type shared by every dimension.

use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::unit::Unit;

/// A physical quantity: an `f64` magnitude stored in the dimension's base unit.
///
/// `Quantity` is parameterised by a unit enumeration implementing [`Unit`], so quantities of
/// different dimensions are distinct types and cannot be mixed in arithmetic or comparisons.
/// The magnitude is stored in [`Unit::BASE`] regardless of the unit it was constructed from;
/// two quantities built from different units of the same dimension compare equal whenever
/// their base magnitudes are the same `f64`.
///
/// Equality, ordering and hashing all follow the stored magnitude: `NAN` compares unequal to
/// everything including itself, `0.0` equals `-0.0`, and equal quantities hash alike. No range
/// validation is performed anywhere; non-finite magnitudes are accepted and propagate through
/// conversions and arithmetic by the usual IEEE 754 rules.
///
/// ```rust
/// use mensura_core::length::Length;
///
/// let a = Length::from_feet(1.0);
/// let b = Length::from_inches(12.0);
/// assert_eq!(a, b);
/// assert_eq!((a + b).feet(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A quantity whose magnitude is [`f64::NAN`].
    pub const NAN: Self = Self::new(f64::NAN);

    /// Creates a quantity from a magnitude expressed in the dimension's base unit.
    #[inline]
    pub const fn new(base: f64) -> Self {
        Self(base, PhantomData)
    }

    /// Returns the magnitude in the dimension's base unit.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns a quantity with the absolute value of the magnitude.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Creates a quantity from a magnitude expressed in `unit`.
    ///
    /// ```rust
    /// use mensura_core::length::{Length, LengthUnit};
    ///
    /// let stride = Length::from_unit(2.0, LengthUnit::Foot);
    /// assert_eq!(stride, Length::from_feet(2.0));
    /// ```
    #[inline]
    pub fn from_unit(value: f64, unit: U) -> Self {
        Self::new(unit.conversion().to_base(value))
    }

    /// Returns the magnitude expressed in `unit`.
    ///
    /// ```rust
    /// use mensura_core::time::{Time, TimeUnit};
    ///
    /// let t = Time::from_seconds(90.0);
    /// assert_eq!(t.value_in(TimeUnit::Minute), 1.5);
    /// ```
    #[inline]
    pub fn value_in(self, unit: U) -> f64 {
        unit.conversion().from_base(self.0)
    }
}

impl<U: Unit> From<f64> for Quantity<U> {
    /// Interprets `base` as a magnitude in the dimension's base unit.
    #[inline]
    fn from(base: f64) -> Self {
        Self::new(base)
    }
}

/// Hashes the base-unit magnitude by bit pattern, with `-0.0` normalised to `0.0` so that
/// quantities comparing equal hash alike.
impl<U: Unit> Hash for Quantity<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = if self.0 == 0.0 { 0.0f64 } else { self.0 };
        canonical.to_bits().hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arithmetic operators
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.0 * scalar)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;

    #[inline]
    fn mul(self, quantity: Quantity<U>) -> Quantity<U> {
        Quantity::new(self * quantity.0)
    }
}

impl<U: Unit> MulAssign<f64> for Quantity<U> {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.0 *= scalar;
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::new(self.0 / scalar)
    }
}

impl<U: Unit> DivAssign<f64> for Quantity<U> {
    #[inline]
    fn div_assign(&mut self, scalar: f64) {
        self.0 /= scalar;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> serde::Serialize for Quantity<U> {
    /// Serializes as a bare `f64` in the dimension's base unit.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> serde::Deserialize<'de> for Quantity<U> {
    /// Deserializes from a bare `f64` in the dimension's base unit.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        f64::deserialize(deserializer).map(Self::new)
    }
}

/// Serde adapter that writes a quantity as `{ "value": …, "unit": "…" }`.
///
/// The `unit` field is the symbol of the dimension's base unit. On deserialization it
/// is optional, so plain `{ "value": … }` data stays readable, but when present it must
/// match the base-unit symbol, guarding serialized data against being read back as a
/// different dimension. Use with `#[serde(with = "mensura_core::serde_with_unit")]` on
/// a `Quantity` field.
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use core::marker::PhantomData;

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Quantity;
    use crate::unit::Unit;

    /// Serializes `quantity` as a two-field map tagged with the base-unit symbol.
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::BASE.symbol())?;
        state.end()
    }

    /// Deserializes from a map with a required `value` field and an optional `unit`
    /// tag, rejecting a tag that does not match the dimension's base-unit symbol.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(
                    formatter,
                    "a map with a `value` magnitude and a `unit` tag of `{}`",
                    U::BASE.symbol()
                )
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<String> = None;
                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }
                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let expected = U::BASE.symbol();
                if let Some(unit) = unit {
                    if unit != expected {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected `{expected}`, found `{unit}`"
                        )));
                    }
                }
                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}
