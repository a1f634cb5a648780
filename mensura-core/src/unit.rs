//! Unit trait and conversion rules.

use core::fmt::Debug;

/// Trait implemented by every per-dimension **unit enumeration**.
///
/// * `BASE` is the enumeration value of the dimension's base unit. Every quantity stores its
///   magnitude in this unit; all other units convert through it.
///
/// * `conversion` returns the [`Conversion`] rule between a unit and the base unit.
///
/// * `symbol` is the printable string (e.g. `"m"` or `"°C"`), substituted into formatted output.
///
/// Implementations are generated by the `Unit` derive in `mensura-derive`, which expands both
/// methods into exhaustive `match` statements over the enumeration, so a unit without a
/// conversion or symbol entry cannot compile.
///
/// # Invariants
///
/// - Implementations should be field-less `Copy` enums (the derive enforces this).
/// - `BASE.conversion()` must be an identity rule: a linear factor of `1.0` in either
///   direction, so converting to or from the base unit is a no-op.
///
/// ```rust
/// use mensura_core::units::length::LengthUnit;
/// use mensura_core::Unit;
///
/// assert_eq!(LengthUnit::BASE, LengthUnit::Meter);
/// assert_eq!(LengthUnit::Inch.symbol(), "in");
/// assert_eq!(LengthUnit::Inch.conversion().to_base(2.0), 0.0508);
/// ```
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// The dimension's base unit.
    const BASE: Self;

    /// Conversion rule between this unit and the base unit.
    fn conversion(self) -> Conversion;

    /// Printable symbol, substituted into formatted output.
    fn symbol(self) -> &'static str;
}

/// Conversion rule between a unit and its dimension's base unit.
///
/// Linear rules come in two directions, matching the two table conventions used by the
/// dimensions in [`crate::units`]: a [`Linear`](Conversion::Linear) factor states how many base
/// units make up one of this unit, while a [`PerBase`](Conversion::PerBase) factor states how
/// many of this unit make up one base unit. [`Affine`](Conversion::Affine) carries a distinct
/// function pair for scales with an offset, where a single factor cannot express both
/// directions (temperature scales).
///
/// ```rust
/// use mensura_core::Conversion;
///
/// let kilo = Conversion::Linear(1000.0);
/// assert_eq!(kilo.to_base(2.5), 2500.0);
/// assert_eq!(kilo.from_base(500.0), 0.5);
///
/// let milli = Conversion::PerBase(1000.0);
/// assert_eq!(milli.to_base(2500.0), 2.5);
/// assert_eq!(milli.from_base(0.5), 500.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Conversion {
    /// `base = value × factor`; the factor converts unit → base.
    Linear(f64),
    /// `value = base × factor`; the factor converts base → unit.
    PerBase(f64),
    /// Distinct function pair through the base unit.
    Affine {
        /// Converts a value expressed in this unit to the base unit.
        to_base: fn(f64) -> f64,
        /// Converts a base-unit magnitude to this unit.
        from_base: fn(f64) -> f64,
    },
}

impl Conversion {
    /// Converts `value`, expressed in this rule's unit, into the base unit.
    #[inline]
    pub fn to_base(self, value: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => value * factor,
            Conversion::PerBase(factor) => value / factor,
            Conversion::Affine { to_base, .. } => to_base(value),
        }
    }

    /// Converts `base`, a magnitude in the base unit, into this rule's unit.
    #[inline]
    pub fn from_base(self, base: f64) -> f64 {
        match self {
            Conversion::Linear(factor) => base / factor,
            Conversion::PerBase(factor) => base * factor,
            Conversion::Affine { from_base, .. } => from_base(base),
        }
    }
}
