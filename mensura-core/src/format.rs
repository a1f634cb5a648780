//! Culture-aware rendering of quantities as strings.
//!
//! [`Template`] describes the output shape with `{value}` and `{symbol}` placeholders;
//! [`Culture`] decides how the numeric part is written, most visibly the decimal
//! separator. The default template prints the magnitude with two fraction digits,
//! a space, and the unit symbol.

use std::str::FromStr;

use fixed_decimal::FixedDecimal;
use icu_decimal::options::{FixedDecimalFormatterOptions, GroupingStrategy};
use icu_decimal::FixedDecimalFormatter;
use icu_locid::Locale;
use thiserror::Error;

use crate::quantity::Quantity;
use crate::unit::Unit;

/// Fraction digits used when a `{value}` placeholder carries no precision of its own.
const DEFAULT_PRECISION: u8 = 2;

/// Error building a [`Culture`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CultureError {
    /// The tag is not a well-formed BCP-47 locale identifier.
    #[error("invalid locale tag `{tag}`: {message}")]
    InvalidTag {
        /// The offending tag.
        tag: String,
        /// Parser diagnostic.
        message: String,
    },
    /// No decimal-formatting data is available for the locale.
    #[error("no decimal formatting data for locale `{locale}`: {message}")]
    MissingData {
        /// The resolved locale.
        locale: String,
        /// Provider diagnostic.
        message: String,
    },
}

/// Error parsing a [`Template`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A placeholder other than `{value}`, `{value:.N}` or `{symbol}`.
    #[error("unknown placeholder `{{{name}}}`")]
    UnknownPlaceholder {
        /// The placeholder body as written.
        name: String,
    },
    /// A `{value:…}` placeholder whose precision is not `.N` with `N` in `0..=255`.
    #[error("invalid precision in placeholder `{{{placeholder}}}`")]
    InvalidPrecision {
        /// The placeholder body as written.
        placeholder: String,
    },
    /// A `{` without a closing `}`, or a stray `}`.
    #[error("unmatched `{brace}` at byte {position}")]
    UnmatchedBrace {
        /// The offending brace.
        brace: char,
        /// Byte offset into the template string.
        position: usize,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Culture
// ─────────────────────────────────────────────────────────────────────────────

/// Decides how the numeric part of a formatted quantity is written.
///
/// The [invariant](Culture::invariant) culture writes numbers the way Rust's `format!`
/// does, with `.` as the decimal separator; it is the default and never fails. A
/// locale-backed culture, built with [`Culture::named`] or [`Culture::from_locale`],
/// substitutes the locale's decimal separator and sign. Neither inserts grouping
/// separators; output stays fixed-point with exactly the requested fraction digits.
pub struct Culture {
    repr: Repr,
}

enum Repr {
    Invariant,
    Locale {
        formatter: FixedDecimalFormatter,
        locale: Locale,
    },
}

impl Culture {
    /// The locale-independent culture: `.` as decimal separator, `-` as sign.
    pub fn invariant() -> Self {
        Self {
            repr: Repr::Invariant,
        }
    }

    /// Builds a culture from a BCP-47 tag such as `"nl-NL"`.
    ///
    /// ```rust
    /// use mensura_core::pressure::{Pressure, PressureUnit};
    /// use mensura_core::Culture;
    ///
    /// let dutch = Culture::named("nl-NL")?;
    /// let p = Pressure::from_bars(123.456);
    /// assert_eq!(p.format_localized(PressureUnit::Bar, &dutch), "123,46 bar");
    /// # Ok::<(), mensura_core::CultureError>(())
    /// ```
    pub fn named(tag: &str) -> Result<Self, CultureError> {
        let locale = tag
            .parse::<Locale>()
            .map_err(|e| CultureError::InvalidTag {
                tag: tag.to_owned(),
                message: e.to_string(),
            })?;
        Self::from_locale(locale)
    }

    /// Builds a culture from an already-parsed [`Locale`].
    pub fn from_locale(locale: Locale) -> Result<Self, CultureError> {
        let mut options = FixedDecimalFormatterOptions::default();
        options.grouping_strategy = GroupingStrategy::Never;
        let formatter = FixedDecimalFormatter::try_new(&(&locale).into(), options).map_err(
            |e| CultureError::MissingData {
                locale: locale.to_string(),
                message: e.to_string(),
            },
        )?;
        Ok(Self {
            repr: Repr::Locale { formatter, locale },
        })
    }

    /// Writes `value` with exactly `precision` fraction digits.
    ///
    /// Non-finite magnitudes bypass the locale machinery and render as Rust's `Display`
    /// for `f64` (`NaN`, `inf`, `-inf`) in every culture.
    pub(crate) fn decimal(&self, value: f64, precision: u8) -> String {
        if !value.is_finite() {
            return format!("{value}");
        }
        let precision = usize::from(precision);
        let plain = format!("{value:.precision$}");
        match &self.repr {
            Repr::Invariant => plain,
            Repr::Locale { formatter, .. } => match FixedDecimal::from_str(&plain) {
                Ok(decimal) => formatter.format_to_string(&decimal),
                Err(_) => plain,
            },
        }
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

impl core::fmt::Debug for Culture {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.repr {
            Repr::Invariant => f.write_str("Culture(invariant)"),
            Repr::Locale { locale, .. } => write!(f, "Culture({locale})"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Template
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed output template with `{value}` and `{symbol}` placeholders.
///
/// `{value}` renders the magnitude with the default two fraction digits; `{value:.N}`
/// overrides the fraction digits. `{symbol}` renders the unit symbol. Doubled braces
/// `{{` and `}}` escape literal braces; everything else is copied through verbatim.
/// The default template is `"{value} {symbol}"`.
///
/// ```rust
/// use mensura_core::length::{Length, LengthUnit};
/// use mensura_core::Template;
///
/// let template = Template::parse("{value:.3} {symbol}")?;
/// let length = Length::from_meters(123.456);
/// assert_eq!(length.format_with(LengthUnit::Meter, &template), "123.456 m");
/// # Ok::<(), mensura_core::TemplateError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Value { precision: Option<u8> },
    Symbol,
}

impl Template {
    /// Parses a template string.
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            match ch {
                '{' => {
                    if matches!(chars.peek(), Some((_, '{'))) {
                        chars.next();
                        literal.push('{');
                        continue;
                    }
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(TemplateError::UnmatchedBrace {
                            brace: '{',
                            position,
                        });
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(core::mem::take(&mut literal)));
                    }
                    segments.push(Self::placeholder(&name)?);
                }
                '}' => {
                    if matches!(chars.peek(), Some((_, '}'))) {
                        chars.next();
                        literal.push('}');
                    } else {
                        return Err(TemplateError::UnmatchedBrace {
                            brace: '}',
                            position,
                        });
                    }
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    fn placeholder(name: &str) -> Result<Segment, TemplateError> {
        if name == "symbol" {
            return Ok(Segment::Symbol);
        }
        if name == "value" {
            return Ok(Segment::Value { precision: None });
        }
        if let Some(suffix) = name.strip_prefix("value:") {
            let digits =
                suffix
                    .strip_prefix('.')
                    .ok_or_else(|| TemplateError::InvalidPrecision {
                        placeholder: name.to_owned(),
                    })?;
            let precision =
                digits
                    .parse::<u8>()
                    .map_err(|_| TemplateError::InvalidPrecision {
                        placeholder: name.to_owned(),
                    })?;
            return Ok(Segment::Value {
                precision: Some(precision),
            });
        }
        Err(TemplateError::UnknownPlaceholder {
            name: name.to_owned(),
        })
    }

    pub(crate) fn render(&self, value: f64, symbol: &str, culture: &Culture) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value { precision } => {
                    out.push_str(&culture.decimal(value, precision.unwrap_or(DEFAULT_PRECISION)));
                }
                Segment::Symbol => out.push_str(symbol),
            }
        }
        out
    }
}

impl Default for Template {
    /// `"{value} {symbol}"`: magnitude with two fraction digits, a space, the symbol.
    fn default() -> Self {
        Self {
            segments: vec![
                Segment::Value { precision: None },
                Segment::Literal(" ".to_owned()),
                Segment::Symbol,
            ],
        }
    }
}

impl FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity formatting
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Quantity<U> {
    /// Renders the magnitude expressed in `unit` with the default template and the
    /// invariant culture, e.g. `"123.46 m"`.
    pub fn format(self, unit: U) -> String {
        self.format_localized_with(unit, &Culture::invariant(), &Template::default())
    }

    /// Renders with `template` in the invariant culture.
    pub fn format_with(self, unit: U, template: &Template) -> String {
        self.format_localized_with(unit, &Culture::invariant(), template)
    }

    /// Renders with the default template in `culture`.
    pub fn format_localized(self, unit: U, culture: &Culture) -> String {
        self.format_localized_with(unit, culture, &Template::default())
    }

    /// Renders with `template` in `culture`. The other formatting methods all funnel
    /// into this one.
    pub fn format_localized_with(self, unit: U, culture: &Culture, template: &Template) -> String {
        template.render(self.value_in(unit), unit.symbol(), culture)
    }
}

impl<U: Unit> core::fmt::Display for Quantity<U> {
    /// Default rendering in the base unit: two fraction digits, invariant culture.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.format(U::BASE))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
