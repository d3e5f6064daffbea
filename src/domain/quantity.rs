// ============================================================================
// Tracked Quantity
// A stored float bound to the significance it was measured with
// ============================================================================

use super::config::FormatConfig;
use super::significance::Significance;
use crate::engine::parser;
use crate::engine::propagator::{self, BinaryOp, Operand, Precision};
use crate::engine::renderer;
use crate::numeric::{DomainErrorKind, SigFigError, SigFigResult};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quantity carrying significant figures.
///
/// The stored value is never rounded; rounding happens only when the
/// quantity is displayed or when its precision feeds an addition. Every
/// operation returns a new quantity.
///
/// # Example
/// ```
/// use sigfig::SigFig;
///
/// let a: SigFig = "8.08".parse()?;
/// let b = SigFig::parse("2.1")?;
///
/// assert_eq!((a + b).to_string(), "10.2");
/// assert_eq!((a * b).to_string(), "17");
/// assert_eq!(SigFig::parse("14.52")? * 8.314, SigFig::parse("120.7")?);
/// # Ok::<(), sigfig::SigFigError>(())
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SigFig {
    value: f64,
    significance: Significance,
}

// ============================================================================
// Construction
// ============================================================================

impl SigFig {
    /// Create from a value known to `sig_figs` significant figures.
    ///
    /// # Errors
    /// Returns `InvalidSigFigs` if `sig_figs` is 0.
    pub fn new(value: f64, sig_figs: u32) -> SigFigResult<Self> {
        if sig_figs == 0 {
            return Err(SigFigError::InvalidSigFigs);
        }
        Ok(Self::from_significance(value, Significance::Figures(sig_figs)))
    }

    /// Parse a literal, counting its significant figures.
    ///
    /// # Errors
    /// Returns `Parse` if the literal is not a number.
    pub fn parse(literal: &str) -> SigFigResult<Self> {
        literal.parse()
    }

    /// Create from a value known to `decimal_places` digits after the point
    /// (e.g. a reading from a scale graduated in hundredths).
    ///
    /// Rounding and display stop at [`MAX_DIGITS`](crate::numeric::rounding::MAX_DIGITS)
    /// places either side of the point.
    pub fn with_decimal_places(value: f64, decimal_places: i32) -> Self {
        Self::from_significance(value, Significance::counted(value, decimal_places))
    }

    /// Create from a value and already-derived significance.
    #[inline]
    pub const fn from_significance(value: f64, significance: Significance) -> Self {
        Self {
            value,
            significance,
        }
    }

    /// The same stored value known to a different number of figures.
    ///
    /// # Errors
    /// Returns `InvalidSigFigs` if `sig_figs` is 0.
    pub fn with_sig_figs(self, sig_figs: u32) -> SigFigResult<Self> {
        Self::new(self.value, sig_figs)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Unrounded stored value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn significance(&self) -> Significance {
        self.significance
    }

    /// Significant figures carried (0 only for a value that rounds to zero
    /// at its decimal position).
    #[inline]
    pub const fn sig_figs(&self) -> u32 {
        self.significance.sig_figs()
    }

    /// Decimal position of the last significant digit.
    ///
    /// For a figure count this is derived from the rounded magnitude, so
    /// `SigFig::new(1234.0, 2)` reports `-2`.
    pub fn decimal_places(&self) -> i32 {
        self.significance.decimal_places(self.value)
    }

    /// Stored value rounded to the displayed precision.
    pub fn rounded(&self) -> f64 {
        self.significance
            .round(self.value)
            .map_or(self.value, |rounded| rounded.to_f64())
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }

    /// Whether the stored value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }

    /// Render with a non-default display configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` fails validation.
    pub fn render(&self, config: &FormatConfig) -> SigFigResult<String> {
        config.validate()?;
        Ok(renderer::render_with(self.value, self.significance, config))
    }

    #[inline]
    fn precision(&self) -> Precision {
        Precision {
            sig_figs: self.sig_figs(),
            decimal_places: self.decimal_places(),
        }
    }

    // ========================================================================
    // Math Functions
    // ========================================================================

    /// Square root; the figure count is kept.
    ///
    /// # Errors
    /// Returns `Domain(NegativeSqrt)` for a negative stored value.
    pub fn sqrt(&self) -> SigFigResult<Self> {
        if self.value < 0.0 {
            return Err(DomainErrorKind::NegativeSqrt.into());
        }
        Ok(Self::from_significance(
            self.value.sqrt(),
            propagator::sqrt(self.precision()),
        ))
    }

    /// Logarithm in `base`; the result shows as many decimal places as this
    /// quantity has significant figures.
    ///
    /// # Errors
    /// - `Domain(NonPositiveLog)` for a stored value that is not positive
    /// - `Domain(InvalidLogBase)` for a base that is not positive, is 1, or
    ///   is not finite
    pub fn log(&self, base: f64) -> SigFigResult<Self> {
        // NaN fails the first comparison too.
        if !(base > 0.0) || base == 1.0 || !base.is_finite() {
            return Err(DomainErrorKind::InvalidLogBase.into());
        }
        // Exact for powers of the common bases, unlike ln(x) / ln(base).
        if base == 10.0 {
            self.logarithm(f64::log10)
        } else if base == 2.0 {
            self.logarithm(f64::log2)
        } else {
            self.logarithm(|x| x.log(base))
        }
    }

    /// Natural logarithm.
    ///
    /// # Errors
    /// Returns `Domain(NonPositiveLog)` for a stored value that is not positive.
    pub fn ln(&self) -> SigFigResult<Self> {
        self.logarithm(f64::ln)
    }

    /// Base-10 logarithm.
    ///
    /// # Errors
    /// Returns `Domain(NonPositiveLog)` for a stored value that is not positive.
    pub fn log10(&self) -> SigFigResult<Self> {
        self.logarithm(f64::log10)
    }

    fn logarithm(&self, f: impl Fn(f64) -> f64) -> SigFigResult<Self> {
        if !(self.value > 0.0) {
            return Err(DomainErrorKind::NonPositiveLog.into());
        }
        let result = f(self.value);
        Ok(Self::from_significance(
            result,
            propagator::log(self.precision(), result),
        ))
    }

    /// Integer power; the figure count is kept.
    pub fn powi(&self, n: i32) -> Self {
        Self::from_significance(self.value.powi(n), propagator::pow(self.precision()))
    }

    /// Real power; the figure count is kept.
    pub fn powf(&self, exponent: f64) -> Self {
        Self::from_significance(
            self.value.powf(exponent),
            propagator::pow(self.precision()),
        )
    }

    /// Absolute value with the same significance.
    pub fn abs(&self) -> Self {
        Self::from_significance(self.value.abs(), self.significance)
    }

    /// Quotient rounded toward negative infinity, with the division rule.
    pub fn floor_div(self, rhs: SigFig) -> Self {
        combine(
            BinaryOp::FloorDiv,
            self.value,
            rhs.value,
            self.precision(),
            Operand::Tracked(rhs.precision()),
        )
    }
}

/// Unweighted mean of `quantities`, known to the fewest significant figures
/// among them.
///
/// # Errors
/// Returns `EmptyInput` if `quantities` is empty.
pub fn mean(quantities: &[SigFig]) -> SigFigResult<SigFig> {
    let significance = propagator::mean(quantities.iter().map(SigFig::precision))
        .ok_or(SigFigError::EmptyInput)?;
    let total: f64 = quantities.iter().map(|q| q.value).sum();
    Ok(SigFig::from_significance(
        total / quantities.len() as f64,
        significance,
    ))
}

/// Raw result of `lhs <op> rhs` bound to its propagated significance.
/// `tracked` is the operand that is a `SigFig`; `other` describes the rest.
#[inline]
fn combine(op: BinaryOp, lhs: f64, rhs: f64, tracked: Precision, other: Operand) -> SigFig {
    let result = op.apply(lhs, rhs);
    SigFig::from_significance(result, propagator::binary(op, tracked, other, result))
}

// ============================================================================
// Operators
// ============================================================================

macro_rules! impl_tracked_op {
    ($($trait:ident, $method:ident, $op:expr;)*) => {$(
        impl $trait for SigFig {
            type Output = SigFig;

            #[inline]
            fn $method(self, rhs: SigFig) -> SigFig {
                combine(
                    $op,
                    self.value,
                    rhs.value,
                    self.precision(),
                    Operand::Tracked(rhs.precision()),
                )
            }
        }
    )*};
}

// Plain numbers are exact on either side of the operator. One float and one
// integer type keep unsuffixed literals unambiguous.
macro_rules! impl_plain_op {
    ($trait:ident, $method:ident, $op:expr; $($plain:ty),*) => {$(
        impl $trait<$plain> for SigFig {
            type Output = SigFig;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn $method(self, rhs: $plain) -> SigFig {
                combine($op, self.value, rhs as f64, self.precision(), Operand::Untracked)
            }
        }

        impl $trait<SigFig> for $plain {
            type Output = SigFig;

            #[inline]
            #[allow(clippy::unnecessary_cast)]
            fn $method(self, rhs: SigFig) -> SigFig {
                combine($op, self as f64, rhs.value, rhs.precision(), Operand::Untracked)
            }
        }
    )*};
}

impl_tracked_op! {
    Add, add, BinaryOp::Add;
    Sub, sub, BinaryOp::Sub;
    Mul, mul, BinaryOp::Mul;
    Div, div, BinaryOp::Div;
    Rem, rem, BinaryOp::Rem;
}

impl_plain_op!(Add, add, BinaryOp::Add; f64, i32);
impl_plain_op!(Sub, sub, BinaryOp::Sub; f64, i32);
impl_plain_op!(Mul, mul, BinaryOp::Mul; f64, i32);
impl_plain_op!(Div, div, BinaryOp::Div; f64, i32);
impl_plain_op!(Rem, rem, BinaryOp::Rem; f64, i32);

impl Neg for SigFig {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_significance(-self.value, self.significance)
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Equal when both stored values are zero or both render identically, so
/// `50.00` and `50.000` differ. NaN is never equal.
impl PartialEq for SigFig {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.is_zero() && other.is_zero() {
            return true;
        }
        self.to_string() == other.to_string()
    }
}

/// Orders by rounded value. Quantities with the same rounded value but
/// different precision are unordered.
impl PartialOrd for SigFig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.rounded().partial_cmp(&other.rounded())? {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

// ============================================================================
// Conversion, Display and Debug
// ============================================================================

impl FromStr for SigFig {
    type Err = SigFigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = parser::parse(s)?;
        Ok(Self::from_significance(parsed.value, parsed.significance()))
    }
}

impl From<SigFig> for f64 {
    #[inline]
    fn from(quantity: SigFig) -> Self {
        quantity.value
    }
}

impl fmt::Display for SigFig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&renderer::render_with(
            self.value,
            self.significance,
            &FormatConfig::default(),
        ))
    }
}

/// Echoes the unrounded value and the tracked metadata.
impl fmt::Debug for SigFig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.significance {
            Significance::Figures(n) => write!(f, "SigFig({:?}, {})", self.value, n),
            Significance::Places {
                decimal_places,
                sig_figs,
            } => write!(
                f,
                "SigFig({:?}, {}, decimal_places = {})",
                self.value, sig_figs, decimal_places
            ),
        }
    }
}
