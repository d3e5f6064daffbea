// ============================================================================
// Half-Even Rounding
// Rounds the decimal representation of an f64 to a digit count or a position
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;

/// Upper bound on digits produced by a single rounding.
///
/// An `f64` carries at most 17 meaningful decimal digits and its decimal
/// exponent stays within ±324, so anything past this is zero padding.
pub const MAX_DIGITS: u32 = 1_000;

/// Digit buffer; inline storage covers every digit an `f64` can carry.
pub type DigitBuf = SmallVec<[u8; 32]>;

/// A value rounded to a fixed set of decimal digits.
///
/// Represents `±d0.d1d2… × 10^exponent`. `d0` is nonzero unless the value
/// rounded to zero, in which case `digits` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundedDigits {
    negative: bool,
    digits: DigitBuf,
    exponent: i32,
}

/// `|value| = mantissa × 10^exponent` with `1 <= mantissa < 10`.
struct Decomposed {
    negative: bool,
    mantissa: Decimal,
    exponent: i32,
}

impl RoundedDigits {
    /// The rounded zero.
    pub fn zero() -> Self {
        Self {
            negative: false,
            digits: DigitBuf::new(),
            exponent: 0,
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Zero never reports a sign.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Significant digits, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Power of ten of the leading digit (0 for zero).
    #[inline]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Number of significant digits kept (0 for zero).
    #[inline]
    pub fn significant_digits(&self) -> u32 {
        self.digits.len() as u32
    }

    /// Power of ten of the last kept digit.
    #[inline]
    pub fn last_position(&self) -> i32 {
        self.exponent - (self.digits.len() as i32 - 1)
    }

    /// Digit standing at `10^position`, zero outside the kept range.
    pub fn digit_at(&self, position: i32) -> u8 {
        if self.is_zero() || position > self.exponent || position < self.last_position() {
            return 0;
        }
        self.digits[(self.exponent - position) as usize]
    }

    /// The rounded value as an `f64`.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let mut text = String::with_capacity(self.digits.len() + 8);
        if self.negative {
            text.push('-');
        }
        text.extend(self.digits.iter().map(|d| char::from(b'0' + d)));
        text.push('e');
        text.push_str(&self.last_position().to_string());
        text.parse().unwrap_or(f64::NAN)
    }

    /// Builds the digit buffer from a rounded mantissa, renormalising a carry
    /// into the next power of ten and resizing to `len_for(exponent)` digits.
    fn from_mantissa(
        negative: bool,
        mantissa: Decimal,
        mut exponent: i32,
        len_for: impl Fn(i32) -> usize,
    ) -> Self {
        if mantissa >= Decimal::TEN {
            exponent += 1;
        }
        let mut digits: DigitBuf = mantissa
            .mantissa()
            .unsigned_abs()
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        // Carried or padded positions are zeros, so resizing never drops a digit.
        digits.resize(len_for(exponent), 0);
        Self {
            negative,
            digits,
            exponent,
        }
    }
}

/// Splits a finite nonzero value into mantissa and exponent using the
/// shortest decimal string that round-trips to the same `f64`.
fn decompose(value: f64) -> Option<Decomposed> {
    if !value.is_finite() || value == 0.0 {
        return None;
    }
    let text = format!("{:e}", value.abs());
    let (mantissa_text, exponent_text) = text.split_once('e')?;
    let exponent: i32 = exponent_text.parse().ok()?;
    let (int_part, frac_part) = mantissa_text.split_once('.').unwrap_or((mantissa_text, ""));

    let mut raw: i128 = 0;
    for b in int_part.bytes().chain(frac_part.bytes()) {
        raw = raw * 10 + i128::from(b - b'0');
    }

    Some(Decomposed {
        negative: value.is_sign_negative(),
        mantissa: Decimal::from_i128_with_scale(raw, frac_part.len() as u32),
        exponent,
    })
}

#[inline]
fn round_mantissa(mantissa: Decimal, dp: u32) -> Decimal {
    if dp >= mantissa.scale() {
        mantissa
    } else {
        mantissa.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
    }
}

/// Round to `sig_figs` significant digits, half to even.
///
/// Returns `None` for non-finite values. A count of 0 is treated as 1.
pub fn round_to_sig_figs(value: f64, sig_figs: u32) -> Option<RoundedDigits> {
    if !value.is_finite() {
        return None;
    }
    let sig_figs = sig_figs.clamp(1, MAX_DIGITS);
    let Some(parts) = decompose(value) else {
        return Some(RoundedDigits::zero());
    };

    let rounded = round_mantissa(parts.mantissa, sig_figs - 1);
    Some(RoundedDigits::from_mantissa(
        parts.negative,
        rounded,
        parts.exponent,
        |_| sig_figs as usize,
    ))
}

/// Round to `decimal_places` digits after the point, half to even.
///
/// Negative places round to tens, hundreds and so on. Returns `None` for
/// non-finite values.
pub fn round_to_decimal_places(value: f64, decimal_places: i32) -> Option<RoundedDigits> {
    if !value.is_finite() {
        return None;
    }
    let limit = MAX_DIGITS as i32;
    let decimal_places = decimal_places.clamp(-limit, limit);
    let Some(parts) = decompose(value) else {
        return Some(RoundedDigits::zero());
    };

    // Digits of the mantissa kept after its own decimal point.
    let shift = decimal_places + parts.exponent;
    if shift < -1 {
        return Some(RoundedDigits::zero());
    }
    if shift == -1 {
        // The kept position sits just above the leading digit: the value
        // rounds to one unit of it or to zero, ties going to zero.
        if parts.mantissa > Decimal::new(5, 0) {
            let mut digits = DigitBuf::new();
            digits.push(1);
            return Some(RoundedDigits {
                negative: parts.negative,
                digits,
                exponent: parts.exponent + 1,
            });
        }
        return Some(RoundedDigits::zero());
    }

    let rounded = round_mantissa(parts.mantissa, shift as u32);
    Some(RoundedDigits::from_mantissa(
        parts.negative,
        rounded,
        parts.exponent,
        |exponent| (exponent + decimal_places + 1) as usize,
    ))
}
