// ============================================================================
// Literal Parser
// Reads a numeric literal and counts the significant figures it states
// ============================================================================

use crate::domain::Significance;
use crate::numeric::{ParseErrorKind, SigFigResult};
use smallvec::SmallVec;

/// A parsed literal: its value and the precision its digits state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedLiteral {
    /// Literal converted to `f64`, not rounded
    pub value: f64,
    /// Significant digits written (0 for an all-zero literal)
    pub sig_figs: u32,
    /// Digits after the point, shifted by the exponent suffix
    pub decimal_places: i32,
}

impl ParsedLiteral {
    /// Literals are anchored to the decimal position they were written at.
    #[inline]
    pub fn significance(&self) -> Significance {
        Significance::Places {
            decimal_places: self.decimal_places,
            sig_figs: self.sig_figs,
        }
    }
}

/// Parse a literal such as `"13.32"`, `"-0.00230"`, `"1200."` or `"1.20e3"`.
///
/// Counting rules:
/// - leading zeros are never significant
/// - trailing zeros are significant only when a decimal point is written
/// - every other digit is significant
///
/// # Errors
/// `SigFigError::Parse` with the matching [`ParseErrorKind`].
pub fn parse(literal: &str) -> SigFigResult<ParsedLiteral> {
    let result = scan(literal.trim());
    match &result {
        Ok(parsed) => tracing::trace!(
            literal,
            sig_figs = parsed.sig_figs,
            decimal_places = parsed.decimal_places,
            "parsed literal"
        ),
        Err(err) => tracing::debug!(literal, error = %err, "rejected literal"),
    }
    result
}

fn scan(text: &str) -> SigFigResult<ParsedLiteral> {
    if text.is_empty() {
        return Err(ParseErrorKind::Empty.into());
    }

    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (mantissa, exponent_text) = match unsigned.find(['e', 'E']) {
        Some(pos) => (&unsigned[..pos], Some(&unsigned[pos + 1..])),
        None => (unsigned, None),
    };

    // Mantissa
    let mut digits: SmallVec<[u8; 32]> = SmallVec::new();
    let mut has_point = false;
    let mut frac_len: i32 = 0;
    for c in mantissa.chars() {
        match c {
            '.' if has_point => return Err(ParseErrorKind::MultipleDecimalPoints.into()),
            '.' => has_point = true,
            '0'..='9' => {
                digits.push(c as u8 - b'0');
                if has_point {
                    frac_len = frac_len.saturating_add(1);
                }
            },
            _ => return Err(ParseErrorKind::InvalidCharacter.into()),
        }
    }
    if digits.is_empty() {
        return Err(ParseErrorKind::NoDigits.into());
    }

    let exponent = match exponent_text {
        Some(exp) => parse_exponent(exp)?,
        None => 0,
    };

    let decimal_places = frac_len
        .checked_sub(exponent)
        .ok_or(ParseErrorKind::InvalidExponent)?;

    let value: f64 = text
        .parse()
        .map_err(|_| ParseErrorKind::InvalidCharacter)?;
    let sig_figs = count_sig_figs(&digits, has_point);
    // Overflow to inf, or nonzero digits underflowing to 0.
    if !value.is_finite() || (value == 0.0 && sig_figs > 0) {
        return Err(ParseErrorKind::OutOfRange.into());
    }

    Ok(ParsedLiteral {
        value,
        sig_figs,
        decimal_places,
    })
}

fn parse_exponent(text: &str) -> SigFigResult<i32> {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.is_empty() {
        return Err(ParseErrorKind::InvalidExponent.into());
    }
    if !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidCharacter.into());
    }
    text.parse()
        .map_err(|_| ParseErrorKind::InvalidExponent.into())
}

/// Count significant digits in a mantissa's digit sequence.
fn count_sig_figs(digits: &[u8], has_point: bool) -> u32 {
    let Some(first) = digits.iter().position(|&d| d != 0) else {
        return 0;
    };
    let significant = &digits[first..];
    let len = if has_point {
        significant.len()
    } else {
        // A nonzero digit exists, so a last nonzero position does too.
        significant.iter().rposition(|&d| d != 0).map_or(0, |last| last + 1)
    };
    len as u32
}
