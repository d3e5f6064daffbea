// ============================================================================
// Renderer
// Lays out a stored value rounded to its tracked precision
// ============================================================================

use crate::domain::{ExponentStyle, FormatConfig, Notation, Significance};
use crate::numeric::rounding::{self, RoundedDigits, MAX_DIGITS};

/// Render `value` with exactly `sig_figs` significant digits using the
/// default configuration (`1.0` at 3 figures is `"1.00"`).
///
/// A count of 0 is treated as 1.
pub fn render(value: f64, sig_figs: u32) -> String {
    render_figures(value, sig_figs, &FormatConfig::default())
}

/// Render `value` with exactly `decimal_places` digits after the point.
///
/// Negative places round to tens, hundreds, … and print the integer. A value
/// that rounds to zero prints without a sign. Places beyond [`MAX_DIGITS`]
/// in either direction are capped at it.
pub fn render_decimal(value: f64, decimal_places: i32) -> String {
    match rounding::round_to_decimal_places(value, decimal_places) {
        Some(rounded) => fixed(&rounded, decimal_places),
        None => non_finite(value),
    }
}

/// Render `value` as `significance` displays it under `config`.
///
/// A decimal-anchored value is rounded once, at its decimal position, and
/// those digits are laid out as they are.
pub fn render_with(value: f64, significance: Significance, config: &FormatConfig) -> String {
    match significance {
        Significance::Figures(n) => render_figures(value, n, config),
        Significance::Places { decimal_places, .. } => {
            let Some(rounded) = rounding::round_to_decimal_places(value, decimal_places) else {
                return non_finite(value);
            };
            let figures = rounded.significant_digits();
            let fixed_layout = match config.notation {
                Notation::Fixed => true,
                Notation::Scientific => false,
                Notation::Auto => {
                    decimal_places >= 0
                        || config.uses_fixed(rounded.exponent(), Some(figures as i32))
                },
            };
            if fixed_layout || rounded.is_zero() {
                fixed(&rounded, decimal_places)
            } else {
                scientific(&rounded, figures, config.exponent_style)
            }
        },
    }
}

fn render_figures(value: f64, sig_figs: u32, config: &FormatConfig) -> String {
    let sig_figs = sig_figs.clamp(1, MAX_DIGITS);
    let Some(rounded) = rounding::round_to_sig_figs(value, sig_figs) else {
        return non_finite(value);
    };

    let scientific_layout = match config.notation {
        Notation::Fixed => false,
        Notation::Scientific => true,
        Notation::Auto => !config.uses_fixed(rounded.exponent(), Some(sig_figs as i32)),
    };

    if scientific_layout {
        scientific(&rounded, sig_figs, config.exponent_style)
    } else {
        fixed(&rounded, sig_figs as i32 - 1)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Positional layout. `zero_places` sets the digits after the point when the
/// value rounded to zero.
fn fixed(rounded: &RoundedDigits, zero_places: i32) -> String {
    if rounded.is_zero() {
        let places = zero_places.clamp(0, MAX_DIGITS as i32) as usize;
        let mut out = String::with_capacity(places + 2);
        out.push('0');
        if places > 0 {
            out.push('.');
            out.extend(std::iter::repeat('0').take(places));
        }
        return out;
    }

    let high = rounded.exponent().max(0);
    let low = rounded.last_position().min(0);
    let mut out = String::with_capacity((high - low) as usize + 3);
    if rounded.is_negative() {
        out.push('-');
    }
    for position in (low..=high).rev() {
        out.push(char::from(b'0' + rounded.digit_at(position)));
        if position == 0 && low < 0 {
            out.push('.');
        }
    }
    out
}

/// `d.ddd` followed by the exponent. `sig_figs` sizes the mantissa of zero.
fn scientific(rounded: &RoundedDigits, sig_figs: u32, style: ExponentStyle) -> String {
    let mut out = String::with_capacity(sig_figs as usize + 8);
    if rounded.is_negative() {
        out.push('-');
    }

    let mantissa_len = if rounded.is_zero() {
        sig_figs as usize
    } else {
        rounded.digits().len()
    };
    for index in 0..mantissa_len {
        let digit = rounded.digits().get(index).copied().unwrap_or(0);
        out.push(char::from(b'0' + digit));
        if index == 0 && mantissa_len > 1 {
            out.push('.');
        }
    }

    let exponent = rounded.exponent();
    match style {
        ExponentStyle::Compact => {
            out.push('e');
            out.push_str(&exponent.to_string());
        },
        ExponentStyle::Padded => {
            let sign = if exponent < 0 { '-' } else { '+' };
            out.push_str(&format!("e{}{:02}", sign, exponent.unsigned_abs()));
        },
    }
    out
}

#[inline]
fn non_finite(value: f64) -> String {
    // Display prints `inf`, `-inf` and `NaN`.
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_pads_trailing_zeros() {
        assert_eq!(render(1.0, 3), "1.00");
        assert_eq!(render(20.0, 3), "20.0");
        assert_eq!(render(2.0, 3), "2.00");
    }

    #[test]
    fn test_render_rounds() {
        assert_eq!(render(25.696, 2), "26");
        assert_eq!(render(120.72128, 4), "120.7");
        assert_eq!(render(8.061766666666667, 2), "8.1");
        assert_eq!(render(-0.0023, 3), "-0.00230");
    }

    #[test]
    fn test_render_half_even() {
        assert_eq!(render(0.125, 2), "0.12");
        assert_eq!(render(0.135, 2), "0.14");
        assert_eq!(render(2.5, 1), "2");
    }

    #[test]
    fn test_render_switches_to_scientific() {
        // Trailing zeros of 1200 would be ambiguous at two figures.
        assert_eq!(render(1234.5, 2), "1.2e3");
        assert_eq!(render(0.0000123, 3), "1.23e-5");
        assert_eq!(render(0.000123, 3), "0.000123");
        assert_eq!(render(99.96, 3), "100");
    }

    #[test]
    fn test_render_zero() {
        assert_eq!(render(0.0, 3), "0.00");
        assert_eq!(render(-0.0, 1), "0");
    }

    #[test]
    fn test_render_decimal() {
        assert_eq!(render_decimal(10.18, 1), "10.2");
        assert_eq!(render_decimal(5.98, 1), "6.0");
        assert_eq!(render_decimal(1.0, 4), "1.0000");
        assert_eq!(render_decimal(1234.0, -2), "1200");
        assert_eq!(render_decimal(0.5 - 0.4 - 0.1, 1), "0.0");
        assert_eq!(render_decimal(0.00043990, 3), "0.000");
        assert_eq!(render_decimal(-0.3, 0), "0");
    }

    #[test]
    fn test_render_non_finite() {
        assert_eq!(render(f64::INFINITY, 3), "inf");
        assert_eq!(render(f64::NEG_INFINITY, 3), "-inf");
        assert_eq!(render_decimal(f64::NAN, 2), "NaN");
    }

    #[test]
    fn test_render_with_places() {
        let config = FormatConfig::default();
        let literal = Significance::Places {
            decimal_places: 0,
            sig_figs: 2,
        };
        assert_eq!(render_with(1200.0, literal, &config), "1200");

        let exponent_literal = Significance::Places {
            decimal_places: -1,
            sig_figs: 3,
        };
        assert_eq!(render_with(1200.0, exponent_literal, &config), "1.20e3");

        let tiny = Significance::Places {
            decimal_places: 9,
            sig_figs: 3,
        };
        assert_eq!(render_with(1.2e-7, tiny, &config), "0.000000120");
    }

    #[test]
    fn test_render_with_places_keeps_carried_digits() {
        let config = FormatConfig::default();
        let tens = Significance::Places {
            decimal_places: -1,
            sig_figs: 3,
        };
        assert_eq!(render_with(995.0, tens, &config), "1.00e3");

        let hundreds = Significance::Places {
            decimal_places: -2,
            sig_figs: 2,
        };
        assert_eq!(render_with(950.0, hundreds, &config), "1.0e3");
        assert_eq!(render_with(950.0, hundreds, &FormatConfig::fixed()), "1000");

        let millionths = Significance::Places {
            decimal_places: 7,
            sig_figs: 3,
        };
        assert_eq!(render_with(0.00000995, millionths, &config), "0.0000100");
        assert_eq!(
            render_with(0.00000995, millionths, &FormatConfig::scientific()),
            "1.00e-5"
        );
    }

    #[test]
    fn test_render_with_places_small_values_stay_fixed() {
        let config = FormatConfig::default();
        let places = |decimal_places| Significance::Places {
            decimal_places,
            sig_figs: 1,
        };
        assert_eq!(render_with(0.00005, places(5), &config), "0.00005");
        assert_eq!(render_with(0.000012, places(6), &config), "0.000012");
        assert_eq!(render_with(-0.00005, places(5), &config), "-0.00005");
    }

    #[test]
    fn test_places_are_capped() {
        let capped = 2 + MAX_DIGITS as usize;
        assert_eq!(render_decimal(1.0, 5000).len(), capped);
        assert!(render_decimal(1.0, 5000).starts_with("1.000"));
        assert_eq!(render_decimal(0.0, i32::MAX).len(), capped);
        assert_eq!(render_decimal(1e-9, 5000).len(), capped);

        let anchored = Significance::Places {
            decimal_places: 2_000_000_000,
            sig_figs: 0,
        };
        assert_eq!(render_with(0.0, anchored, &FormatConfig::default()).len(), capped);
    }

    #[test]
    fn test_render_with_notation() {
        let figures = Significance::Figures(3);
        assert_eq!(render_with(1234.5, figures, &FormatConfig::fixed()), "1230");
        assert_eq!(render_with(2.0, figures, &FormatConfig::scientific()), "2.00e0");
        assert_eq!(render_with(0.0, figures, &FormatConfig::scientific()), "0.00e0");
        assert_eq!(render_with(1234.5, figures, &FormatConfig::python_style()), "1.23e+03");
        assert_eq!(
            render_with(0.0000123, figures, &FormatConfig::python_style()),
            "1.23e-05"
        );
    }
}
