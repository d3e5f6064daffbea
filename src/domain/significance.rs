// ============================================================================
// Significance Metadata
// Precision carried alongside a stored value
// ============================================================================

use crate::numeric::rounding::{self, RoundedDigits, MAX_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How precisely a stored value is known.
///
/// Products, quotients, roots and means keep a significant-figure count;
/// literals, sums, differences and logarithms are anchored to a decimal
/// position instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Significance {
    /// Known to this many significant figures (at least 1).
    ///
    /// The decimal position is re-derived from the rounded magnitude when
    /// an addition or subtraction needs it.
    Figures(u32),

    /// Known to a fixed decimal position
    Places {
        /// Digits after the decimal point; negative for tens, hundreds, …
        decimal_places: i32,
        /// Significant digits shown once rounded to `decimal_places`.
        /// Zero only when the value rounds to zero there.
        sig_figs: u32,
    },
}

impl Significance {
    /// Anchor `value` at `decimal_places`, counting the significant digits
    /// it keeps once rounded there.
    pub fn counted(value: f64, decimal_places: i32) -> Self {
        match rounding::round_to_decimal_places(value, decimal_places) {
            Some(rounded) => Significance::Places {
                decimal_places,
                sig_figs: rounded.significant_digits(),
            },
            // Nothing to count on inf/NaN; keep the position only.
            None => Significance::Places {
                decimal_places,
                sig_figs: 0,
            },
        }
    }

    /// `Figures(sig_figs)`, or a zero-figure anchor at `decimal_places` when
    /// the count is zero.
    pub fn figures_or_places(sig_figs: u32, decimal_places: i32) -> Self {
        if sig_figs == 0 {
            Significance::Places {
                decimal_places,
                sig_figs: 0,
            }
        } else {
            Significance::Figures(sig_figs)
        }
    }

    #[inline]
    pub const fn sig_figs(self) -> u32 {
        match self {
            Significance::Figures(n) => n,
            Significance::Places { sig_figs, .. } => sig_figs,
        }
    }

    /// The decimal position when anchored, `None` for a figure count.
    #[inline]
    pub const fn anchored_places(self) -> Option<i32> {
        match self {
            Significance::Figures(_) => None,
            Significance::Places { decimal_places, .. } => Some(decimal_places),
        }
    }

    /// Decimal position of the last significant digit of `value`.
    ///
    /// Non-finite values place no constraint and report `i32::MAX`.
    pub fn decimal_places(self, value: f64) -> i32 {
        match self {
            Significance::Places { decimal_places, .. } => decimal_places,
            Significance::Figures(n) => match rounding::round_to_sig_figs(value, n) {
                Some(rounded) => -rounded_last_position(&rounded, n),
                None => i32::MAX,
            },
        }
    }

    /// Round `value` the way this significance displays it.
    pub fn round(self, value: f64) -> Option<RoundedDigits> {
        match self {
            Significance::Figures(n) => rounding::round_to_sig_figs(value, n),
            Significance::Places { decimal_places, .. } => {
                rounding::round_to_decimal_places(value, decimal_places)
            },
        }
    }
}

/// Zero has no leading digit; treat it as `0.00…` with `n` digits.
fn rounded_last_position(rounded: &RoundedDigits, n: u32) -> i32 {
    if rounded.is_zero() {
        1 - n.clamp(1, MAX_DIGITS) as i32
    } else {
        rounded.last_position()
    }
}
