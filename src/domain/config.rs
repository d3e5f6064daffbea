// ============================================================================
// Format Configuration
// Controls how tracked quantities are laid out as text
// ============================================================================

use crate::numeric::{SigFigError, SigFigResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Smallest leading-digit exponent printed in fixed notation by default
/// (`0.0001` stays fixed, `0.00001` switches to scientific).
pub const DEFAULT_MIN_FIXED_EXPONENT: i32 = -4;

// ============================================================================
// Notation
// ============================================================================

/// Choice between fixed-point and scientific output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    /// Fixed-point unless the leading digit falls outside the fixed range,
    /// like printf's `%g`
    #[default]
    Auto,
    /// Always fixed-point
    Fixed,
    /// Always scientific
    Scientific,
}

/// Spelling of the exponent in scientific output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExponentStyle {
    /// `1.2e3`, `4.5e-7` (as `f64`'s `{:e}` prints)
    #[default]
    Compact,
    /// `1.2e+03`, `4.5e-07` (signed, at least two digits)
    Padded,
}

// ============================================================================
// Format Configuration
// ============================================================================

/// Display configuration for [`SigFig`](crate::SigFig) rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormatConfig {
    /// Fixed, scientific, or chosen per value
    pub notation: Notation,

    /// Exponent spelling for scientific output
    pub exponent_style: ExponentStyle,

    /// Leading-digit exponents below this switch `Auto` to scientific
    pub min_fixed_exponent: i32,

    /// Leading-digit exponents at or above this switch `Auto` to scientific.
    /// None means the significant-figure count is the bound, so that no
    /// ambiguous trailing zeros are printed.
    pub max_fixed_exponent: Option<i32>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::new(Notation::Auto, ExponentStyle::Compact)
    }
}

impl FormatConfig {
    /// Create a configuration with the default fixed range
    pub const fn new(notation: Notation, exponent_style: ExponentStyle) -> Self {
        Self {
            notation,
            exponent_style,
            min_fixed_exponent: DEFAULT_MIN_FIXED_EXPONENT,
            max_fixed_exponent: None,
        }
    }

    /// Builder method: Set the notation
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Builder method: Set the exponent style
    pub fn with_exponent_style(mut self, style: ExponentStyle) -> Self {
        self.exponent_style = style;
        self
    }

    /// Builder method: Set the exponent range printed in fixed notation
    pub fn with_fixed_range(mut self, min: i32, max: Option<i32>) -> Self {
        self.min_fixed_exponent = min;
        self.max_fixed_exponent = max;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> SigFigResult<()> {
        // Values in [1, 10) must always print fixed
        if self.min_fixed_exponent > 0 {
            return Err(SigFigError::InvalidConfig);
        }

        if let Some(max) = self.max_fixed_exponent {
            if max < 1 || max <= self.min_fixed_exponent {
                return Err(SigFigError::InvalidConfig);
            }
        }

        Ok(())
    }

    /// Whether `Auto` prints a leading digit at `10^exponent` in fixed
    /// notation. `default_max` stands in when no upper bound is configured.
    pub fn uses_fixed(&self, exponent: i32, default_max: Option<i32>) -> bool {
        if exponent < self.min_fixed_exponent {
            return false;
        }
        match self.max_fixed_exponent.or(default_max) {
            Some(max) => exponent < max,
            None => true,
        }
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl FormatConfig {
    /// Python-style `%g` output
    /// - Auto notation
    /// - Exponents as `e+03`
    pub const fn python_style() -> Self {
        Self::new(Notation::Auto, ExponentStyle::Padded)
    }

    /// Fixed-point only, trailing zeros padded as needed
    pub const fn fixed() -> Self {
        Self::new(Notation::Fixed, ExponentStyle::Compact)
    }

    /// Scientific only
    pub const fn scientific() -> Self {
        Self::new(Notation::Scientific, ExponentStyle::Compact)
    }
}
