// ============================================================================
// SigFig Library
// Significant-figure tracking arithmetic with half-even rounding
// ============================================================================

//! # SigFig
//!
//! Quantities that carry their measurement precision through arithmetic.
//!
//! ## Features
//!
//! - **Literal parsing** that counts significant figures (`"0.00230"` has 3)
//! - **Significance propagation**: decimal alignment for sums, fewest figures
//!   for products, quotients and means, mantissa digits for logarithms
//! - **Unrounded storage**: values are only rounded when displayed, so chained
//!   calculations do not accumulate round-off
//! - **Half-even rounding** on the shortest decimal form of each value
//! - **Plain-number operands** that never limit precision
//!
//! ## Example
//!
//! ```rust
//! use sigfig::prelude::*;
//!
//! let a: SigFig = "8.03".parse()?;
//! let b = SigFig::parse("3.2")?;
//! assert_eq!((a * b).to_string(), "26");
//!
//! let c = SigFig::parse("8.08")?;
//! assert_eq!((c + SigFig::parse("2.1")?).to_string(), "10.2");
//! assert_eq!((c / c).to_string(), "1.00");
//!
//! let m = mean(&[c, SigFig::parse("8.0")?, SigFig::parse("8.1053")?])?;
//! assert_eq!(m.to_string(), "8.1");
//!
//! assert_eq!(SigFig::parse("10.00")?.log(10.0)?.to_string(), "1.0000");
//! assert_eq!(format!("{:?}", SigFig::new(13.32, 4)?), "SigFig(13.32, 4)");
//! # Ok::<(), SigFigError>(())
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

#[cfg(test)]
mod proptests;

pub use domain::{mean, ExponentStyle, FormatConfig, Notation, SigFig, Significance};
pub use numeric::{DomainErrorKind, ParseErrorKind, SigFigError, SigFigResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{mean, ExponentStyle, FormatConfig, Notation, SigFig, Significance};
    pub use crate::numeric::{DomainErrorKind, ParseErrorKind, SigFigError, SigFigResult};
}
