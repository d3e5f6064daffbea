// ============================================================================
// Numeric Module
// Error types and decimal rounding shared by the significance engine
// ============================================================================
//
// This module provides:
// - SigFigError: Error type for parsing, construction and math domains
// - RoundedDigits: Half-even rounding of an f64's decimal representation
//
// Design principles:
// - Stored values are never rounded; rounding happens only here
// - Ties are resolved on the shortest round-trip decimal string of the f64
// - All fallible operations return Result (no panics)

mod errors;
pub mod rounding;

pub use errors::{DomainErrorKind, ParseErrorKind, SigFigError, SigFigResult};
pub use rounding::{round_to_decimal_places, round_to_sig_figs, RoundedDigits};
