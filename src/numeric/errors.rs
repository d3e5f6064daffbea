// ============================================================================
// Significance Errors
// Error types for parsing, constructing and operating on tracked quantities
// ============================================================================

use std::fmt;

/// Why a literal could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Nothing but whitespace
    Empty,
    /// Sign, point or exponent without any mantissa digit
    NoDigits,
    /// More than one `.` in the mantissa
    MultipleDecimalPoints,
    /// Character outside `[0-9+-.eE]` or in the wrong place
    InvalidCharacter,
    /// Exponent suffix without digits or too large for `i32`
    InvalidExponent,
    /// Literal overflows `f64`, or its nonzero digits underflow to zero
    OutOfRange,
}

/// Which math function rejected its argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomainErrorKind {
    /// Square root of a negative value
    NegativeSqrt,
    /// Logarithm of zero or a negative value
    NonPositiveLog,
    /// Logarithm base that is not positive, is one, or is not finite
    InvalidLogBase,
}

/// Errors that can occur while building or operating on a [`SigFig`](crate::SigFig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SigFigError {
    /// Literal cannot be interpreted as a number
    Parse(ParseErrorKind),
    /// `mean` called without any quantity
    EmptyInput,
    /// Argument outside the domain of `sqrt` or `log`
    Domain(DomainErrorKind),
    /// Significant-figure count below one
    InvalidSigFigs,
    /// Rejected display configuration
    InvalidConfig,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty literal"),
            ParseErrorKind::NoDigits => write!(f, "literal contains no digits"),
            ParseErrorKind::MultipleDecimalPoints => {
                write!(f, "literal contains more than one decimal point")
            },
            ParseErrorKind::InvalidCharacter => write!(f, "literal contains a non-numeric character"),
            ParseErrorKind::InvalidExponent => write!(f, "malformed exponent suffix"),
            ParseErrorKind::OutOfRange => write!(f, "literal is out of floating-point range"),
        }
    }
}

impl fmt::Display for DomainErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainErrorKind::NegativeSqrt => write!(f, "square root of a negative value"),
            DomainErrorKind::NonPositiveLog => write!(f, "logarithm of a non-positive value"),
            DomainErrorKind::InvalidLogBase => write!(f, "invalid logarithm base"),
        }
    }
}

impl fmt::Display for SigFigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigFigError::Parse(kind) => write!(f, "parse error: {}", kind),
            SigFigError::EmptyInput => write!(f, "empty input: mean of zero quantities"),
            SigFigError::Domain(kind) => write!(f, "domain error: {}", kind),
            SigFigError::InvalidSigFigs => {
                write!(f, "invalid significant figures: count must be at least 1")
            },
            SigFigError::InvalidConfig => write!(f, "invalid format configuration"),
        }
    }
}

impl std::error::Error for SigFigError {}

impl From<ParseErrorKind> for SigFigError {
    fn from(kind: ParseErrorKind) -> Self {
        SigFigError::Parse(kind)
    }
}

impl From<DomainErrorKind> for SigFigError {
    fn from(kind: DomainErrorKind) -> Self {
        SigFigError::Domain(kind)
    }
}

/// Result type alias for significance operations
pub type SigFigResult<T> = Result<T, SigFigError>;
