// ============================================================================
// Significance Propagator
// Derives the precision of an operation's result from its operands
// ============================================================================
//
// Rules:
// - Add/Sub: the fewest decimal places wins; figures are counted afterwards
// - Mul/Div/Rem/FloorDiv: the fewest significant figures wins
// - Sqrt/Pow: the operand's precision is kept
// - Log: the operand's figure count becomes the decimal places of the result
// - Mean: the fewest significant figures among all inputs wins
//
// Untracked (plain) operands are exact and never constrain a result.

use crate::domain::Significance;
use crate::numeric::rounding;

/// Resolved precision of a tracked operand at the time of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    pub sig_figs: u32,
    pub decimal_places: i32,
}

/// One side of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A quantity with tracked significance
    Tracked(Precision),
    /// A plain number, treated as exact
    Untracked,
}

impl Operand {
    #[inline]
    pub const fn precision(self) -> Option<Precision> {
        match self {
            Operand::Tracked(precision) => Some(precision),
            Operand::Untracked => None,
        }
    }
}

/// Binary operator tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    /// Remainder with the sign of the dividend, like `f64 % f64`
    Rem,
    /// Quotient rounded toward negative infinity
    FloorDiv,
}

impl BinaryOp {
    /// Whether decimal alignment, rather than figure count, governs the result
    #[inline]
    pub const fn is_additive(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub)
    }

    /// Raw floating-point result
    #[inline]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Rem => lhs % rhs,
            BinaryOp::FloorDiv => (lhs / rhs).floor(),
        }
    }
}

/// Significance of `tracked <op> other` (operand order does not matter for
/// precision). `result` is the raw float result, needed to count digits
/// after decimal alignment.
pub fn binary(op: BinaryOp, tracked: Precision, other: Operand, result: f64) -> Significance {
    let operands = [Some(tracked), other.precision()];
    let precisions = operands.iter().flatten().copied();

    let significance = if op.is_additive() && result.is_finite() {
        aligned(precisions, result)
    } else {
        least_significant(precisions)
    };

    tracing::trace!(?op, ?tracked, ?other, result, ?significance, "propagated binary significance");
    significance
}

/// Roots keep the operand's precision.
pub fn sqrt(operand: Precision) -> Significance {
    preserved(operand)
}

/// Powers keep the operand's precision.
pub fn pow(operand: Precision) -> Significance {
    preserved(operand)
}

/// Logarithms in any base: the characteristic carries no precision, so the
/// mantissa shows as many decimal places as the operand had figures.
pub fn log(operand: Precision, result: f64) -> Significance {
    let significance = if result.is_finite() {
        let decimal_places = operand.sig_figs.min(rounding::MAX_DIGITS) as i32;
        Significance::counted(result, decimal_places)
    } else {
        preserved(operand)
    };

    tracing::trace!(?operand, result, ?significance, "propagated log significance");
    significance
}

/// Mean of several tracked quantities.
///
/// Returns `None` when `operands` is empty.
pub fn mean(operands: impl IntoIterator<Item = Precision>) -> Option<Significance> {
    let mut operands = operands.into_iter().peekable();
    operands.peek()?;
    let significance = least_significant(operands);

    tracing::trace!(?significance, "propagated mean significance");
    Some(significance)
}

/// Add/Sub rule.
fn aligned(precisions: impl Iterator<Item = Precision>, result: f64) -> Significance {
    let decimal_places = precisions
        .map(|p| p.decimal_places)
        .min()
        .unwrap_or(i32::MAX);
    Significance::counted(result, decimal_places)
}

/// Mul/Div rule, shared by mean and non-finite sums.
///
/// A zero-figure operand (a value that rounds to zero) anchors the result at
/// its own decimal position instead.
fn least_significant(precisions: impl Iterator<Item = Precision>) -> Significance {
    let mut min_figs = u32::MAX;
    let mut zero_places: Option<i32> = None;

    for p in precisions {
        min_figs = min_figs.min(p.sig_figs);
        if p.sig_figs == 0 {
            zero_places = Some(zero_places.map_or(p.decimal_places, |dp| dp.min(p.decimal_places)));
        }
    }

    match zero_places {
        Some(decimal_places) => Significance::figures_or_places(0, decimal_places),
        None => Significance::Figures(min_figs),
    }
}

fn preserved(operand: Precision) -> Significance {
    Significance::figures_or_places(operand.sig_figs, operand.decimal_places)
}
