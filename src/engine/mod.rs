// ============================================================================
// Engine Module
// Parser, significance propagator and renderer behind every SigFig operation
// ============================================================================

pub mod parser;
pub mod propagator;
pub mod renderer;

pub use parser::{parse, ParsedLiteral};
pub use propagator::{BinaryOp, Operand, Precision};
pub use renderer::{render, render_decimal, render_with};
