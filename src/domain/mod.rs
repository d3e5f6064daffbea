// ============================================================================
// Domain Models Module
// Tracked quantities, their significance metadata and display configuration
// ============================================================================

pub mod config;
pub mod quantity;
pub mod significance;

pub use config::{ExponentStyle, FormatConfig, Notation};
pub use quantity::{mean, SigFig};
pub use significance::Significance;
