// ============================================================================
// Engine Module
// Clipping, delta computation and N-dimensional traversal
// ============================================================================

mod plan;
mod scale;
mod traverse;

pub use plan::Plan;
pub use scale::{scale, scale_with};
