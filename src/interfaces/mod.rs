// ============================================================================
// Interfaces Module
// The processor contract and ready-made processors
// ============================================================================

mod processor;
mod write;

pub use processor::{NoOpProcessor, Processor, TracingProcessor};
pub use write::{GridWrite, LinearWrite};
