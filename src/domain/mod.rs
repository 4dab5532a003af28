// ============================================================================
// Domain Models Module
// Coordinate value types and scaling configuration
// ============================================================================

pub mod area;
pub mod config;
pub mod point;

pub use area::{Area, Bands, DstArea, Mask, SrcArea};
pub use config::{ScaleConfig, ScaleError, ScaleResult};
pub use point::{DstPoint, Point, SrcPoint};
