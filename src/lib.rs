// ============================================================================
// ndscale Library
// Fixed-point N-dimensional scaling traversal with mask clipping
// ============================================================================

//! # ndscale
//!
//! Walks every integer coordinate of an N-dimensional destination area and
//! pairs it with the matching fractional coordinate of a source area, calling
//! a [`Processor`](interfaces::Processor) for each pair.
//!
//! ## Features
//!
//! - **Arbitrary stretch and shrink** between source and destination extents
//! - **Mirroring** per axis by giving an axis a start greater than its end
//! - **Mask clipping** that never changes which source coordinate a surviving
//!   destination coordinate receives, so disjoint masks can be handed to
//!   independent workers
//! - **Drift-free stepping** using Q16.15 fixed-point accumulation
//! - **No allocation** in the engine; all state lives on the stack
//!
//! ## Example
//!
//! ```rust
//! use ndscale::prelude::*;
//!
//! // Shrink ten elements into five, nearest-below sampling
//! let src: Vec<u16> = (0..10).collect();
//! let mut dst = vec![0u32; 5];
//!
//! let area = DstArea::new([0], [5]);
//! scale(
//!     area,
//!     SrcArea::from_ints([0], [10]),
//!     &mut LinearWrite::new(&mut dst, &src),
//!     area,
//! );
//! assert_eq!(dst, vec![0, 2, 4, 6, 8]);
//!
//! // Same pass, mirrored, restricted to the first three elements
//! let mut mirrored = vec![0u32; 5];
//! let config = ScaleConfig::stretch(5, 10)
//!     .mirrored(0)
//!     .with_mask(DstArea::new([0], [3]));
//! scale_with(&config, &mut LinearWrite::new(&mut mirrored, &src));
//! assert_eq!(mirrored, vec![8, 6, 4, 0, 0]);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Area, DstArea, DstPoint, Mask, Point, ScaleConfig, ScaleError, SrcArea, SrcPoint,
    };
    pub use crate::engine::{scale, scale_with, Plan};
    pub use crate::interfaces::{
        GridWrite, LinearWrite, NoOpProcessor, Processor, TracingProcessor,
    };
    pub use crate::numeric::{fixed32, Fixed32, FixedPoint};
}
