// ============================================================================
// Numeric Module
// Binary fixed-point arithmetic for drift-free coordinate stepping
// ============================================================================
//
// This module provides:
// - FixedPoint<P>: 32-bit fixed-point number with P fractional bits
// - Fixed32: the Q16.15 instance used by the scaling engine
// - fixed32(): literal helper taking an integer part and decimal digits
// - NumericError: Error types for the checked operations
//
// Design principles:
// - No floating-point operations
// - Multiplication and division widen to i64 before rescaling
// - Checked variants return Result, operators follow integer semantics

mod errors;
mod fixed_point;

pub use errors::{NumericError, NumericResult};
pub use fixed_point::{fixed32, Fixed32, FixedPoint};
