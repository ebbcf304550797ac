// ============================================================================
// Numeric Module
// Generic integer primitives for every fixed-width integer type
// ============================================================================
//
// This module provides:
// - Integer: capability trait (bounds, width, wrapping/overflowing ops)
// - mean: overflow-safe floor mean
// - isqrt / checked_isqrt: exact floor square root
// - diagnostics: thread-local domain-error channel used by isqrt
// - NumericError: Error types for checked operations
//
// Design principles:
// - No floating-point operations
// - No allocation, no shared mutable state
// - Overflow is reported, never a panic

pub mod diagnostics;
mod errors;
mod integer;
mod mean;
mod sqrt;

pub use errors::{NumericError, NumericResult};
pub use integer::Integer;
pub use mean::mean;
pub use sqrt::{checked_isqrt, isqrt, isqrt_with};
