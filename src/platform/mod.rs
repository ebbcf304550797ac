// ============================================================================
// Platform Module
// Target-dependent selection of arithmetic strategies
//
// This module contains:
// - Overflow: native (intrinsic) and portable overflow detection
//
// Usage:
// ```ignore
// use intmath::platform::{OverflowStrategy, PortableOverflow, OverflowArithmetic};
// ```
// ============================================================================

pub mod overflow;

// Re-export overflow types at platform level for convenience
pub use overflow::{
    add_overflow, checked_add, checked_mul, checked_sub, mul_overflow, sub_overflow,
    NativeOverflow, OverflowArithmetic, OverflowStrategy, PortableOverflow,
};
