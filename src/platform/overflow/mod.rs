// ============================================================================
// Overflow Detection Module
// Interchangeable strategies for overflow-detecting arithmetic
//
// Strategies:
// - Native: compiler-intrinsic overflowing arithmetic
// - Portable: wrap-around arithmetic plus range comparisons
// ============================================================================

mod detector;
mod native;
mod portable;
mod traits;

pub use detector::{
    add_overflow, checked_add, checked_mul, checked_sub, mul_overflow, sub_overflow,
    OverflowStrategy,
};
pub use native::NativeOverflow;
pub use portable::PortableOverflow;
pub use traits::OverflowArithmetic;
