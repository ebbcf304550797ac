// ============================================================================
// Native Overflow Strategy
// Compiler-intrinsic overflowing arithmetic
// ============================================================================

use super::traits::OverflowArithmetic;
use crate::numeric::Integer;

/// Native strategy.
///
/// Delegates to the primitive `overflowing_*` methods, which lower to the
/// compiler's checked-arithmetic intrinsics (a single instruction plus a
/// flag read on mainstream targets).
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOverflow;

impl OverflowArithmetic for NativeOverflow {
    #[inline(always)]
    fn add_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        a.overflowing_add(b)
    }

    #[inline(always)]
    fn sub_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        a.overflowing_sub(b)
    }

    #[inline(always)]
    fn mul_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        a.overflowing_mul(b)
    }

    fn name() -> &'static str {
        "Native"
    }
}
