// ============================================================================
// Portable Overflow Strategy
// Wrap-around arithmetic plus range comparisons, no intrinsics
// ============================================================================

use super::traits::OverflowArithmetic;
use crate::numeric::Integer;

/// Portable strategy.
///
/// The truncated result comes from wrapping arithmetic; the flag is decided
/// separately by comparing the operands against the type bounds, so no
/// intermediate ever leaves `[T::MIN, T::MAX]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PortableOverflow;

impl PortableOverflow {
    /// Create a new portable strategy.
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn add_overflows<T: Integer>(a: T, b: T) -> bool {
        if T::IS_SIGNED {
            (b > T::ZERO && a > T::MAX - b) || (b < T::ZERO && a < T::MIN - b)
        } else {
            a > T::MAX - b
        }
    }

    #[inline]
    fn sub_overflows<T: Integer>(a: T, b: T) -> bool {
        if T::IS_SIGNED {
            (b < T::ZERO && a > T::MAX + b) || (b > T::ZERO && a < T::MIN + b)
        } else {
            a < b
        }
    }

    #[inline]
    fn mul_overflows<T: Integer>(a: T, b: T) -> bool {
        if a == T::ZERO || b == T::ZERO {
            return false;
        }

        if !T::IS_SIGNED {
            return a > T::MAX / b;
        }

        // -1 is the only divisor for which MIN / d itself overflows
        let minus_one = T::minus_one();
        if a == minus_one {
            return b == T::MIN;
        }
        if b == minus_one {
            return a == T::MIN;
        }

        // Truncating division rounds toward zero, which is the ceiling for
        // negative quotients and the floor for positive ones; both keep the
        // strict comparisons exact.
        match (a < T::ZERO, b < T::ZERO) {
            // a * b > MAX
            (true, true) => a < T::MAX / b,
            // a * b < MIN
            (true, false) => a < T::MIN / b,
            (false, true) => b < T::MIN / a,
            // a * b > MAX
            (false, false) => a > T::MAX / b,
        }
    }
}

impl OverflowArithmetic for PortableOverflow {
    #[inline]
    fn add_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        (a.wrapping_add(b), Self::add_overflows(a, b))
    }

    #[inline]
    fn sub_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        (a.wrapping_sub(b), Self::sub_overflows(a, b))
    }

    #[inline]
    fn mul_overflow<T: Integer>(a: T, b: T) -> (T, bool) {
        (a.wrapping_mul(b), Self::mul_overflows(a, b))
    }

    fn name() -> &'static str {
        "Portable"
    }
}
