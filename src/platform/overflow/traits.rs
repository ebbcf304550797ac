// ============================================================================
// Overflow Strategy Trait
// Abstract interface for overflow-detecting add/sub/mul
// ============================================================================

use crate::numeric::Integer;

/// A way of computing `(truncated result, overflowed)` for the three basic
/// arithmetic operations.
///
/// Implementations are zero-sized policies, so they can be chosen at compile
/// time (`PortableOverflow::mul_overflow(a, b)`) or through
/// [`OverflowStrategy`](super::OverflowStrategy) at run time. Every
/// implementation must agree bit-for-bit with every other, including the flag.
///
/// # Contract
/// - The returned value is always the truncated two's-complement result,
///   even when the flag is `true`.
/// - The flag is `true` exactly when the mathematical result lies outside
///   `[T::MIN, T::MAX]`.
pub trait OverflowArithmetic {
    /// `a + b` with overflow flag.
    fn add_overflow<T: Integer>(a: T, b: T) -> (T, bool);

    /// `a - b` with overflow flag.
    fn sub_overflow<T: Integer>(a: T, b: T) -> (T, bool);

    /// `a * b` with overflow flag.
    fn mul_overflow<T: Integer>(a: T, b: T) -> (T, bool);

    /// Get the name of this strategy.
    ///
    /// Used for logging, debugging, and benchmarking.
    fn name() -> &'static str;
}
