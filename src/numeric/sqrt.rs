// ============================================================================
// Integer Square Root
// Exact floor square root by bisection, no floating point
// ============================================================================

use super::diagnostics;
use super::errors::{NumericError, NumericResult};
use super::integer::Integer;
use crate::platform::OverflowStrategy;

/// Floor square root, `⌊√val⌋`.
///
/// Negative input (signed types only) is a domain error: it is recorded in
/// the calling thread's [`diagnostics`] (error code `Domain`, flag `INVALID`)
/// and `-1` is returned. Use [`checked_isqrt`] to get the error as a value
/// instead.
///
/// # Example
/// ```
/// use intmath::isqrt;
/// use intmath::numeric::diagnostics::{self, MathErrorKind};
///
/// assert_eq!(isqrt(15u32), 3);
/// assert_eq!(isqrt(16u32), 4);
/// assert_eq!(isqrt(u64::MAX), u32::MAX as u64);
///
/// diagnostics::clear();
/// assert_eq!(isqrt(-9i16), -1);
/// assert_eq!(diagnostics::last_error(), Some(MathErrorKind::Domain));
/// ```
#[inline]
pub fn isqrt<T: Integer>(val: T) -> T {
    isqrt_with(val, OverflowStrategy::detect())
}

/// [`isqrt`] evaluating candidate squares with an explicit overflow strategy.
pub fn isqrt_with<T: Integer>(val: T, strategy: OverflowStrategy) -> T {
    match floor_root(val, strategy) {
        Some(root) => root,
        None => {
            diagnostics::record_domain_error();
            tracing::debug!(value = %val, "isqrt: negative argument, returning -1");
            T::minus_one()
        },
    }
}

/// Floor square root with the domain error returned as a value.
///
/// Leaves the thread's diagnostics untouched.
///
/// # Errors
/// Returns `DomainError` if `val` is negative.
#[inline]
pub fn checked_isqrt<T: Integer>(val: T) -> NumericResult<T> {
    floor_root(val, OverflowStrategy::detect()).ok_or(NumericError::DomainError)
}

/// Upper bound on the square root of any value of `T`.
///
/// `MAX >> (DIGITS / 2)` keeps the high half of the value bits, so adding
/// one lands strictly above `⌊√MAX⌋` while keeping `2 * bound` in range.
#[inline]
fn approx_max_root<T: Integer>() -> T {
    (T::MAX >> (T::DIGITS / 2)) + T::ONE
}

/// `None` for negative input, otherwise `Some(⌊√val⌋)`.
fn floor_root<T: Integer>(val: T, strategy: OverflowStrategy) -> Option<T> {
    if val.is_negative() {
        return None;
    }
    if val == T::ZERO {
        return Some(T::ZERO);
    }
    if val < T::TWO + T::TWO {
        return Some(T::ONE);
    }

    // Invariant: left <= root < right, except right == left == root for val in [4, 5]
    let mut left = T::TWO;
    let mut right = (val / T::TWO).min(approx_max_root::<T>());

    while right - left >= T::TWO {
        let middle = (left + right) / T::TWO;
        let (square, overflowed) = strategy.mul(middle, middle);

        if overflowed || square > val {
            right = middle;
        } else if square < val {
            left = middle;
        } else {
            return Some(middle);
        }
    }

    Some(left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::diagnostics::{FpExceptions, MathErrorKind};
    use proptest::prelude::*;

    /// Bit-by-bit reference root over u128.
    fn reference_root(v: u128) -> u128 {
        let mut result = 0u128;
        let mut bit = 1u128 << 126;
        let mut rem = v;
        while bit > rem {
            bit >>= 2;
        }
        while bit != 0 {
            if rem >= result + bit {
                rem -= result + bit;
                result = (result >> 1) + bit;
            } else {
                result >>= 1;
            }
            bit >>= 2;
        }
        result
    }

    fn assert_brackets(v: u128, root: u128) {
        assert!(root * root <= v, "{}^2 > {}", root, v);
        assert!((root + 1) * (root + 1) > v, "({} + 1)^2 <= {}", root, v);
    }

    #[test]
    fn test_reference_root() {
        assert_eq!(reference_root(0), 0);
        assert_eq!(reference_root(24), 4);
        assert_eq!(reference_root(25), 5);
        assert_eq!(reference_root(u64::MAX as u128), u32::MAX as u128);
    }

    macro_rules! fixed_cases {
        ($($name:ident: $t:ty),* $(,)?) => {$(
            #[test]
            fn $name() {
                let max = <$t>::MAX;
                let cases: [($t, $t); 5] = [
                    (0, 0),
                    (1, 1),
                    (3, 1),
                    (4, 2),
                    (max, reference_root(max as u128) as $t),
                ];
                for (val, expected) in cases {
                    assert_eq!(isqrt(val), expected, "{}: case {}", stringify!($t), val);
                    assert_eq!(checked_isqrt(val), Ok(expected));
                }
            }
        )*};
    }

    fixed_cases! {
        test_fixed_cases_i8: i8,
        test_fixed_cases_u8: u8,
        test_fixed_cases_i16: i16,
        test_fixed_cases_u16: u16,
        test_fixed_cases_i32: i32,
        test_fixed_cases_u32: u32,
        test_fixed_cases_i64: i64,
        test_fixed_cases_u64: u64,
        test_fixed_cases_isize: isize,
        test_fixed_cases_usize: usize,
    }

    macro_rules! negative_cases {
        ($($name:ident: $t:ty),* $(,)?) => {$(
            #[test]
            fn $name() {
                for val in [-1 as $t, -4, <$t>::MIN] {
                    diagnostics::clear();
                    assert_eq!(isqrt(val), -1, "{}: case {}", stringify!($t), val);
                    assert_eq!(diagnostics::last_error(), Some(MathErrorKind::Domain));
                    assert!(diagnostics::test_exceptions(FpExceptions::INVALID));

                    diagnostics::clear();
                    assert_eq!(checked_isqrt(val), Err(NumericError::DomainError));
                    assert_eq!(diagnostics::last_error(), None);
                }
            }
        )*};
    }

    negative_cases! {
        test_negative_i8: i8,
        test_negative_i16: i16,
        test_negative_i32: i32,
        test_negative_i64: i64,
        test_negative_isize: isize,
    }

    #[test]
    fn test_non_negative_input_leaves_diagnostics_clean() {
        diagnostics::clear();
        assert_eq!(isqrt(0i32), 0);
        assert_eq!(isqrt(i32::MAX), 46_340);
        assert_eq!(diagnostics::take(), diagnostics::Diagnostics::default());
    }

    #[test]
    fn test_exhaustive_8bit() {
        for v in u8::MIN..=u8::MAX {
            assert_brackets(v as u128, isqrt(v) as u128);
        }
        for v in 0..=i8::MAX {
            assert_brackets(v as u128, isqrt(v) as u128);
        }
    }

    #[test]
    fn test_exhaustive_16bit() {
        for v in u16::MIN..=u16::MAX {
            assert_brackets(v as u128, isqrt(v) as u128);
        }
        for v in 0..=i16::MAX {
            assert_brackets(v as u128, isqrt(v) as u128);
        }
    }

    #[test]
    fn test_strategies_agree_exhaustive_16bit() {
        for v in u16::MIN..=u16::MAX {
            assert_eq!(
                isqrt_with(v, OverflowStrategy::Native),
                isqrt_with(v, OverflowStrategy::Portable)
            );
        }
        for v in i16::MIN..=i16::MAX {
            assert_eq!(
                isqrt_with(v, OverflowStrategy::Native),
                isqrt_with(v, OverflowStrategy::Portable)
            );
        }
    }

    #[test]
    fn test_perfect_squares_near_top_u64() {
        for r in (u32::MAX as u64 - 1000)..=u32::MAX as u64 {
            let square = r * r;
            assert_eq!(isqrt(square), r);
            assert_eq!(isqrt(square - 1), r - 1);
            assert_eq!(isqrt(square + 1), r);
        }
        for v in (u64::MAX - 256)..=u64::MAX {
            assert_eq!(isqrt(v), u32::MAX as u64);
        }
    }

    #[test]
    fn test_perfect_squares_near_top_i64() {
        let top = reference_root(i64::MAX as u128) as i64;
        assert_eq!(top, 3_037_000_499);
        for r in (top - 1000)..=top {
            let square = r * r;
            assert_eq!(isqrt(square), r);
            assert_eq!(isqrt(square - 1), r - 1);
        }
    }

    #[test]
    fn test_approx_max_root_bounds_true_root() {
        assert_eq!(approx_max_root::<u8>(), 16);
        assert_eq!(approx_max_root::<i8>(), 16);
        assert_eq!(approx_max_root::<i32>(), 65_536);
        assert_eq!(approx_max_root::<u64>(), 1 << 32);
        assert!(approx_max_root::<i64>() as u128 > reference_root(i64::MAX as u128));
    }

    #[test]
    fn test_square_of_root_never_overflows() {
        for v in [u64::MAX, u64::MAX - 1, 1 << 63] {
            let r = isqrt(v);
            assert!(!OverflowStrategy::Native.mul(r, r).1);
            assert!(!OverflowStrategy::Portable.mul(r, r).1);
        }
        for v in [i8::MAX, 100, 121] {
            let r = isqrt(v);
            assert!(!OverflowStrategy::Portable.mul(r, r).1);
        }
    }

    macro_rules! bracket_proptest {
        ($($name:ident: $t:ty => $range:expr),* $(,)?) => {
            proptest! {
                #![proptest_config(ProptestConfig::with_cases(10_000))]
                $(
                    #[test]
                    fn $name(v in $range) {
                        let v: $t = v;
                        let root = isqrt(v);
                        let (r, w) = (root as u128, v as u128);
                        prop_assert!(r * r <= w);
                        prop_assert!((r + 1) * (r + 1) > w);
                        prop_assert_eq!(r, reference_root(w));
                        prop_assert!(!OverflowStrategy::detect().mul(root, root).1);
                        prop_assert_eq!(root, isqrt_with(v, OverflowStrategy::Portable));
                    }
                )*
            }
        };
    }

    bracket_proptest! {
        prop_brackets_i32: i32 => 0..=i32::MAX,
        prop_brackets_u32: u32 => any::<u32>(),
        prop_brackets_i64: i64 => 0..=i64::MAX,
        prop_brackets_u64: u64 => any::<u64>(),
        prop_brackets_isize: isize => 0..=isize::MAX,
        prop_brackets_usize: usize => any::<usize>(),
    }
}
