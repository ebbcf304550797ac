// ============================================================================
// Overflow-Safe Mean
// ============================================================================

use super::integer::Integer;

/// Floor of the arithmetic mean `(a + b) / 2`, computed without forming `a + b`.
///
/// Each operand is halved with an arithmetic shift (floor division by two for
/// both signednesses). The two dropped low bits only add up to a whole unit
/// when both operands are odd, which `a & b & 1` restores.
///
/// # Example
/// ```
/// use intmath::mean;
///
/// assert_eq!(mean(u8::MAX, u8::MAX), u8::MAX);
/// assert_eq!(mean(i32::MIN, i32::MIN), i32::MIN);
/// assert_eq!(mean(-3i8, 0), -2);
/// ```
#[inline]
pub fn mean<T: Integer>(a: T, b: T) -> T {
    (a >> 1) + (b >> 1) + (a & b & T::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    fn boundary_cases<T: Integer>() {
        let max = T::MAX;
        let min = T::MIN;
        let cases = [
            (T::ZERO, T::ZERO, T::ZERO),
            (T::ONE, T::ZERO, T::ZERO),
            (T::ONE, T::ONE, T::ONE),
            (T::ZERO, max, max / T::TWO),
            (T::ONE, max, max / T::TWO + T::ONE),
            (max, max, max),
            (T::ZERO, min, min / T::TWO),
            (T::ONE, min, min / T::TWO),
            (min, min, min),
        ];

        for (a, b, expected) in cases {
            assert_eq!(mean(a, b), expected, "mean({}, {})", a, b);
            assert_eq!(mean(b, a), expected, "mean({}, {})", b, a);
        }
    }

    #[test]
    fn test_mean_boundaries_all_widths() {
        boundary_cases::<i8>();
        boundary_cases::<u8>();
        boundary_cases::<i16>();
        boundary_cases::<u16>();
        boundary_cases::<i32>();
        boundary_cases::<u32>();
        boundary_cases::<i64>();
        boundary_cases::<u64>();
        boundary_cases::<isize>();
        boundary_cases::<usize>();
    }

    #[test]
    fn test_mean_exhaustive_i8() {
        for a in i8::MIN..=i8::MAX {
            for b in i8::MIN..=i8::MAX {
                let expected = (a as i16 + b as i16).div_euclid(2) as i8;
                assert_eq!(mean(a, b), expected, "mean({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_mean_exhaustive_u8() {
        for a in u8::MIN..=u8::MAX {
            for b in u8::MIN..=u8::MAX {
                let expected = ((a as u16 + b as u16) / 2) as u8;
                assert_eq!(mean(a, b), expected, "mean({}, {})", a, b);
            }
        }
    }

    #[test]
    fn test_mean_negative_odd_pairs_floor() {
        assert_eq!(mean(-1i32, -1), -1);
        assert_eq!(mean(-1i32, 0), -1);
        assert_eq!(mean(-3i64, -5), -4);
        assert_eq!(mean(i64::MIN, i64::MAX), -1);
    }

    #[test]
    fn test_mean_commutative_quickcheck() {
        fn prop_i64(a: i64, b: i64) -> bool {
            mean(a, b) == mean(b, a)
        }
        fn prop_u32(a: u32, b: u32) -> bool {
            mean(a, b) == mean(b, a)
        }
        quickcheck(prop_i64 as fn(i64, i64) -> bool);
        quickcheck(prop_u32 as fn(u32, u32) -> bool);
    }

    #[test]
    fn test_mean_matches_widened_quickcheck() {
        fn prop(a: i64, b: i64) -> bool {
            let expected = (a as i128 + b as i128).div_euclid(2) as i64;
            mean(a, b) == expected
        }
        quickcheck(prop as fn(i64, i64) -> bool);
    }
}
