// ============================================================================
// Integer Capability
// Bounds, width and primitive operations shared by every fixed-width integer
// ============================================================================

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{Add, BitAnd, Div, Mul, Shr, Sub};

/// A fixed-width primitive integer, signed or unsigned.
///
/// This is a capability bound, not a numeric tower: it exposes exactly what
/// the primitives in this crate need (bounds, width, wrapping and
/// intrinsic overflowing arithmetic) so they can be written once and
/// instantiated for every width.
///
/// # Example
/// ```
/// use intmath::numeric::Integer;
///
/// fn span<T: Integer>() -> (T, T) {
///     (T::MIN, T::MAX)
/// }
///
/// assert_eq!(span::<i8>(), (-128, 127));
/// assert_eq!(<u16 as Integer>::DIGITS, 16);
/// assert_eq!(<i16 as Integer>::DIGITS, 15);
/// ```
pub trait Integer:
    Copy
    + Eq
    + Ord
    + Hash
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + Shr<u32, Output = Self>
    + 'static
{
    /// Smallest representable value
    const MIN: Self;
    /// Largest representable value
    const MAX: Self;
    /// 0
    const ZERO: Self;
    /// 1
    const ONE: Self;
    /// 2
    const TWO: Self;
    /// Storage width in bits
    const BITS: u32;
    /// Number of value bits (excludes the sign bit)
    const DIGITS: u32;
    /// Whether the type is two's-complement signed
    const IS_SIGNED: bool;

    /// Truncated sum.
    fn wrapping_add(self, rhs: Self) -> Self;
    /// Truncated difference.
    fn wrapping_sub(self, rhs: Self) -> Self;
    /// Truncated product.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Compiler-intrinsic sum with overflow flag.
    fn overflowing_add(self, rhs: Self) -> (Self, bool);
    /// Compiler-intrinsic difference with overflow flag.
    fn overflowing_sub(self, rhs: Self) -> (Self, bool);
    /// Compiler-intrinsic product with overflow flag.
    fn overflowing_mul(self, rhs: Self) -> (Self, bool);

    /// `true` for values below zero. Always `false` for unsigned types.
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// The all-ones bit pattern: `-1` for signed types, `MAX` for unsigned.
    #[inline]
    fn minus_one() -> Self {
        Self::ZERO.wrapping_sub(Self::ONE)
    }
}

macro_rules! impl_integer {
    ($signed:expr => $($t:ty),*) => {$(
        impl Integer for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const TWO: Self = 2;
            const BITS: u32 = <$t>::BITS;
            const DIGITS: u32 = <$t>::BITS - $signed as u32;
            const IS_SIGNED: bool = $signed;

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline(always)]
            fn overflowing_add(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_add(self, rhs)
            }

            #[inline(always)]
            fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_sub(self, rhs)
            }

            #[inline(always)]
            fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
                <$t>::overflowing_mul(self, rhs)
            }
        }
    )*};
}

impl_integer!(true => i8, i16, i32, i64, isize);
impl_integer!(false => u8, u16, u32, u64, usize);
