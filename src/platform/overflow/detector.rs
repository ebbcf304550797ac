// ============================================================================
// Overflow Strategy Selection
// Build-time detection of the preferred strategy and run-time dispatch
// ============================================================================

use super::native::NativeOverflow;
use super::portable::PortableOverflow;
use super::traits::OverflowArithmetic;
use crate::numeric::{Integer, NumericError, NumericResult};

/// Overflow-detection strategy, selectable per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverflowStrategy {
    /// Compiler-intrinsic overflowing arithmetic
    Native,
    /// Wrap-around arithmetic with range comparisons
    Portable,
}

impl OverflowStrategy {
    /// Whether this build may use the native strategy.
    ///
    /// The `portable-overflow` feature compiles the intrinsic path out of
    /// strategy detection so the portable code is exercised everywhere.
    #[inline]
    pub const fn native_available() -> bool {
        !cfg!(feature = "portable-overflow")
    }

    /// The preferred strategy for this build.
    #[inline]
    pub const fn detect() -> Self {
        if Self::native_available() {
            OverflowStrategy::Native
        } else {
            OverflowStrategy::Portable
        }
    }

    /// Name of the strategy implementation.
    pub fn name(self) -> &'static str {
        match self {
            OverflowStrategy::Native => NativeOverflow::name(),
            OverflowStrategy::Portable => PortableOverflow::name(),
        }
    }

    /// `a + b` with overflow flag.
    #[inline]
    pub fn add<T: Integer>(self, a: T, b: T) -> (T, bool) {
        match self {
            OverflowStrategy::Native => NativeOverflow::add_overflow(a, b),
            OverflowStrategy::Portable => PortableOverflow::add_overflow(a, b),
        }
    }

    /// `a - b` with overflow flag.
    #[inline]
    pub fn sub<T: Integer>(self, a: T, b: T) -> (T, bool) {
        match self {
            OverflowStrategy::Native => NativeOverflow::sub_overflow(a, b),
            OverflowStrategy::Portable => PortableOverflow::sub_overflow(a, b),
        }
    }

    /// `a * b` with overflow flag.
    #[inline]
    pub fn mul<T: Integer>(self, a: T, b: T) -> (T, bool) {
        match self {
            OverflowStrategy::Native => NativeOverflow::mul_overflow(a, b),
            OverflowStrategy::Portable => PortableOverflow::mul_overflow(a, b),
        }
    }
}

impl Default for OverflowStrategy {
    fn default() -> Self {
        Self::detect()
    }
}

impl std::fmt::Display for OverflowStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverflowStrategy::Native => write!(f, "Native (compiler intrinsic)"),
            OverflowStrategy::Portable => write!(f, "Portable (range comparison)"),
        }
    }
}

/// `a + b` as `(truncated result, overflowed)`.
///
/// # Example
/// ```
/// use intmath::{add_overflow, OverflowStrategy};
///
/// assert_eq!(add_overflow(250u8, 10, OverflowStrategy::Native), (4, true));
/// assert_eq!(add_overflow(250u8, 10, OverflowStrategy::Portable), (4, true));
/// ```
#[inline]
pub fn add_overflow<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> (T, bool) {
    strategy.add(a, b)
}

/// `a - b` as `(truncated result, overflowed)`.
#[inline]
pub fn sub_overflow<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> (T, bool) {
    strategy.sub(a, b)
}

/// `a * b` as `(truncated result, overflowed)`.
///
/// # Example
/// ```
/// use intmath::{mul_overflow, OverflowStrategy};
///
/// let strategy = OverflowStrategy::detect();
/// assert!(mul_overflow(-1i32, i32::MIN, strategy).1);
/// assert!(!mul_overflow(1i32, i32::MIN, strategy).1);
/// ```
#[inline]
pub fn mul_overflow<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> (T, bool) {
    strategy.mul(a, b)
}

/// Checked addition.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the result is out of range.
#[inline]
pub fn checked_add<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> NumericResult<T> {
    match strategy.add(a, b) {
        (value, false) => Ok(value),
        // Sums only leave the range on the side of the addend's sign
        (_, true) if b > T::ZERO => Err(NumericError::Overflow),
        (_, true) => Err(NumericError::Underflow),
    }
}

/// Checked subtraction.
///
/// # Errors
/// Returns `Overflow` or `Underflow` if the result is out of range.
#[inline]
pub fn checked_sub<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> NumericResult<T> {
    match strategy.sub(a, b) {
        (value, false) => Ok(value),
        (_, true) if b < T::ZERO => Err(NumericError::Overflow),
        (_, true) => Err(NumericError::Underflow),
    }
}

/// Checked multiplication.
///
/// # Errors
/// Returns `Overflow` if the true product is above `T::MAX`, `Underflow` if
/// it is below `T::MIN`.
#[inline]
pub fn checked_mul<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> NumericResult<T> {
    match strategy.mul(a, b) {
        (value, false) => Ok(value),
        (_, true) if a.is_negative() != b.is_negative() => Err(NumericError::Underflow),
        (_, true) => Err(NumericError::Overflow),
    }
}
