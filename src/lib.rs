// ============================================================================
// Integer Math Library
// Overflow-safe, allocation-free integer primitives generic over width
// ============================================================================

//! # intmath
//!
//! Small integer-arithmetic primitives, generic over every fixed-width
//! primitive integer (`i8`..`i64`, `u8`..`u64`, `isize`, `usize`).
//!
//! ## Features
//!
//! - **Overflow-safe mean**: `mean(a, b)` is the floor of `(a + b) / 2`
//!   without ever forming `a + b`
//! - **Overflow-detecting arithmetic**: `add_overflow`, `sub_overflow` and
//!   `mul_overflow` return the truncated result plus an overflow flag, via
//!   either the native (intrinsic) or the portable (range comparison) strategy
//! - **Exact integer square root**: `isqrt` by bisection, no floating point
//! - **Thread-local diagnostics** for domain errors instead of global state
//!
//! All operations are pure, reentrant and never allocate.
//!
//! ## Example
//!
//! ```rust
//! use intmath::prelude::*;
//!
//! let strategy = OverflowStrategy::detect();
//!
//! assert_eq!(mean(u32::MAX, u32::MAX - 2), u32::MAX - 1);
//! assert_eq!(add_overflow(i8::MAX, 1, strategy), (i8::MIN, true));
//! assert_eq!(checked_mul(3u16, 7, strategy), Ok(21));
//! assert_eq!(isqrt(99u64), 9);
//!
//! diagnostics::clear();
//! assert_eq!(isqrt(-1i32), -1);
//! assert!(diagnostics::test_exceptions(FpExceptions::INVALID));
//! ```
//!
//! ## Cargo features
//!
//! - `portable-overflow`: make the portable strategy the detected default
//! - `serde`: (de)serialize configuration types
//! - `logging`: pulls in `tracing-subscriber` for the demos

pub mod config;
pub mod numeric;
pub mod platform;

pub use numeric::{checked_isqrt, isqrt, isqrt_with, mean, Integer, NumericError, NumericResult};
pub use platform::{
    add_overflow, checked_add, checked_mul, checked_sub, mul_overflow, sub_overflow,
    OverflowStrategy,
};

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{Arithmetic, ArithmeticConfig};
    pub use crate::numeric::diagnostics::{self, Diagnostics, FpExceptions, MathErrorKind};
    pub use crate::numeric::{
        checked_isqrt, isqrt, isqrt_with, mean, Integer, NumericError, NumericResult,
    };
    pub use crate::platform::{
        add_overflow, checked_add, checked_mul, checked_sub, mul_overflow, sub_overflow,
        NativeOverflow, OverflowArithmetic, OverflowStrategy, PortableOverflow,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::thread;

    fn generic_pipeline<T: Integer>(a: T, b: T, strategy: OverflowStrategy) -> Option<T> {
        // Mean of the operands, then the root of their checked product
        let m = mean(a, b);
        let product = checked_mul(a, b, strategy).ok()?;
        let root = checked_isqrt(product).ok()?;
        Some(m.max(root))
    }

    #[test]
    fn test_end_to_end_generic() {
        for strategy in [OverflowStrategy::Native, OverflowStrategy::Portable] {
            assert_eq!(generic_pipeline(4u8, 9, strategy), Some(6));
            assert_eq!(generic_pipeline(20u8, 20, strategy), None);
            assert_eq!(generic_pipeline(-4i32, 9, strategy), None);
            assert_eq!(generic_pipeline(1_000_000i64, 1_000_000, strategy), Some(1_000_000));
        }
    }

    #[test]
    fn test_concurrent_calls_isolated() {
        diagnostics::clear();

        let handles: Vec<_> = (0..8i64)
            .map(|i| {
                thread::spawn(move || {
                    diagnostics::clear();
                    let negative = i % 2 == 0;
                    let val = if negative { -i - 1 } else { i * i };
                    let root = isqrt(val);
                    let recorded = diagnostics::take();
                    (negative, root, recorded.error)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (negative, root, error) = handle.join().expect("worker panicked");
            if negative {
                assert_eq!(root, -1);
                assert_eq!(error, Some(MathErrorKind::Domain));
            } else {
                assert_eq!(root, i as i64);
                assert_eq!(error, None);
            }
        }

        // Nothing leaked into this thread
        assert_eq!(diagnostics::last_error(), None);
    }

    #[test]
    fn test_strategy_policies_at_compile_time() {
        fn square<S: OverflowArithmetic, T: Integer>(x: T) -> (T, bool) {
            S::mul_overflow(x, x)
        }

        assert_eq!(square::<NativeOverflow, u32>(65_536), (0, true));
        assert_eq!(square::<PortableOverflow, u32>(65_536), (0, true));
        assert_eq!(square::<PortableOverflow, i16>(181), (32_761, false));
    }
}
