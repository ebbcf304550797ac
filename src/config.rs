// ============================================================================
// Arithmetic Configuration
// Strategy and diagnostics settings, and the facade built from them
// ============================================================================

use crate::numeric::{self, diagnostics, Integer, NumericError, NumericResult};
use crate::platform::{self, OverflowStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for an [`Arithmetic`] instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArithmeticConfig {
    /// Strategy used by the overflow-detecting operations and by `isqrt`
    pub overflow_strategy: OverflowStrategy,

    /// Whether `isqrt` on a negative value writes the thread-local
    /// diagnostics. When false, only the `-1` sentinel reports the error.
    pub record_domain_errors: bool,
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self {
            overflow_strategy: OverflowStrategy::detect(),
            record_domain_errors: true,
        }
    }
}

impl ArithmeticConfig {
    /// Create a new configuration with the build's preferred strategy
    pub fn new() -> Self {
        Self::default()
    }

    /// Portable-only configuration, usable on every build
    pub fn portable() -> Self {
        Self::default().with_overflow_strategy(OverflowStrategy::Portable)
    }

    /// Builder method: Set the overflow strategy
    pub fn with_overflow_strategy(mut self, strategy: OverflowStrategy) -> Self {
        self.overflow_strategy = strategy;
        self
    }

    /// Builder method: Enable or disable domain-error recording
    pub fn with_record_domain_errors(mut self, record: bool) -> Self {
        self.record_domain_errors = record;
        self
    }

    /// Validate the configuration against this build
    pub fn validate(&self) -> NumericResult<()> {
        if self.overflow_strategy == OverflowStrategy::Native
            && !OverflowStrategy::native_available()
        {
            return Err(NumericError::InvalidConfig(
                "native overflow strategy is disabled in this build",
            ));
        }

        Ok(())
    }

    /// Parse a configuration from JSON, e.g.
    /// `{"overflow_strategy": "Portable", "record_domain_errors": false}`.
    /// Missing fields take their default.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the JSON is malformed or fails validation.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> NumericResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|_| NumericError::InvalidConfig("malformed configuration JSON"))?;
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Facade
// ============================================================================

/// The crate's primitives bound to one configuration.
///
/// # Example
/// ```
/// use intmath::config::{Arithmetic, ArithmeticConfig};
///
/// let arith = Arithmetic::new(ArithmeticConfig::portable()).unwrap();
/// assert_eq!(arith.mul_overflow(16u8, 16), (0, true));
/// assert_eq!(arith.isqrt(99u8), 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Arithmetic {
    config: ArithmeticConfig,
}

impl Arithmetic {
    /// Create a facade from a validated configuration.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration cannot be honoured.
    pub fn new(config: ArithmeticConfig) -> NumericResult<Self> {
        config.validate()?;
        tracing::trace!(
            strategy = %config.overflow_strategy,
            record_domain_errors = config.record_domain_errors,
            "arithmetic configured"
        );
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Floor mean, see [`numeric::mean`].
    #[inline]
    pub fn mean<T: Integer>(&self, a: T, b: T) -> T {
        numeric::mean(a, b)
    }

    /// `a + b` with overflow flag.
    #[inline]
    pub fn add_overflow<T: Integer>(&self, a: T, b: T) -> (T, bool) {
        platform::add_overflow(a, b, self.config.overflow_strategy)
    }

    /// `a - b` with overflow flag.
    #[inline]
    pub fn sub_overflow<T: Integer>(&self, a: T, b: T) -> (T, bool) {
        platform::sub_overflow(a, b, self.config.overflow_strategy)
    }

    /// `a * b` with overflow flag.
    #[inline]
    pub fn mul_overflow<T: Integer>(&self, a: T, b: T) -> (T, bool) {
        platform::mul_overflow(a, b, self.config.overflow_strategy)
    }

    /// Checked addition, see [`platform::checked_add`].
    #[inline]
    pub fn checked_add<T: Integer>(&self, a: T, b: T) -> NumericResult<T> {
        platform::checked_add(a, b, self.config.overflow_strategy)
    }

    /// Checked subtraction, see [`platform::checked_sub`].
    #[inline]
    pub fn checked_sub<T: Integer>(&self, a: T, b: T) -> NumericResult<T> {
        platform::checked_sub(a, b, self.config.overflow_strategy)
    }

    /// Checked multiplication, see [`platform::checked_mul`].
    #[inline]
    pub fn checked_mul<T: Integer>(&self, a: T, b: T) -> NumericResult<T> {
        platform::checked_mul(a, b, self.config.overflow_strategy)
    }

    /// Floor square root; `-1` for negative input.
    pub fn isqrt<T: Integer>(&self, val: T) -> T {
        if self.config.record_domain_errors {
            return numeric::isqrt_with(val, self.config.overflow_strategy);
        }

        // Keep the caller's diagnostics as they were before this call
        let saved = diagnostics::take();
        let root = numeric::isqrt_with(val, self.config.overflow_strategy);
        diagnostics::restore(saved);
        root
    }
}
