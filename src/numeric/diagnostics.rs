// ============================================================================
// Math Diagnostics
// Thread-local error code and exception flags for domain errors
// ============================================================================
//
// Mirrors the platform math-error convention (an error code plus sticky
// "invalid operation" flag) without any process-wide state: every thread
// owns its own slot, so concurrent callers never observe each other.

use std::cell::Cell;
use std::fmt;

/// Error code recorded by an operation that hit a math error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathErrorKind {
    /// Argument outside the operation's domain (the `EDOM` analogue)
    Domain,
}

impl fmt::Display for MathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathErrorKind::Domain => write!(f, "EDOM"),
        }
    }
}

/// Sticky exception flags, in the style of floating-point status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FpExceptions(u8);

impl FpExceptions {
    /// No flags raised
    pub const NONE: Self = Self(0);
    /// Invalid operation
    pub const INVALID: Self = Self(1);
    /// Every flag this crate can raise
    pub const ALL: Self = Self(1);

    /// `true` if any flag in `mask` is raised.
    #[inline]
    pub const fn intersects(self, mask: Self) -> bool {
        self.0 & mask.0 != 0
    }

    /// `true` if no flag is raised.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

/// Snapshot of a thread's diagnostic state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Last recorded error code
    pub error: Option<MathErrorKind>,
    /// Raised exception flags
    pub exceptions: FpExceptions,
}

thread_local! {
    static STATE: Cell<Diagnostics> = const {
        Cell::new(Diagnostics {
            error: None,
            exceptions: FpExceptions::NONE,
        })
    };
}

/// Record a domain error: sets the error code and raises `INVALID`.
pub(crate) fn record_domain_error() {
    STATE.with(|state| {
        let current = state.get();
        state.set(Diagnostics {
            error: Some(MathErrorKind::Domain),
            exceptions: current.exceptions.union(FpExceptions::INVALID),
        });
    });
}

/// The error code recorded on this thread, if any.
pub fn last_error() -> Option<MathErrorKind> {
    STATE.with(|state| state.get().error)
}

/// `true` if any flag in `mask` has been raised on this thread.
pub fn test_exceptions(mask: FpExceptions) -> bool {
    STATE.with(|state| state.get().exceptions.intersects(mask))
}

/// Reset the error code and all exception flags on this thread.
pub fn clear() {
    STATE.with(|state| state.set(Diagnostics::default()));
}

/// Return the current state and reset it.
///
/// Use this around a single call to isolate its diagnostics.
pub fn take() -> Diagnostics {
    STATE.with(|state| state.replace(Diagnostics::default()))
}

/// Overwrite the state with an earlier snapshot.
pub(crate) fn restore(snapshot: Diagnostics) {
    STATE.with(|state| state.set(snapshot));
}
