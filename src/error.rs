//! Error types for the cursorkit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when a container is constructed with invalid
//!   parameters (e.g. a zero stride for a [`RawBlock`](crate::ds::RawBlock)).
//! - [`InvariantError`]: Returned when an ordering or structural invariant
//!   does not hold (`check_sorted`, debug-only `check_invariants` methods).
//! - [`ContractViolation`]: Returned when an operation is requested against a
//!   runtime [`Capabilities`](crate::traits::Capabilities) description that
//!   lacks an extension the operation needs.
//!
//! ## Example Usage
//!
//! ```
//! use cursorkit::ds::RawBlock;
//! use cursorkit::error::ConfigError;
//!
//! let block: Result<RawBlock, ConfigError> = RawBlock::try_from_bytes(vec![0u8; 8], 4);
//! assert!(block.is_ok());
//!
//! // A byte length that is not a multiple of the stride is rejected.
//! let bad = RawBlock::try_from_bytes(vec![0u8; 7], 4);
//! assert!(bad.is_err());
//! ```

use std::fmt;

use crate::traits::Capability;

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when an ordering or structural invariant is violated.
///
/// Produced by [`check_sorted`](crate::algo::sort::check_sorted) and by the
/// containers' `check_invariants` methods. Carries a human-readable
/// description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when container construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`RawBlock::try_new`](crate::ds::RawBlock::try_new).
///
/// # Example
///
/// ```
/// use cursorkit::ds::RawBlock;
///
/// let err = RawBlock::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("stride"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// ContractViolation
// ---------------------------------------------------------------------------

/// Error returned when an operation needs a capability the target lacks.
///
/// Statically typed callers never see this: the trait bounds on every
/// algorithm reject such calls at compile time. It exists for code that only
/// holds a runtime [`Capabilities`](crate::traits::Capabilities) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractViolation {
    operation: &'static str,
    missing: Capability,
}

impl ContractViolation {
    /// Creates a violation for `operation` missing the `missing` capability.
    #[inline]
    pub fn new(operation: &'static str, missing: Capability) -> Self {
        Self { operation, missing }
    }

    /// Returns the name of the operation that was requested.
    #[inline]
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Returns the capability that was missing.
    #[inline]
    pub fn missing(&self) -> Capability {
        self.missing
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` requires a {} cursor",
            self.operation,
            self.missing.name()
        )
    }
}

impl std::error::Error for ContractViolation {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
