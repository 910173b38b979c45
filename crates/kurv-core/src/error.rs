//! # Error Types
//!
//! Domain-specific error types for kurv-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  kurv-core errors (this file)                                       │
//! │  └── CoreError        - Voucher code rejection                      │
//! │                                                                     │
//! │  Host errors (out of scope)                                         │
//! │  └── whatever the request layer maps CoreError into                 │
//! │                                                                     │
//! │  Flow: CoreError → host API error → client (HTTP 4xx)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending code, the reason)
//! 3. Errors are enum variants, never String
//!
//! Note how small this enum is. Pricing itself never fails: a voucher
//! that matches nothing, or a percentage over 100, is accepted and its
//! arithmetic flows through (see [`crate::apply`]). The only thing the
//! core rejects is a code that does not parse.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
///
/// These are caller-input errors. They are raised before any cart
/// mutation, so a failed operation leaves the cart exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Voucher code does not match either grammar.
    ///
    /// ## When This Occurs
    /// - Unknown prefix (neither `EKS` nor `REG`)
    /// - Wrong number of `-` separated segments for the prefix
    /// - A quantity or percent field that is not an integer, or is
    ///   missing its `x`/`y`/`z` literal
    #[error("malformed voucher code '{code}': {reason}")]
    MalformedVoucher { code: String, reason: String },
}

impl CoreError {
    /// Builds a [`CoreError::MalformedVoucher`] for the given code.
    pub fn malformed(code: &str, reason: impl Into<String>) -> Self {
        CoreError::MalformedVoucher {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::malformed("XYZ-foo-z10", "unknown prefix 'XYZ'");
        assert_eq!(
            err.to_string(),
            "malformed voucher code 'XYZ-foo-z10': unknown prefix 'XYZ'"
        );
    }
}
