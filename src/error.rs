//! Errors for jwtlens
//!
//! Parsing, key import and verification all report through the same [`Error`]
//! enum. Claims validation never fails; it reports through
//! [`ValidationResult`](crate::ValidationResult) warnings instead.

use thiserror::Error;

/// jwtlens Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: expected three non-empty parts separated by '.'")]
    FormatInvalid,

    #[error("Base64URL decoding failed: {0}")]
    FormatInvalidBase64(String),

    #[error("JSON parsing failed: {0}")]
    FormatInvalidJson(String),

    // ============================================================================
    // Algorithm Errors
    // ============================================================================
    #[error("Unsupported algorithm: {0}")]
    AlgorithmUnsupported(String),

    #[error("Token header has no alg")]
    AlgorithmMissing,

    #[error("Algorithm '{found}' in token header does not match selected algorithm '{selected}'")]
    AlgorithmNotAllowed { found: String, selected: String },

    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Please provide a key")]
    KeyMissing,

    #[error("Invalid key format: {0}")]
    KeyFormatInvalid(String),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now})")]
    TokenExpired { expired_at: i64, now: i64 },

    #[error("Token not valid until {not_before} (now: {now})")]
    TokenNotYetValid { not_before: i64, now: i64 },

    // ============================================================================
    // Runtime Errors
    // ============================================================================
    #[error("Verification aborted: {0}")]
    VerificationAborted(String),
}

/// Result type alias for jwtlens operations
pub type Result<T> = std::result::Result<T, Error>;
