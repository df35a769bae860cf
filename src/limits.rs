//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// An RS512 signature from an 8192-bit key is exactly 1024 bytes
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum length for PEM-encoded public key text (16KB)
pub(crate) const MAX_KEY_LENGTH: usize = 16 * 1024;

/// Accepted RSA modulus sizes in bits, as supported by the verifier
pub(crate) const MIN_RSA_MODULUS_BITS: usize = 2048;
pub(crate) const MAX_RSA_MODULUS_BITS: usize = 8192;

/// Remaining lifetime below which an unexpired token is flagged (1 hour)
pub(crate) const DEFAULT_EXPIRY_WARNING_SECONDS: u64 = 3600;
