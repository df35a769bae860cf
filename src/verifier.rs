//! Signature verification
//!
//! [`Verifier`] checks a token's signature against caller-supplied key material
//! and reports the outcome as a [`VerificationResult`]. Key import and the
//! cryptography run on Tokio's blocking pool, so the calling task only awaits.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. Key material must not be blank
//! 2. The selected algorithm must be one of the nine supported identifiers
//! 3. The key must be well-formed and fit the algorithm's family (and curve, for ECDSA)
//! 4. The token must parse, and its `alg` header must be present and equal the selected algorithm
//! 5. The signature must verify over `header.payload`
//! 6. With [`Verifier::time_claims`] enabled, the token must be neither expired
//!    nor not yet valid
//!
//! # Example
//!
//! ```ignore
//! let result = Verifier::new()
//!     .time_claims(true)
//!     .verify(token, "RS256", public_key_pem)
//!     .await;
//!
//! if !result.valid {
//!     eprintln!("{}", result.error.unwrap_or_default());
//! }
//! ```

use crate::algorithm::AlgorithmId;
use crate::claims::{current_timestamp, validate_at};
use crate::error::{Error, Result};
use crate::keys::Key;
use crate::token::DecodedToken;
use serde::Serialize;

/// Outcome of a signature verification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    /// Signature (and, if enabled, time claims) checked out
    pub valid: bool,

    /// Human-readable reason when `valid` is false
    pub error: Option<String>,
}

impl VerificationResult {
    /// A successful verification
    pub fn valid() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    /// A failed verification with a message
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            error: Some(message.into()),
        }
    }
}

impl From<&Error> for VerificationResult {
    fn from(error: &Error) -> Self {
        let message = match error {
            Error::SignatureInvalid => {
                "Invalid signature - the key does not match the token".to_string()
            }
            Error::KeyFormatInvalid(_) => {
                "Invalid key format - ensure PEM format for RSA/ECDSA".to_string()
            }
            Error::TokenExpired { .. } => "Token is expired".to_string(),
            other => other.to_string(),
        };
        Self::invalid(message)
    }
}

impl From<Result<()>> for VerificationResult {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::valid(),
            Err(error) => Self::from(&error),
        }
    }
}

/// Signature verifier
///
/// Holds immutable configuration only and can be shared freely between tasks.
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    enforce_time_claims: bool,
}

impl Verifier {
    /// Create a verifier that checks signatures only
    pub fn new() -> Self {
        Self::default()
    }

    /// Also reject expired and not-yet-valid tokens (default: off)
    pub fn time_claims(mut self, enabled: bool) -> Self {
        self.enforce_time_claims = enabled;
        self
    }

    /// Verify a token and report the outcome
    ///
    /// Never fails: every error becomes an invalid [`VerificationResult`].
    ///
    /// # Arguments
    /// * `raw` - The JWT string
    /// * `algorithm` - Algorithm identifier selected by the caller, e.g. "HS256"
    /// * `key` - HMAC secret, or PEM `PUBLIC KEY` block for RSA/ECDSA
    pub async fn verify(&self, raw: &str, algorithm: &str, key: &str) -> VerificationResult {
        self.try_verify(raw, algorithm, key).await.into()
    }

    /// Verify a token, returning the typed error on failure
    pub async fn try_verify(&self, raw: &str, algorithm: &str, key: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::KeyMissing);
        }

        let algorithm: AlgorithmId = algorithm.parse()?;
        tracing::debug!(%algorithm, family = %algorithm.family(), "verifying token signature");

        let raw = raw.trim().to_string();
        let key = key.to_string();
        let enforce_time_claims = self.enforce_time_claims;

        let outcome = tokio::task::spawn_blocking(move || {
            verify_blocking(&raw, algorithm, &key, enforce_time_claims)
        })
        .await
        .map_err(|e| Error::VerificationAborted(e.to_string()))
        .and_then(|result| result);

        match &outcome {
            Ok(()) => tracing::trace!(%algorithm, "token signature verified"),
            Err(error) => tracing::debug!(%algorithm, %error, "token verification failed"),
        }

        outcome
    }
}

/// Verify a token's signature with default settings
///
/// ```ignore
/// let result = jwtlens::verify(token, "HS256", "your-256-bit-secret").await;
/// assert!(result.valid);
/// ```
pub async fn verify(raw: &str, algorithm: &str, key: &str) -> VerificationResult {
    Verifier::default().verify(raw, algorithm, key).await
}

fn verify_blocking(
    raw: &str,
    algorithm: AlgorithmId,
    key_material: &str,
    enforce_time_claims: bool,
) -> Result<()> {
    let key = Key::import(&algorithm, key_material)?;
    let token = DecodedToken::parse(raw)?;

    let declared = token.header().algorithm().ok_or(Error::AlgorithmMissing)?;
    if declared != algorithm.as_str() {
        return Err(Error::AlgorithmNotAllowed {
            found: declared.to_string(),
            selected: algorithm.to_string(),
        });
    }

    algorithm.verify_signature(token.signing_input(), token.signature(), &key)?;

    if enforce_time_claims {
        let now = current_timestamp();
        let payload = token.payload();
        let result = validate_at(payload, now);

        if result.is_expired {
            return Err(Error::TokenExpired {
                expired_at: payload.expiration().unwrap_or(now),
                now,
            });
        }
        if result.is_not_yet_valid {
            return Err(Error::TokenNotYetValid {
                not_before: payload.not_before().unwrap_or(now),
                now,
            });
        }
    }

    Ok(())
}
