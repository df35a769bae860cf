//! Algorithm support for JWT signature verification
//!
//! The nine supported JWS algorithms are modelled as the closed [`AlgorithmId`]
//! enum. Each identifier belongs to exactly one [`AlgorithmFamily`], which decides
//! how the key material is interpreted and which backend verifies the signature:
//!
//! - **HMAC**: `hmac` + `sha2`, constant-time comparison
//! - **RSA**: PKCS#1 v1.5 through `aws-lc-rs`
//! - **ECDSA**: fixed-width `r || s` signatures through `aws-lc-rs`

mod ecdsa;
mod hmac;
mod rsa;

use crate::error::{Error, Result};
use crate::keys::Key;
use crate::limits::MAX_DECODED_SIGNATURE_SIZE;
use crate::utils::base64url;
use std::str::FromStr;

/// Algorithm identifier, as found in the `alg` header or chosen by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSASSA-PKCS1-v1_5 with SHA-256
    RS256,
    /// RSASSA-PKCS1-v1_5 with SHA-384
    RS384,
    /// RSASSA-PKCS1-v1_5 with SHA-512
    RS512,
    /// ECDSA with P-256 and SHA-256
    ES256,
    /// ECDSA with P-384 and SHA-384
    ES384,
    /// ECDSA with P-521 and SHA-512
    ES512,
}

/// Algorithm family, deciding key interpretation and verification backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmFamily {
    /// Symmetric secret (HS*)
    Hmac,
    /// RSA public key (RS*)
    Rsa,
    /// Elliptic curve public key (ES*)
    Ecdsa,
}

impl AlgorithmId {
    /// Every supported algorithm, grouped by family
    pub const ALL: [AlgorithmId; 9] = [
        AlgorithmId::HS256,
        AlgorithmId::HS384,
        AlgorithmId::HS512,
        AlgorithmId::RS256,
        AlgorithmId::RS384,
        AlgorithmId::RS512,
        AlgorithmId::ES256,
        AlgorithmId::ES384,
        AlgorithmId::ES512,
    ];

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
            AlgorithmId::HS384 => "HS384",
            AlgorithmId::HS512 => "HS512",
            AlgorithmId::RS256 => "RS256",
            AlgorithmId::RS384 => "RS384",
            AlgorithmId::RS512 => "RS512",
            AlgorithmId::ES256 => "ES256",
            AlgorithmId::ES384 => "ES384",
            AlgorithmId::ES512 => "ES512",
        }
    }

    /// The family this algorithm belongs to
    pub const fn family(&self) -> AlgorithmFamily {
        match self {
            AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => AlgorithmFamily::Hmac,
            AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => AlgorithmFamily::Rsa,
            AlgorithmId::ES256 | AlgorithmId::ES384 | AlgorithmId::ES512 => AlgorithmFamily::Ecdsa,
        }
    }

    /// Human-readable description, e.g. "HMAC with SHA-256"
    pub const fn description(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HMAC with SHA-256",
            AlgorithmId::HS384 => "HMAC with SHA-384",
            AlgorithmId::HS512 => "HMAC with SHA-512",
            AlgorithmId::RS256 => "RSA with SHA-256",
            AlgorithmId::RS384 => "RSA with SHA-384",
            AlgorithmId::RS512 => "RSA with SHA-512",
            AlgorithmId::ES256 => "ECDSA with SHA-256",
            AlgorithmId::ES384 => "ECDSA with SHA-384",
            AlgorithmId::ES512 => "ECDSA with SHA-512",
        }
    }

    /// Check if algorithm is HMAC-based (symmetric)
    pub const fn is_symmetric(&self) -> bool {
        matches!(self.family(), AlgorithmFamily::Hmac)
    }

    /// Verify a signature using the algorithm
    ///
    /// # Arguments
    /// * `signing_input` - The data that was signed (header.payload)
    /// * `signature` - The Base64URL-encoded signature
    /// * `key` - Key material already imported for this algorithm
    pub(crate) fn verify_signature(
        &self,
        signing_input: &str,
        signature: &str,
        key: &Key,
    ) -> Result<()> {
        let signature_bytes = base64url::decode_bytes(signature, MAX_DECODED_SIGNATURE_SIZE)?;

        match self.family() {
            AlgorithmFamily::Hmac => hmac::verify(
                self,
                signing_input.as_bytes(),
                &signature_bytes,
                key.as_symmetric(self)?.as_bytes(),
            ),
            AlgorithmFamily::Rsa => rsa::verify(
                self,
                signing_input.as_bytes(),
                &signature_bytes,
                key.as_rsa_public(self)?,
            ),
            AlgorithmFamily::Ecdsa => ecdsa::verify(
                self,
                signing_input.as_bytes(),
                &signature_bytes,
                key.as_ecdsa_public(self)?,
            ),
        }
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| Error::AlgorithmUnsupported(s.to_string()))
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for AlgorithmId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for AlgorithmFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlgorithmFamily::Hmac => write!(f, "HMAC"),
            AlgorithmFamily::Rsa => write!(f, "RSA"),
            AlgorithmFamily::Ecdsa => write!(f, "ECDSA"),
        }
    }
}
