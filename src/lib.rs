//! # jwtlens - JWT Decoding and Offline Verification
//!
//! > Decode, inspect and verify JSON Web Tokens without leaving the process.
//!
//! **jwtlens** is the token engine behind a JWT inspector: it splits a compact token into
//! header, payload and signature, reports on its time claims, and checks its signature
//! against a key supplied by the caller. Nothing is fetched from the network and nothing
//! is signed; presentation is left to whoever calls in.
//!
//! ## Overview
//!
//! JWTs encode claims as JSON objects secured by a MAC or digital signature. Inspecting one
//! means Base64URL-decoding two JSON segments, interpreting registered claims such as `exp`,
//! and, given a key, recomputing or checking the signature. Decoding and verification are
//! deliberately separate: a token can be decoded and inspected without any key, and its
//! signature can be checked without trusting anything it claims about itself beyond `alg`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwtlens::*;
//!
//! let token = parse(token_str)?;
//! println!("alg: {:?}", token.header().algorithm());
//!
//! let report = validate(token.payload());
//! for warning in &report.warnings {
//!     println!("warning: {warning}");
//! }
//!
//! let result = verify(token_str, "HS256", "your-256-bit-secret").await;
//! assert!(result.valid);
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! raw token ──parse()──▶ DecodedToken { header, payload, signature, raw }
//!                              │
//!                              └─ payload ──validate()──▶ ValidationResult
//!
//! raw token + algorithm + key ──verify()──▶ VerificationResult
//! ```
//!
//! Parsing and validation are synchronous and pure. Verification is `async`: key import
//! and the signature check run on Tokio's blocking pool.
//!
//! ## Algorithm Support
//!
//! - **HMAC**: HS256, HS384, HS512 (the key is the shared secret, used verbatim)
//! - **RSA**: RS256, RS384, RS512 (PEM `PUBLIC KEY`, 2048 to 8192 bit moduli)
//! - **ECDSA**: ES256 (P-256), ES384 (P-384), ES512 (P-521) (PEM `PUBLIC KEY`)
//!
//! The algorithm is chosen by the caller. A token whose `alg` header names a different
//! algorithm is rejected before any signature check, and `none` is never supported.
//!
//! ## Claims Validation
//!
//! ```ignore
//! let report = ClaimsValidation::new()
//!     .expiry_warning(300)          // Warn when less than 5 minutes remain
//!     .check(token.payload());
//!
//! match report.severity() {
//!     Severity::Error => println!("token is not usable right now"),
//!     Severity::Warning => println!("{}", report.warnings.join("; ")),
//!     Severity::None => {}
//! }
//! ```
//!
//! ## Security
//!
//! HMAC signatures are compared in constant time via
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq). Input sizes are bounded
//! before decoding. Keys, secrets and token contents are never logged.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7518](https://datatracker.ietf.org/doc/html/rfc7518): JSON Web Algorithms (JWA)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)

// Core modules
pub mod error;
mod limits;
pub mod utils;

// Algorithm system
pub mod algorithm;
pub mod keys;

// Token parsing and claims
pub mod claims;
pub mod token;

// Signature verification
pub mod verifier;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use token::{decode, is_valid_format, parse};
pub use claims::validate;
pub use verifier::verify;

pub use token::{Audience, DecodedToken, TokenHeader, TokenPayload};
pub use claims::{
    ClaimsValidation, Severity, ValidationResult, format_duration, format_timestamp,
    validate_at,
};
pub use verifier::{VerificationResult, Verifier};

pub use algorithm::{AlgorithmFamily, AlgorithmId};
pub use error::{Error, Result};
pub use keys::{EcdsaCurve, Key};
