//! Key types for JWT signature verification
//!
//! Key material arrives as text: a raw secret for HMAC algorithms, or a PEM
//! `PUBLIC KEY` block (SubjectPublicKeyInfo) for RSA and ECDSA algorithms.
//! [`Key::import`] turns that text into a typed key for a given algorithm and
//! rejects material that does not fit the algorithm's family.

use crate::algorithm::{AlgorithmFamily, AlgorithmId};
use crate::error::{Error, Result};
use crate::limits::{MAX_KEY_LENGTH, MAX_RSA_MODULUS_BITS, MIN_RSA_MODULUS_BITS};

use aws_lc_rs::agreement::{self, EphemeralPrivateKey};
use aws_lc_rs::rand::SystemRandom;
use der::asn1::UintRef;
use der::{Decode, Document, Sequence};
use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

/// rsaEncryption
const RSA_ENCRYPTION_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// id-ecPublicKey
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// secp256r1
const P256_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// secp384r1
const P384_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.34");

/// secp521r1
const P521_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.35");

/// PKCS#1 `RSAPublicKey`
#[derive(Sequence)]
struct Pkcs1PublicKey<'a> {
    modulus: UintRef<'a>,
    public_exponent: UintRef<'a>,
}

/// A key that can be used for JWT signature verification
#[derive(Debug, Clone)]
pub enum Key {
    /// Symmetric key for HMAC algorithms
    Symmetric(SymmetricKey),

    /// RSA public key
    Rsa(RsaPublicKey),

    /// ECDSA public key
    Ecdsa(EcdsaPublicKey),
}

impl Key {
    /// Import key material for the given algorithm
    ///
    /// HMAC secrets are used verbatim as UTF-8 bytes. RSA and ECDSA keys must be
    /// PEM-encoded SubjectPublicKeyInfo whose key type (and curve) matches the
    /// algorithm.
    pub fn import(algorithm: &AlgorithmId, material: &str) -> Result<Self> {
        if material.trim().is_empty() {
            return Err(Error::KeyMissing);
        }

        match algorithm.family() {
            AlgorithmFamily::Hmac => Ok(Key::symmetric(material)),
            AlgorithmFamily::Rsa => {
                let key = Key::from_public_key_pem(material)?;
                key.as_rsa_public(algorithm)?;
                Ok(key)
            }
            AlgorithmFamily::Ecdsa => {
                let key = Key::from_public_key_pem(material)?;
                let expected = EcdsaCurve::for_algorithm(algorithm)?;
                let found = key.as_ecdsa_public(algorithm)?.curve();
                if found != expected {
                    return Err(Error::KeyFormatInvalid(format!(
                        "{algorithm} requires an ECDSA {} key, found {}",
                        expected.name(),
                        found.name()
                    )));
                }
                Ok(key)
            }
        }
    }

    /// Create a symmetric key from bytes
    pub fn symmetric(secret: impl AsRef<[u8]>) -> Self {
        Key::Symmetric(SymmetricKey::new(secret.as_ref().to_vec()))
    }

    /// Parse a PEM `PUBLIC KEY` block into an RSA or ECDSA key
    pub fn from_public_key_pem(pem: &str) -> Result<Self> {
        if pem.len() > MAX_KEY_LENGTH {
            return Err(Error::KeyFormatInvalid(format!(
                "key too large: {} bytes (maximum: {} bytes)",
                pem.len(),
                MAX_KEY_LENGTH
            )));
        }

        let (label, document) = Document::from_pem(pem.trim())
            .map_err(|e| Error::KeyFormatInvalid(format!("malformed PEM: {e}")))?;

        if label != "PUBLIC KEY" {
            return Err(Error::KeyFormatInvalid(format!(
                "expected a PUBLIC KEY block, found {label}"
            )));
        }

        Key::from_public_key_der(document.as_bytes())
    }

    /// Parse a DER-encoded SubjectPublicKeyInfo into an RSA or ECDSA key
    pub fn from_public_key_der(der: &[u8]) -> Result<Self> {
        let spki = SubjectPublicKeyInfoRef::try_from(der)
            .map_err(|e| Error::KeyFormatInvalid(format!("malformed SubjectPublicKeyInfo: {e}")))?;

        if spki.algorithm.oid == RSA_ENCRYPTION_OID {
            let rsa_public_key = spki.subject_public_key.as_bytes().ok_or_else(|| {
                Error::KeyFormatInvalid("public key bit string is not octet aligned".into())
            })?;
            check_rsa_public_key(rsa_public_key)?;
            Ok(Key::Rsa(RsaPublicKey::new(rsa_public_key.to_vec())))
        } else if spki.algorithm.oid == EC_PUBLIC_KEY_OID {
            let curve_oid = spki
                .algorithm
                .parameters_oid()
                .map_err(|e| Error::KeyFormatInvalid(format!("missing curve parameters: {e}")))?;
            let curve = EcdsaCurve::from_oid(&curve_oid)?;
            let point = spki.subject_public_key.as_bytes().ok_or_else(|| {
                Error::KeyFormatInvalid("public key bit string is not octet aligned".into())
            })?;
            check_ec_point(curve, point)?;
            Ok(Key::Ecdsa(EcdsaPublicKey::new(point.to_vec(), curve)))
        } else {
            Err(Error::KeyFormatInvalid(format!(
                "unsupported public key algorithm {}",
                spki.algorithm.oid
            )))
        }
    }

    /// Get key type name for error messages
    pub fn key_type(&self) -> &'static str {
        match self {
            Key::Symmetric(_) => "Symmetric",
            Key::Rsa(_) => "RSA",
            Key::Ecdsa(_) => "ECDSA",
        }
    }

    /// Get as symmetric key or return error
    pub fn as_symmetric(&self, algorithm: &AlgorithmId) -> Result<&SymmetricKey> {
        match self {
            Key::Symmetric(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "a symmetric secret")),
        }
    }

    /// Get as RSA public key or return error
    pub fn as_rsa_public(&self, algorithm: &AlgorithmId) -> Result<&RsaPublicKey> {
        match self {
            Key::Rsa(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "an RSA public key")),
        }
    }

    /// Get as ECDSA public key or return error
    pub fn as_ecdsa_public(&self, algorithm: &AlgorithmId) -> Result<&EcdsaPublicKey> {
        match self {
            Key::Ecdsa(key) => Ok(key),
            _ => Err(self.mismatch(algorithm, "an ECDSA public key")),
        }
    }

    fn mismatch(&self, algorithm: &AlgorithmId, expected: &str) -> Error {
        Error::KeyFormatInvalid(format!(
            "{algorithm} requires {expected}, found {} key",
            self.key_type()
        ))
    }
}

fn check_rsa_public_key(pkcs1: &[u8]) -> Result<()> {
    let key = Pkcs1PublicKey::from_der(pkcs1)
        .map_err(|e| Error::KeyFormatInvalid(format!("malformed RSAPublicKey: {e}")))?;

    if key.public_exponent.as_bytes().iter().all(|byte| *byte == 0) {
        return Err(Error::KeyFormatInvalid("RSA public exponent is zero".into()));
    }

    // UintRef strips leading zero bytes
    let modulus = key.modulus.as_bytes();
    let bits = match modulus.first() {
        Some(first) => modulus.len() * 8 - first.leading_zeros() as usize,
        None => 0,
    };

    if !(MIN_RSA_MODULUS_BITS..=MAX_RSA_MODULUS_BITS).contains(&bits) {
        return Err(Error::KeyFormatInvalid(format!(
            "RSA modulus of {bits} bits is outside {MIN_RSA_MODULUS_BITS}-{MAX_RSA_MODULUS_BITS} bits"
        )));
    }

    Ok(())
}

fn check_ec_point(curve: EcdsaCurve, point: &[u8]) -> Result<()> {
    if point.len() != curve.point_len() || point.first() != Some(&0x04) {
        return Err(Error::KeyFormatInvalid(format!(
            "{} public key must be an uncompressed point of {} bytes",
            curve.name(),
            curve.point_len()
        )));
    }

    // An ECDH agreement against a throwaway key makes aws-lc-rs check the point lies on the curve
    let algorithm = curve.agreement_algorithm();
    let ephemeral = EphemeralPrivateKey::generate(algorithm, &SystemRandom::new())
        .map_err(|_| Error::VerificationAborted("random number generator failed".into()))?;

    agreement::agree_ephemeral(
        ephemeral,
        &agreement::UnparsedPublicKey::new(algorithm, point),
        Error::KeyFormatInvalid(format!("{} public key is not on the curve", curve.name())),
        |_| Ok(()),
    )
}

/// Symmetric key for HMAC algorithms
#[derive(Clone)]
pub struct SymmetricKey {
    secret: Vec<u8>,
}

impl SymmetricKey {
    /// Create a new symmetric key
    pub fn new(secret: Vec<u8>) -> Self {
        Self { secret }
    }

    /// Get the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.secret
    }
}

// Secrets stay out of debug output
impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.secret.len())
            .finish()
    }
}

/// RSA public key (DER-encoded PKCS#1 `RSAPublicKey`, as carried inside the SPKI)
#[derive(Debug, Clone)]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Create a new RSA public key from PKCS#1 DER bytes
    pub(crate) fn new(der: Vec<u8>) -> Self {
        Self { der }
    }

    /// Get the DER-encoded key bytes
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

/// ECDSA curve identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcdsaCurve {
    /// P-256 (secp256r1) curve
    P256,
    /// P-384 (secp384r1) curve
    P384,
    /// P-521 (secp521r1) curve
    P521,
}

impl EcdsaCurve {
    /// Curve required by an ECDSA algorithm
    pub fn for_algorithm(algorithm: &AlgorithmId) -> Result<Self> {
        match algorithm {
            AlgorithmId::ES256 => Ok(EcdsaCurve::P256),
            AlgorithmId::ES384 => Ok(EcdsaCurve::P384),
            AlgorithmId::ES512 => Ok(EcdsaCurve::P521),
            other => Err(Error::AlgorithmUnsupported(other.to_string())),
        }
    }

    fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        if *oid == P256_OID {
            Ok(EcdsaCurve::P256)
        } else if *oid == P384_OID {
            Ok(EcdsaCurve::P384)
        } else if *oid == P521_OID {
            Ok(EcdsaCurve::P521)
        } else {
            Err(Error::KeyFormatInvalid(format!("unsupported curve {oid}")))
        }
    }

    /// Length of an uncompressed SEC1 point (`04 || x || y`)
    fn point_len(&self) -> usize {
        match self {
            EcdsaCurve::P256 => 65,
            EcdsaCurve::P384 => 97,
            EcdsaCurve::P521 => 133,
        }
    }

    fn agreement_algorithm(&self) -> &'static agreement::Algorithm {
        match self {
            EcdsaCurve::P256 => &agreement::ECDH_P256,
            EcdsaCurve::P384 => &agreement::ECDH_P384,
            EcdsaCurve::P521 => &agreement::ECDH_P521,
        }
    }

    /// Curve name, e.g. "P-256"
    pub fn name(&self) -> &'static str {
        match self {
            EcdsaCurve::P256 => "P-256",
            EcdsaCurve::P384 => "P-384",
            EcdsaCurve::P521 => "P-521",
        }
    }
}

/// ECDSA public key (uncompressed SEC1 point)
#[derive(Debug, Clone)]
pub struct EcdsaPublicKey {
    point: Vec<u8>,
    curve: EcdsaCurve,
}

impl EcdsaPublicKey {
    /// Create a new ECDSA public key from its encoded point
    pub(crate) fn new(point: Vec<u8>, curve: EcdsaCurve) -> Self {
        Self { point, curve }
    }

    /// Get the encoded point (`04 || x || y`)
    pub fn as_point(&self) -> &[u8] {
        &self.point
    }

    /// Get the curve
    pub fn curve(&self) -> EcdsaCurve {
        self.curve
    }
}
