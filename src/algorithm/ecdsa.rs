use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::EcdsaPublicKey;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// Verify an ES256/ES384/ES512 signature
///
/// JWS ECDSA signatures use the fixed-length `R || S` form (RFC 7518
/// Section 3.4), not ASN.1 DER. The key's curve has already been matched to
/// `algorithm` by [`Key::import`](crate::Key::import).
pub(super) fn verify(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    key: &EcdsaPublicKey,
) -> Result<()> {
    let verification_algorithm: &'static dyn signature::VerificationAlgorithm = match algorithm {
        AlgorithmId::ES256 => &signature::ECDSA_P256_SHA256_FIXED,
        AlgorithmId::ES384 => &signature::ECDSA_P384_SHA384_FIXED,
        AlgorithmId::ES512 => &signature::ECDSA_P521_SHA512_FIXED,
        other => return Err(Error::AlgorithmUnsupported(other.to_string())),
    };

    UnparsedPublicKey::new(verification_algorithm, key.as_point())
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}
