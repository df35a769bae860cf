use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::keys::RsaPublicKey;

use aws_lc_rs::signature::{self, UnparsedPublicKey};

/// Verify an RS256/RS384/RS512 signature (RSASSA-PKCS1-v1_5)
///
/// The key is the DER-encoded SubjectPublicKeyInfo. Moduli between 2048 and
/// 8192 bits are accepted; anything else fails like a bad signature.
pub(super) fn verify(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    signature: &[u8],
    key: &RsaPublicKey,
) -> Result<()> {
    let verification_algorithm: &'static dyn signature::VerificationAlgorithm = match algorithm {
        AlgorithmId::RS256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        AlgorithmId::RS384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        AlgorithmId::RS512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        other => return Err(Error::AlgorithmUnsupported(other.to_string())),
    };

    UnparsedPublicKey::new(verification_algorithm, key.as_der())
        .verify(signing_input, signature)
        .map_err(|_| Error::SignatureInvalid)
}
