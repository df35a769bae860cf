use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};

/// Verify an HS256/HS384/HS512 signature with constant-time comparison
pub(super) fn verify(
    algorithm: &AlgorithmId,
    signing_input: &[u8],
    provided_signature: &[u8],
    secret: &[u8],
) -> Result<()> {
    let expected_signature = match algorithm {
        AlgorithmId::HS256 => compute::<Hmac<Sha256>>(secret, signing_input)?,
        AlgorithmId::HS384 => compute::<Hmac<Sha384>>(secret, signing_input)?,
        AlgorithmId::HS512 => compute::<Hmac<Sha512>>(secret, signing_input)?,
        other => return Err(Error::AlgorithmUnsupported(other.to_string())),
    };

    if provided_signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(provided_signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}

fn compute<M: Mac + KeyInit>(secret: &[u8], signing_input: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <M as Mac>::new_from_slice(secret)
        .map_err(|e| Error::KeyFormatInvalid(format!("unusable HMAC secret: {e}")))?;
    mac.update(signing_input);
    Ok(mac.finalize().into_bytes().to_vec())
}
