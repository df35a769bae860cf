//! Shared token and key fixtures for integration tests
#![allow(dead_code)]

use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, EcdsaKeyPair, KeyPair, RsaKeyPair};
use der::Encode;
use der::asn1::{AnyRef, BitString};
use der::pem::LineEnding;
use hmac::{Hmac, Mac};
use jwtlens::AlgorithmId;
use jwtlens::utils::base64url;
use rsa::RsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use sha2::{Sha256, Sha384, Sha512};
use spki::{AlgorithmIdentifierOwned, ObjectIdentifier, SubjectPublicKeyInfoOwned};
use std::sync::OnceLock;

pub const HMAC_SECRET: &str = "your-256-bit-secret";

/// A freshly generated 2048-bit RSA key, shared by all tests in a binary
pub struct RsaFixture {
    pub pkcs8_der: Vec<u8>,
    pub public_pem: String,
    pub modulus_len: usize,
}

pub fn rsa_fixture() -> &'static RsaFixture {
    static FIXTURE: OnceLock<RsaFixture> = OnceLock::new();
    FIXTURE.get_or_init(|| {
        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("failed to generate key");
        let public_pem = private_key
            .to_public_key()
            .to_public_key_pem(rsa::pkcs8::LineEnding::LF)
            .expect("failed to encode public key");
        let pkcs8_der = private_key
            .to_pkcs8_der()
            .expect("failed to serialize private key")
            .as_bytes()
            .to_vec();

        RsaFixture {
            pkcs8_der,
            public_pem,
            modulus_len: private_key.size(),
        }
    })
}

/// A freshly generated ECDSA key for one curve
pub struct EcFixture {
    pub keypair: EcdsaKeyPair,
    pub public_pem: String,
}

pub fn ec_fixture(algorithm: AlgorithmId) -> EcFixture {
    let (signing, curve_oid) = match algorithm {
        AlgorithmId::ES256 => (&signature::ECDSA_P256_SHA256_FIXED_SIGNING, "1.2.840.10045.3.1.7"),
        AlgorithmId::ES384 => (&signature::ECDSA_P384_SHA384_FIXED_SIGNING, "1.3.132.0.34"),
        AlgorithmId::ES512 => (&signature::ECDSA_P521_SHA512_FIXED_SIGNING, "1.3.132.0.35"),
        other => panic!("{other} is not an ECDSA algorithm"),
    };

    let keypair = EcdsaKeyPair::generate(signing).expect("failed to generate EC key");
    let public_pem = ec_public_key_pem(curve_oid, keypair.public_key().as_ref());

    EcFixture {
        keypair,
        public_pem,
    }
}

/// Wrap an uncompressed EC point in a PEM SubjectPublicKeyInfo
pub fn ec_public_key_pem(curve_oid: &str, point: &[u8]) -> String {
    let curve = ObjectIdentifier::new(curve_oid).expect("valid curve OID");
    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: ObjectIdentifier::new_unwrap("1.2.840.10045.2.1"),
            parameters: Some(AnyRef::from(&curve).into()),
        },
        subject_public_key: BitString::new(0, point.to_vec()).expect("bit string"),
    };
    let spki_der = spki.to_der().expect("failed to encode SPKI");
    der::pem::encode_string("PUBLIC KEY", LineEnding::LF, &spki_der).expect("failed to encode PEM")
}

/// Wrap arbitrary bytes in a PEM SubjectPublicKeyInfo tagged as rsaEncryption
pub fn rsa_spki_pem(rsa_public_key: &[u8]) -> String {
    let spki = SubjectPublicKeyInfoOwned {
        algorithm: AlgorithmIdentifierOwned {
            oid: ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1"),
            parameters: Some(AnyRef::NULL.into()),
        },
        subject_public_key: BitString::new(0, rsa_public_key.to_vec()).expect("bit string"),
    };
    let spki_der = spki.to_der().expect("failed to encode SPKI");
    der::pem::encode_string("PUBLIC KEY", LineEnding::LF, &spki_der).expect("failed to encode PEM")
}

/// `base64url(header).base64url(payload)`
pub fn signing_input(header: &str, payload: &str) -> String {
    format!(
        "{}.{}",
        base64url::encode(header),
        base64url::encode(payload)
    )
}

pub fn default_header(algorithm: AlgorithmId) -> String {
    format!(r#"{{"alg":"{algorithm}","typ":"JWT"}}"#)
}

/// Sign `signing_input` with an HMAC secret
pub fn hmac_signature(algorithm: AlgorithmId, signing_input: &str, secret: &[u8]) -> Vec<u8> {
    fn mac<M: Mac + hmac::digest::KeyInit>(secret: &[u8], input: &str) -> Vec<u8> {
        let mut mac = <M as Mac>::new_from_slice(secret).unwrap();
        mac.update(input.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    match algorithm {
        AlgorithmId::HS256 => mac::<Hmac<Sha256>>(secret, signing_input),
        AlgorithmId::HS384 => mac::<Hmac<Sha384>>(secret, signing_input),
        AlgorithmId::HS512 => mac::<Hmac<Sha512>>(secret, signing_input),
        other => panic!("{other} is not an HMAC algorithm"),
    }
}

/// Sign `signing_input` with the shared RSA key (PKCS#1 v1.5)
pub fn rsa_signature(algorithm: AlgorithmId, signing_input: &str) -> Vec<u8> {
    let fixture = rsa_fixture();
    let keypair = RsaKeyPair::from_pkcs8(&fixture.pkcs8_der).expect("failed to load RSA key");
    let rng = SystemRandom::new();
    let message = signing_input.as_bytes();
    let mut signature_bytes = vec![0u8; fixture.modulus_len];

    match algorithm {
        AlgorithmId::RS256 => {
            keypair.sign(&signature::RSA_PKCS1_SHA256, &rng, message, &mut signature_bytes)
        }
        AlgorithmId::RS384 => {
            keypair.sign(&signature::RSA_PKCS1_SHA384, &rng, message, &mut signature_bytes)
        }
        AlgorithmId::RS512 => {
            keypair.sign(&signature::RSA_PKCS1_SHA512, &rng, message, &mut signature_bytes)
        }
        other => panic!("{other} is not an RSA algorithm"),
    }
    .expect("failed to sign");

    signature_bytes
}

/// Sign `signing_input` with an ECDSA key (fixed-width `r || s`)
pub fn ec_signature(fixture: &EcFixture, signing_input: &str) -> Vec<u8> {
    fixture
        .keypair
        .sign(&SystemRandom::new(), signing_input.as_bytes())
        .expect("failed to sign")
        .as_ref()
        .to_vec()
}

/// Build a signed token for any algorithm, returning `(token, key material)`
pub fn signed_token(algorithm: AlgorithmId, header: &str, payload: &str) -> (String, String) {
    let input = signing_input(header, payload);
    let (signature, key) = match algorithm {
        AlgorithmId::HS256 | AlgorithmId::HS384 | AlgorithmId::HS512 => (
            hmac_signature(algorithm, &input, HMAC_SECRET.as_bytes()),
            HMAC_SECRET.to_string(),
        ),
        AlgorithmId::RS256 | AlgorithmId::RS384 | AlgorithmId::RS512 => (
            rsa_signature(algorithm, &input),
            rsa_fixture().public_pem.clone(),
        ),
        AlgorithmId::ES256 | AlgorithmId::ES384 | AlgorithmId::ES512 => {
            let fixture = ec_fixture(algorithm);
            (ec_signature(&fixture, &input), fixture.public_pem)
        }
    };

    (
        format!("{input}.{}", base64url::encode_bytes(&signature)),
        key,
    )
}

/// Token with an unsigned-looking but well-formed third segment
pub fn unsigned_token(header: &str, payload: &str) -> String {
    format!("{}.{}", signing_input(header, payload), base64url::encode("sig"))
}

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}
