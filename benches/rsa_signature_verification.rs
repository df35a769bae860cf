use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{RSA_PKCS1_SHA256, RsaKeyPair};
use criterion::{Criterion, criterion_group, criterion_main};
use jwtlens::utils::base64url;
use jwtlens::*;
use rsa::RsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use std::env;
use std::fs;

/// Token and PEM public key, from `RSA_JWT`/`RSA_PUB_PEM_PATH` or generated on the fly
fn rs256_fixture() -> (String, String) {
    if let (Ok(token), Ok(path)) = (env::var("RSA_JWT"), env::var("RSA_PUB_PEM_PATH")) {
        let pem = fs::read_to_string(&path).expect("Failed to read public key PEM");
        return (token, pem);
    }

    let header = r#"{"alg":"RS256","typ":"JWT"}"#;
    let payload = r#"{"sub":"user123","iat":1516239022,"exp":9999999999}"#;

    let mut rng = rand::thread_rng();
    let rsa_private_key =
        RsaPrivateKey::new(&mut rng, 2048).expect("Failed to generate RSA key pair");
    let public_pem = rsa_private_key
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .expect("Failed to serialize public key");
    let pkcs8_doc = rsa_private_key
        .to_pkcs8_der()
        .expect("Failed to serialize private key");
    let keypair =
        RsaKeyPair::from_pkcs8(pkcs8_doc.as_bytes()).expect("Failed to create RsaKeyPair");

    let signing_input = format!(
        "{}.{}",
        base64url::encode(header),
        base64url::encode(payload)
    );

    let mut signature_bytes = vec![0u8; rsa_private_key.size()];
    keypair
        .sign(
            &RSA_PKCS1_SHA256,
            &SystemRandom::new(),
            signing_input.as_bytes(),
            &mut signature_bytes,
        )
        .expect("Failed to sign");

    let token = format!(
        "{}.{}",
        signing_input,
        base64url::encode_bytes(&signature_bytes)
    );

    (token, public_pem)
}

/// Benchmark RS256 signature verification
fn bench_rs256_verification(c: &mut Criterion) {
    let (token_str, public_pem) = rs256_fixture();
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let verifier = Verifier::new();

    let mut group = c.benchmark_group("rs256_verification");

    group.bench_function("rs256_verify", |b| {
        b.to_async(&runtime)
            .iter(|| verifier.verify(&token_str, "RS256", &public_pem));
    });

    group.bench_function("rs256_key_import", |b| {
        b.iter(|| Key::import(&AlgorithmId::RS256, &public_pem).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_rs256_verification);
criterion_main!(benches);
