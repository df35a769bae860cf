//! HMAC algorithm benchmarks (HS256, HS384, HS512)
//!
//! Benchmarks the performance of different HMAC algorithms
//! to compare hash function overhead.

use criterion::{Criterion, criterion_group, criterion_main};
use jwtlens::*;

/// Helper to generate HMAC-signed tokens
mod helpers {
    use hmac::{Hmac, Mac};
    use jwtlens::AlgorithmId;
    use jwtlens::utils::base64url;
    use sha2::{Sha256, Sha384, Sha512};

    pub fn generate_hmac_token(secret: &[u8], alg: AlgorithmId) -> String {
        let header = format!(r#"{{"alg":"{}","typ":"JWT"}}"#, alg);
        let now = chrono::Utc::now().timestamp();

        let payload = format!(
            r#"{{"sub":"user123","iss":"https://example.com","iat":{},"exp":{}}}"#,
            now,
            now + 3600
        );

        let header_b64 = base64url::encode(&header);
        let payload_b64 = base64url::encode(&payload);
        let signing_input = format!("{}.{}", header_b64, payload_b64);

        let signature_bytes = match alg {
            AlgorithmId::HS256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(secret).unwrap();
                mac.update(signing_input.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
            AlgorithmId::HS384 => {
                let mut mac = Hmac::<Sha384>::new_from_slice(secret).unwrap();
                mac.update(signing_input.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
            AlgorithmId::HS512 => {
                let mut mac = Hmac::<Sha512>::new_from_slice(secret).unwrap();
                mac.update(signing_input.as_bytes());
                mac.finalize().into_bytes().to_vec()
            }
            other => panic!("Unsupported algorithm: {}", other),
        };

        let signature_b64 = base64url::encode_bytes(&signature_bytes);
        format!("{}.{}", signing_input, signature_b64)
    }
}

fn bench_hmac_verification(c: &mut Criterion) {
    use helpers::generate_hmac_token;

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let verifier = Verifier::new();

    let mut group = c.benchmark_group("hmac_verification");

    for (alg, secret) in [
        (AlgorithmId::HS256, "test-secret-key-for-hs256"),
        (AlgorithmId::HS384, "test-secret-key-for-hs384-needs-to-be-longer"),
        (
            AlgorithmId::HS512,
            "test-secret-key-for-hs512-needs-to-be-even-longer-for-512-bits",
        ),
    ] {
        let token = generate_hmac_token(secret.as_bytes(), alg);

        group.bench_function(alg.as_str(), |b| {
            b.to_async(&runtime)
                .iter(|| verifier.verify(&token, alg.as_str(), secret));
        });
    }

    group.finish();
}

fn bench_hmac_with_time_claims(c: &mut Criterion) {
    use helpers::generate_hmac_token;

    let runtime = tokio::runtime::Runtime::new().unwrap();
    let verifier = Verifier::new().time_claims(true);
    let secret = "test-secret-key-for-hs256";
    let token = generate_hmac_token(secret.as_bytes(), AlgorithmId::HS256);

    let mut group = c.benchmark_group("hmac_time_claims");

    group.bench_function("HS256", |b| {
        b.to_async(&runtime)
            .iter(|| verifier.verify(&token, "HS256", secret));
    });

    group.bench_function("HS256_wrong_secret", |b| {
        b.to_async(&runtime)
            .iter(|| verifier.verify(&token, "HS256", "not-the-secret"));
    });

    group.finish();
}

criterion_group!(benches, bench_hmac_verification, bench_hmac_with_time_claims);
criterion_main!(benches);
