//! Recoverable ECDSA benchmarks

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use hex_literal::hex;
use k256::{FieldBytes, Scalar, Secp256k1, elliptic_curve::PrimeField};
use k256_recoverable::{
    Blake2b256, KeyPair, SignOptions, recover_public_key, sign_recoverable_with_rng,
    try_sign_prehashed,
};
use rand_chacha::{ChaCha20Rng, rand_core::SeedableRng};

const SECRET_KEY: [u8; 32] =
    hex!("bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6");

const DIGEST: [u8; 32] = hex!("324dcf027dd4a30a932c441f365a25e86b173defa4b8e58948253471b81b72cf");

const NONCE: [u8; 32] = hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a");

fn scalar(bytes: &[u8; 32]) -> Scalar {
    Scalar::from_repr((*bytes).into()).unwrap()
}

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa");

    let d = scalar(&SECRET_KEY);
    let k = scalar(&NONCE);
    let z = FieldBytes::from(DIGEST);

    group.bench_function("try_sign_prehashed", |b| {
        b.iter(|| try_sign_prehashed::<Secp256k1>(black_box(&d), black_box(&k), black_box(&z)))
    });

    group.finish();
}

fn bench_recoverable(c: &mut Criterion) {
    let mut group = c.benchmark_group("recoverable");

    let key_pair = KeyPair::from_bytes(&SECRET_KEY).unwrap();
    let options = SignOptions::new();
    let mut rng = ChaCha20Rng::seed_from_u64(0);

    group.bench_function("sign_recoverable", |b| {
        b.iter(|| {
            sign_recoverable_with_rng::<Blake2b256, _>(
                black_box(b"hello"),
                black_box(&key_pair),
                &options,
                &mut rng,
            )
            .unwrap()
        })
    });

    let signature = sign_recoverable_with_rng::<Blake2b256, _>(
        b"hello",
        &key_pair,
        &options,
        &mut ChaCha20Rng::seed_from_u64(1),
    )
    .unwrap();
    let (v, r, s) = (
        u8::from(signature.v()),
        signature.r_uint(),
        signature.s_uint(),
    );

    group.bench_function("recover_public_key", |b| {
        b.iter(|| {
            recover_public_key(black_box(v), black_box(&r), black_box(&s), black_box(&DIGEST))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa, bench_recoverable);
criterion_main!(benches);
