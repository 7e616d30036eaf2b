#![no_main]
use k256_recoverable::{Blake2b256, KeyPair, SignOptions, sign_recoverable_with_rng};
use libfuzzer_sys::fuzz_target;
use rand_chacha::{ChaChaRng, rand_core::SeedableRng};

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let Ok(key_pair) = KeyPair::from_bytes(&data[..32]) else {
        return;
    };
    let seed: [u8; 32] = data[32..64].try_into().unwrap();
    let message = &data[64..];

    let signature = sign_recoverable_with_rng::<Blake2b256, _>(
        message,
        &key_pair,
        &SignOptions::new(),
        &mut ChaChaRng::from_seed(seed),
    )
    .unwrap();

    let digest = <Blake2b256 as k256_recoverable::digest::Digest>::digest(message);
    let recovered = signature.recover_public_key(&digest).unwrap();
    assert_eq!(recovered.as_ref(), Some(key_pair.public_key()));

    let bytes = signature.to_bytes();
    assert!(bytes[64] <= 1);
});
