#![no_main]
use k256_recoverable::{Error, SignatureData, U256, recover_public_key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 97 {
        return;
    }

    let v = data[0];
    let r = U256::from_be_slice(&data[1..33]);
    let s = U256::from_be_slice(&data[33..65]);
    let digest = &data[65..];

    let first = recover_public_key(v, &r, &s, digest);

    // Recovery is a pure function of its inputs
    assert_eq!(first, recover_public_key(v, &r, &s, digest));

    match first {
        Ok(_) => {
            assert!(v <= 1);
            assert_eq!(digest.len(), 32);
        }
        Err(Error::InvalidRecoveryId(id)) => assert_eq!(id, v),
        Err(Error::InvalidDigestLength { actual }) => assert_eq!(actual, digest.len()),
        Err(Error::NonInvertibleR) => (),
        Err(other) => panic!("unexpected recovery error: {other}"),
    }

    // Parsing arbitrary signatures never panics and agrees with recovery
    if let (Ok(signature), Ok(digest)) = (
        SignatureData::try_from(&data[..65]),
        <&[u8; 32]>::try_from(&data[65..97]),
    ) {
        let _ = signature.recover_public_key(digest);
    }
});
