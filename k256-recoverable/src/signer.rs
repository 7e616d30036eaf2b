//! Recoverable signing.
//!
//! A raw ECDSA signature is turned into a [`SignatureData`] by trial
//! recovery: each [`RecoveryId`] is tried in turn and the one which
//! reproduces the signer's public key is attached. If neither does, the
//! message is signed again with a fresh nonce, up to
//! [`SignOptions::max_attempts`] times.

use crate::{
    DIGEST_SIZE, Error, KeyPair, PublicKeyBytes, Result,
    arithmetic::GroupArithmetic,
    recoverable::SignatureData,
    recovery::{RecoveryId, recover},
    sign::sign_prehashed,
};
use digest::{Digest, consts::U32};
use elliptic_curve::{rand_core::CryptoRngCore, zeroize::Zeroize};
use k256::{FieldBytes, Scalar, Secp256k1};
use tracing::{debug, trace, warn};

#[cfg(feature = "blake2b")]
use {
    crate::Blake2b256,
    signature::{RandomizedSigner, hazmat::RandomizedPrehashSigner},
};

#[cfg(all(feature = "blake2b", feature = "getrandom"))]
use rand_core::OsRng;

/// Default bound on the number of raw signatures attempted by a single
/// recoverable signing operation.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 32;

/// Options controlling recoverable signing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignOptions {
    hash_first: bool,
    max_attempts: u32,
}

impl SignOptions {
    /// Hash the message first and make at most [`DEFAULT_MAX_ATTEMPTS`]
    /// attempts.
    pub const fn new() -> Self {
        Self {
            hash_first: true,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Whether the message is hashed before signing. When `false` the
    /// message must already be a [`DIGEST_SIZE`]-byte digest.
    pub const fn with_hash_first(mut self, hash_first: bool) -> Self {
        self.hash_first = hash_first;
        self
    }

    /// Maximum number of raw signatures attempted. Zero is treated as one.
    pub const fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = if max_attempts == 0 { 1 } else { max_attempts };
        self
    }

    /// Is the message hashed before signing?
    pub const fn hash_first(&self) -> bool {
        self.hash_first
    }

    /// Maximum number of raw signatures attempted.
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for SignOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the digest which is actually signed.
pub(crate) fn message_digest<D>(message: &[u8], hash_first: bool) -> Result<FieldBytes>
where
    D: Digest<OutputSize = U32>,
{
    if hash_first {
        return Ok(D::digest(message));
    }

    let digest: [u8; DIGEST_SIZE] = message.try_into().map_err(|_| Error::InvalidDigestLength {
        actual: message.len(),
    })?;

    Ok(FieldBytes::from(digest))
}

/// Sign `digest` until a recovery ID reproduces `public_key`.
pub(crate) fn resolve<C, R>(
    secret: &C::Scalar,
    public_key: &PublicKeyBytes,
    digest: &FieldBytes,
    max_attempts: u32,
    rng: &mut R,
) -> Result<SignatureData>
where
    C: GroupArithmetic,
    R: CryptoRngCore + ?Sized,
{
    let max_attempts = max_attempts.max(1);
    let mut mismatches = 0;

    for attempt in 1..=max_attempts {
        let Some(raw) = sign_prehashed::<C, R>(secret, digest, rng) else {
            trace!(attempt, "no usable nonce drawn");
            continue;
        };

        let (r, s) = (raw.r_uint(), raw.s_uint());
        let mut candidate_found = false;

        for recovery_id in RecoveryId::ALL {
            match recover::<C>(recovery_id, &r, &s, digest)? {
                Some(candidate) if candidate == *public_key => {
                    debug!(
                        attempt,
                        recovery_id = recovery_id.to_byte(),
                        "resolved recovery id"
                    );
                    return Ok(SignatureData::from_raw(recovery_id, &raw));
                }
                Some(_) => candidate_found = true,
                None => (),
            }
        }

        if candidate_found {
            mismatches += 1;
        }

        trace!(attempt, candidate_found, "no recovery id reproduced the key");
    }

    if mismatches == max_attempts {
        warn!(attempts = max_attempts, "recovered keys never matched the signer");
        Err(Error::KeyMismatch {
            attempts: max_attempts,
        })
    } else {
        warn!(attempts = max_attempts, "recoverable signing attempts exhausted");
        Err(Error::AttemptsExhausted {
            attempts: max_attempts,
        })
    }
}

/// Sign `message` with `key_pair` so that its public key can be recovered
/// from the signature, hashing with `D` if [`SignOptions::hash_first`] is
/// set and drawing nonces from `rng`.
pub fn sign_recoverable_with_rng<D, R>(
    message: &[u8],
    key_pair: &KeyPair,
    options: &SignOptions,
    rng: &mut R,
) -> Result<SignatureData>
where
    D: Digest<OutputSize = U32>,
    R: CryptoRngCore + ?Sized,
{
    let digest = message_digest::<D>(message, options.hash_first)?;

    let mut secret: Scalar = *key_pair.secret_scalar();
    let signature = resolve::<Secp256k1, R>(
        &secret,
        key_pair.public_key(),
        &digest,
        options.max_attempts,
        rng,
    );
    secret.zeroize();

    signature
}

/// Sign `message` with `key_pair` using Blake2b-256 (if `hash_first`) and
/// the operating system's RNG.
///
/// When `hash_first` is `false` the message must already be a
/// [`DIGEST_SIZE`]-byte digest.
#[cfg(all(feature = "blake2b", feature = "getrandom"))]
pub fn sign_recoverable(
    message: &[u8],
    hash_first: bool,
    key_pair: &KeyPair,
) -> Result<SignatureData> {
    let options = SignOptions::new().with_hash_first(hash_first);
    sign_recoverable_with_rng::<Blake2b256, _>(message, key_pair, &options, &mut OsRng)
}

#[cfg(all(feature = "blake2b", feature = "getrandom"))]
impl KeyPair {
    /// Hash `message` with Blake2b-256 and sign it recoverably.
    pub fn sign_message(&self, message: &[u8]) -> Result<SignatureData> {
        sign_recoverable(message, true, self)
    }
}

#[cfg(feature = "blake2b")]
impl RandomizedSigner<SignatureData> for KeyPair {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<SignatureData> {
        Ok(sign_recoverable_with_rng::<Blake2b256, _>(
            msg,
            self,
            &SignOptions::new(),
            rng,
        )?)
    }
}

#[cfg(feature = "blake2b")]
impl RandomizedPrehashSigner<SignatureData> for KeyPair {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<SignatureData> {
        let options = SignOptions::new().with_hash_first(false);
        Ok(sign_recoverable_with_rng::<Blake2b256, _>(
            prehash, self, &options, rng,
        )?)
    }
}
