//! Public key recovery.
//!
//! Given a signature `(r, s)`, the digest `e` it was computed over and a
//! recovery ID, the signer's public key is reconstructed by solving the
//! ECDSA verification equation for the key:
//!
//! ```text
//! Q = r⁻¹·(s·R - e·G)
//! ```
//!
//! where `R` is the curve point whose `x`-coordinate is `r` and whose `y`
//! parity is selected by the recovery ID.

use crate::{DIGEST_SIZE, Error, PublicKeyBytes, Result, arithmetic::GroupArithmetic};
use elliptic_curve::{
    Field,
    bigint::{ArrayEncoding, U256},
    ops::Reduce,
};
use k256::FieldBytes;

/// Identifier used to select which of the two points sharing an
/// `x`-coordinate was the signer's ephemeral point `R`.
///
/// Only the values `0` and `1` are supported: they indicate whether `R`'s
/// `y`-coordinate is even or odd. The values `2` and `3`, which would also
/// flag that `R.x` overflowed the group order, occur with negligible
/// probability and are rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Every supported recovery ID, in the order they are tried when
    /// signing.
    pub const ALL: [Self; 2] = [Self(0), Self(1)];

    /// Create a new [`RecoveryId`] from its byte value.
    pub fn new(byte: u8) -> Result<Self> {
        match byte {
            0 | 1 => Ok(Self(byte)),
            _ => Err(Error::InvalidRecoveryId(byte)),
        }
    }

    /// Is `R`'s `y`-coordinate odd?
    pub fn is_y_odd(self) -> bool {
        self.0 & 1 == 1
    }

    /// Did `R.x` overflow the group order? Always `false` for supported IDs.
    pub fn is_x_reduced(self) -> bool {
        self.0 >> 1 == 1
    }

    /// Byte value of this recovery ID.
    pub fn to_byte(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::new(byte)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> u8 {
        id.0
    }
}

impl TryFrom<ecdsa_core::RecoveryId> for RecoveryId {
    type Error = Error;

    fn try_from(id: ecdsa_core::RecoveryId) -> Result<Self> {
        Self::new(id.to_byte())
    }
}

impl From<RecoveryId> for ecdsa_core::RecoveryId {
    fn from(id: RecoveryId) -> ecdsa_core::RecoveryId {
        ecdsa_core::RecoveryId::new(id.is_y_odd(), id.is_x_reduced())
    }
}

/// Recover the candidate public key for signature `(r, s)` over `digest`.
///
/// Returns `Ok(None)` when the recovery ID admits no candidate: either
/// `r` (plus the group order, for overflowed IDs) is not less than the
/// field prime, it is not the `x`-coordinate of a curve point, the point is
/// outside the prime order subgroup, or the reconstructed key is the point
/// at infinity.
///
/// The only error is [`Error::NonInvertibleR`], for `r ≡ 0 (mod N)`.
#[allow(non_snake_case)]
pub fn recover<C: GroupArithmetic>(
    recovery_id: RecoveryId,
    r: &U256,
    s: &U256,
    digest: &FieldBytes,
) -> Result<Option<PublicKeyBytes>> {
    let domain = C::domain();

    let r_scalar = <C::Scalar as Reduce<U256>>::reduce(*r);
    let r_inv = Option::<C::Scalar>::from(r_scalar.invert()).ok_or(Error::NonInvertibleR)?;

    let x = if recovery_id.is_x_reduced() {
        let x = r.wrapping_add(&domain.order);
        if x < *r {
            return Ok(None);
        }
        x
    } else {
        *r
    };

    if x >= domain.field_modulus {
        return Ok(None);
    }

    let Some(R) = C::decompress(&x.to_be_byte_array(), recovery_id.is_y_odd()) else {
        return Ok(None);
    };

    // N·R = (N - 1)·R + R
    let n_r = C::add(&C::mul(&R, &-<C::Scalar as Field>::ONE), &R);
    if !C::is_identity(&n_r) {
        return Ok(None);
    }

    let e = <C::Scalar as Reduce<U256>>::reduce_bytes(digest);
    let s = <C::Scalar as Reduce<U256>>::reduce(*s);
    let e_neg_r_inv = r_inv * -e;
    let s_r_inv = r_inv * s;

    let q = C::lincomb(&domain.generator, &e_neg_r_inv, &R, &s_r_inv);
    Ok(C::encode_uncompressed(&q))
}

/// Recover the candidate secp256k1 public key for signature `(r, s)` over
/// a 32-byte `digest`, using recovery ID `recovery_id`.
///
/// Arguments are validated first: the recovery ID must be `0` or `1`, the
/// digest must be exactly [`DIGEST_SIZE`] bytes and `r` must not be a
/// multiple of the group order. `Ok(None)` means the arguments are
/// well-formed but no public key corresponds to them.
pub fn recover_public_key(
    recovery_id: u8,
    r: &U256,
    s: &U256,
    digest: &[u8],
) -> Result<Option<PublicKeyBytes>> {
    let recovery_id = RecoveryId::new(recovery_id)?;

    let digest: [u8; DIGEST_SIZE] = digest.try_into().map_err(|_| Error::InvalidDigestLength {
        actual: digest.len(),
    })?;

    recover::<k256::Secp256k1>(recovery_id, r, s, &FieldBytes::from(digest))
}
