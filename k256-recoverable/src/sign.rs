//! Raw ECDSA signing with a random ephemeral nonce.
//!
//! No low-S normalization is applied: `s` is returned exactly as computed.

use crate::arithmetic::GroupArithmetic;
use elliptic_curve::{
    Field, PrimeField,
    bigint::{ArrayEncoding, U256},
    ops::Reduce,
    rand_core::CryptoRngCore,
    zeroize::Zeroize,
};
use k256::FieldBytes;
use tracing::trace;

/// Number of nonces drawn before a raw signing attempt gives up.
///
/// Every nonce a working CSPRNG produces is usable except with probability
/// about 2⁻²⁵⁶, so running out means the RNG is broken.
const MAX_NONCE_DRAWS: usize = 8;

/// ECDSA signature components `(r, s)` before a recovery ID is attached.
///
/// Both components are non-zero scalars.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RawSignature<S> {
    r: S,
    s: S,
}

impl<S: PrimeField<Repr = FieldBytes>> RawSignature<S> {
    /// `r` component.
    pub fn r(&self) -> &S {
        &self.r
    }

    /// `s` component.
    pub fn s(&self) -> &S {
        &self.s
    }

    /// `r` as a 256-bit unsigned integer.
    pub fn r_uint(&self) -> U256 {
        U256::from_be_byte_array(self.r.to_repr())
    }

    /// `s` as a 256-bit unsigned integer.
    pub fn s_uint(&self) -> U256 {
        U256::from_be_byte_array(self.s.to_repr())
    }
}

/// Sign the prehashed message `z` with secret scalar `d` and ephemeral
/// scalar `k`.
///
/// Returns `None` if `k`, `r` or `s` is zero, in which case the caller must
/// retry with a different `k`.
///
/// The same `k` must never be used for two different signatures: doing so
/// reveals `d`.
#[allow(clippy::many_single_char_names)]
pub fn try_sign_prehashed<C: GroupArithmetic>(
    d: &C::Scalar,
    k: &C::Scalar,
    z: &FieldBytes,
) -> Option<RawSignature<C::Scalar>> {
    if k.is_zero().into() {
        return None;
    }

    // Compute `x`-coordinate of affine point 𝑘×𝑮 and reduce it modulo the
    // group order
    let x = C::x_coordinate(&C::mul(&C::domain().generator, k))?;
    let r = <C::Scalar as Reduce<U256>>::reduce_bytes(&x);

    // Reduce message hash to an element of the scalar field
    let z = <C::Scalar as Reduce<U256>>::reduce_bytes(z);

    // Compute `s` as a signature over `r` and `z`
    let k_inv = Option::<C::Scalar>::from(k.invert())?;
    let s = k_inv * (z + r * d);

    if bool::from(r.is_zero() | s.is_zero()) {
        return None;
    }

    Some(RawSignature { r, s })
}

/// Sign the prehashed message `z` with secret scalar `d`, drawing a fresh
/// nonce from `rng`.
///
/// Degenerate nonces are discarded and redrawn. `None` is only returned if
/// `rng` keeps producing them.
pub fn sign_prehashed<C, R>(
    d: &C::Scalar,
    z: &FieldBytes,
    rng: &mut R,
) -> Option<RawSignature<C::Scalar>>
where
    C: GroupArithmetic,
    R: CryptoRngCore + ?Sized,
{
    for _ in 0..MAX_NONCE_DRAWS {
        let mut k = <C::Scalar as Field>::random(&mut *rng);
        let signature = try_sign_prehashed::<C>(d, &k, z);
        k.zeroize();

        if signature.is_some() {
            return signature;
        }

        trace!("discarding degenerate ECDSA nonce");
    }

    None
}
